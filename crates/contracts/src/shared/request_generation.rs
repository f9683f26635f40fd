//! Latest-request-wins guard for async list loads
//!
//! Each load takes a [`RequestTicket`]; when the response arrives it is applied
//! only if no newer load was started in the meantime.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestGeneration {
    current: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, invalidating every earlier ticket
    pub fn issue(&mut self) -> RequestTicket {
        self.current = self.current.wrapping_add(1);
        RequestTicket(self.current)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.current == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_order_responses() {
        let mut generation = RequestGeneration::new();
        let page_2 = generation.issue();
        let page_3 = generation.issue();

        // page 3 answers first, page 2 arrives late
        assert!(generation.is_current(page_3));
        assert!(!generation.is_current(page_2));
    }

    #[test]
    fn test_single_request_is_current() {
        let mut generation = RequestGeneration::new();
        let ticket = generation.issue();
        assert!(generation.is_current(ticket));
    }
}
