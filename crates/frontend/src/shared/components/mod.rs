pub mod charts;
pub mod movie_select;
pub mod pagination_controls;
pub mod stat_card;
