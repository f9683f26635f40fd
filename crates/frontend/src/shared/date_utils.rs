/// Utilities for date, time and money formatting
///
/// Dates arrive as ISO strings from the backend and are shown as DD/MM/YYYY.

/// Format ISO datetime string to DD/MM/YYYY HH:MM format
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        let date = format_date(date_part);
        if date != date_part {
            return format!("{} {}", date, format_time(time_part));
        }
    }
    datetime_str.to_string()
}

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Keep hours and minutes: "14:30:00" -> "14:30"
pub fn format_time(time_str: &str) -> String {
    let mut parts = time_str.split(':');
    match (parts.next(), parts.next()) {
        (Some(h), Some(m)) if h.len() == 2 && m.len() >= 2 => format!("{}:{}", h, &m[..2]),
        _ => time_str.to_string(),
    }
}

/// Group digits by thousands with dots: 1250000 -> "1.250.000"
pub fn format_thousands(n: i64) -> String {
    let s = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Amount in VND, rounded to the unit
pub fn format_money(amount: f64) -> String {
    if !amount.is_finite() {
        return "0 ₫".to_string();
    }
    format!("{} ₫", format_thousands(amount.round() as i64))
}

/// Compact money label for chart axes: 1.2M, 350K
pub fn format_money_short(amount: f64) -> String {
    let abs = amount.abs();
    if abs >= 1_000_000_000.0 {
        format!("{:.1}B", amount / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("{:.1}M", amount / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.0}K", amount / 1_000.0)
    } else {
        format!("{:.0}", amount)
    }
}
