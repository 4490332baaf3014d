/// Groups digits by thousands: `1350000` → `1,350,000`.
pub fn format_amount(amount: i64) -> String {
    let s = amount.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    if amount < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Amount in units of 10,000 won, as shown on price boards.
pub fn format_man(amount: i64) -> String {
    format!("{}만", format_amount(amount))
}

pub fn format_rate(rate: f64) -> String {
    format!("{:.1}%", rate)
}
