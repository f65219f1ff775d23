//! Presentation helpers for amounts and dates. Stored values stay numeric;
//! these only shape what a front end prints.

use chrono::NaiveDate;

const GROUPING_SEPARATOR: char = ',';

/// Grouped thousands with at most two decimals; integral values print
/// without a fractional part.
pub fn format_amount(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    let mut body = format!("{:.2}", rounded.abs());
    while body.ends_with('0') {
        body.pop();
    }
    if body.ends_with('.') {
        body.pop();
    }
    let (int_part, fraction) = match body.find('.') {
        Some(pos) => body.split_at(pos),
        None => (body.as_str(), ""),
    };
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!(
        "{}{}{}",
        sign,
        group_digits(int_part, GROUPING_SEPARATOR),
        fraction
    )
}

/// `"GHS 5,000"`.
pub fn format_currency(code: &str, amount: f64) -> String {
    format!("{} {}", code, format_amount(amount))
}

/// Day/month/year, e.g. `15/08/2025`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `format_date` for optional dates, with a dash for none.
pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "-".into())
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_group_thousands() {
        assert_eq!(format_amount(5000.0), "5,000");
        assert_eq!(format_amount(1234.5), "1,234.5");
        assert_eq!(format_amount(1_234_567.891), "1,234,567.89");
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(-2500.0), "-2,500");
    }

    #[test]
    fn currency_prefixes_code() {
        assert_eq!(format_currency("GHS", 5000.0), "GHS 5,000");
        assert_eq!(format_currency("GHS", 12.25), "GHS 12.25");
    }

    #[test]
    fn dates_render_day_first() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 5).unwrap();
        assert_eq!(format_date(date), "05/08/2025");
        assert_eq!(format_optional_date(None), "-");
    }
}
