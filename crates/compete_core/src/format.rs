//! Human-readable rendering of amounts, rates, and durations.

use crate::types::Currency;

fn group_thousands(integer: &str) -> String {
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format an amount with the currency symbol and thousands separators.
///
/// # Examples
///
/// ```
/// use compete_core::format::format_currency;
/// use compete_core::types::Currency;
///
/// assert_eq!(format_currency(1234.5, Currency::USD), "$1,234.50");
/// assert_eq!(format_currency(-80.0, Currency::EUR), "-€80.00");
/// assert_eq!(format_currency(0.0, Currency::CNY), "¥0.00");
/// ```
pub fn format_currency(amount: f64, currency: Currency) -> String {
    let decimals = currency.decimal_places() as usize;
    let formatted = format!("{:.*}", decimals, amount.abs());
    let (integer, fraction) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let sign = if amount < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    match fraction {
        Some(fraction) => format!(
            "{}{}{}.{}",
            sign,
            currency.symbol(),
            group_thousands(integer),
            fraction
        ),
        None => format!("{}{}{}", sign, currency.symbol(), group_thousands(integer)),
    }
}

/// Format a fraction as a percentage.
///
/// # Examples
///
/// ```
/// use compete_core::format::format_percentage;
///
/// assert_eq!(format_percentage(0.4, 1), "40.0%");
/// assert_eq!(format_percentage(0.1234, 2), "12.34%");
/// ```
pub fn format_percentage(rate: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, rate * 100.0)
}

/// Format a duration given in months.
///
/// Under one month the value is shown in days (30-day months), under a
/// year in months, and otherwise in years.
///
/// # Examples
///
/// ```
/// use compete_core::format::format_time_period;
///
/// assert_eq!(format_time_period(0.5), "15 days");
/// assert_eq!(format_time_period(4.0), "4.0 months");
/// assert_eq!(format_time_period(18.0), "1.5 years");
/// ```
pub fn format_time_period(months: f64) -> String {
    if months < 1.0 {
        let days = (months * 30.0).round();
        if days == 1.0 {
            "1 day".to_string()
        } else {
            format!("{} days", days)
        }
    } else if months < 12.0 {
        format!("{:.1} months", months)
    } else {
        format!("{:.1} years", months / 12.0)
    }
}
