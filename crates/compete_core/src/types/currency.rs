//! Display currencies for prices and costs.
//!
//! The engine is currency-agnostic: every amount is a plain `f64` in the
//! caller's unit. `Currency` only controls how amounts are rendered in
//! reports and command-line output.
//!
//! # Examples
//!
//! ```
//! use compete_core::types::Currency;
//!
//! let usd = Currency::USD;
//! assert_eq!(usd.code(), "USD");
//! assert_eq!(usd.symbol(), "$");
//!
//! let cny: Currency = "cny".parse().unwrap();
//! assert_eq!(cny, Currency::CNY);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::CurrencyError;

/// ISO 4217 currency codes supported for display.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// United States Dollar
    #[default]
    USD,

    /// Chinese Yuan Renminbi
    CNY,

    /// Euro
    EUR,
}

impl Currency {
    /// Returns the ISO 4217 three-letter currency code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::CNY => "CNY",
            Currency::EUR => "EUR",
        }
    }

    /// Returns the conventional currency symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::CNY => "¥",
            Currency::EUR => "€",
        }
    }

    /// Returns the standard number of decimal places for this currency.
    pub fn decimal_places(&self) -> u8 {
        2
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "CNY" | "RMB" => Ok(Currency::CNY),
            "EUR" => Ok(Currency::EUR),
            _ => Err(CurrencyError::UnknownCurrency(s.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_codes() {
        assert_eq!(Currency::USD.code(), "USD");
        assert_eq!(Currency::CNY.code(), "CNY");
        assert_eq!(Currency::EUR.code(), "EUR");
    }

    #[test]
    fn test_currency_symbols() {
        assert_eq!(Currency::USD.symbol(), "$");
        assert_eq!(Currency::CNY.symbol(), "¥");
        assert_eq!(Currency::EUR.symbol(), "€");
    }

    #[test]
    fn test_currency_from_str_case_insensitive() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::USD);
        assert_eq!(" Eur ".parse::<Currency>().unwrap(), Currency::EUR);
        assert_eq!("rmb".parse::<Currency>().unwrap(), Currency::CNY);
    }

    #[test]
    fn test_currency_from_str_unknown() {
        let err = "XYZ".parse::<Currency>().unwrap_err();
        assert_eq!(err, CurrencyError::UnknownCurrency("XYZ".to_string()));
    }

    #[test]
    fn test_currency_display_and_default() {
        assert_eq!(format!("{}", Currency::EUR), "EUR");
        assert_eq!(Currency::default(), Currency::USD);
    }
}
