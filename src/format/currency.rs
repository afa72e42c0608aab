//! Per-value currency formatting for tooltips and summary totals

use super::to_fixed;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyUnit {
    Billion,
    Million,
    Dollars,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrencyFormat {
    pub unit: CurrencyUnit,
    pub divisor: f64,
    pub decimals: usize,
    pub suffix: &'static str,
}

/// Pick the currency format from a single value's own magnitude
pub fn currency_format_for(value: f64) -> CurrencyFormat {
    let magnitude = value.abs();
    if magnitude >= 1e9 {
        CurrencyFormat {
            unit: CurrencyUnit::Billion,
            divisor: 1e9,
            decimals: 2,
            suffix: " Billion",
        }
    } else if magnitude >= 1e6 {
        CurrencyFormat {
            unit: CurrencyUnit::Million,
            divisor: 1e6,
            decimals: 2,
            suffix: " Million",
        }
    } else {
        CurrencyFormat {
            unit: CurrencyUnit::Dollars,
            divisor: 1.0,
            decimals: 2,
            suffix: "",
        }
    }
}

/// "$X.XX Billion", "$X.XX Million" or "$X.XX"
pub fn format_currency(value: f64) -> String {
    let fmt = currency_format_for(value);
    format!("${}{}", to_fixed(value / fmt.divisor, fmt.decimals), fmt.suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{AxisScale, AxisUnit};

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(19000.0), "$19000.00");
        assert_eq!(format_currency(1234.0), "$1234.00");
        assert_eq!(format_currency(2_500_000.0), "$2.50 Million");
        assert_eq!(format_currency(7.125e9), "$7.13 Billion");
        assert_eq!(format_currency(-3_000_000.0), "$-3.00 Million");
        assert_eq!(format_currency(-42.5), "$-42.50");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn test_threshold_uses_absolute_value() {
        assert_eq!(currency_format_for(-1e9).unit, CurrencyUnit::Billion);
        assert_eq!(currency_format_for(-999_999.99).unit, CurrencyUnit::Dollars);
        assert_eq!(currency_format_for(1e6).unit, CurrencyUnit::Million);
    }

    #[test]
    fn test_independent_of_axis_scale() {
        // Shared axis max in billions, individual value small
        let axis = AxisScale::for_max(5e9);
        assert_eq!(axis.unit, AxisUnit::Billions);
        assert_eq!(axis.title, "Profit (Billions USD)");
        assert_eq!(format_currency(5e5), "$500000.00");
    }
}
