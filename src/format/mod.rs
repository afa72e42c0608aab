//! Magnitude-aware number formatting for axis ticks, tooltips and summaries
//!
//! Two independent rules live here. The axis scale is chosen once from the
//! largest value across both series, while currency strings are chosen per
//! value from that value's own magnitude. A small value can therefore print
//! as plain dollars on a chart whose axis is labelled in billions.

mod axis;
mod currency;

pub use axis::{AxisScale, AxisUnit};
pub use currency::{currency_format_for, format_currency, CurrencyFormat, CurrencyUnit};

/// Extra digits rendered when probing for an exact halfway case.
/// No double at or above 0.005 can sit within 1e-25 of a tie without being one.
const TIE_PROBE_DIGITS: usize = 25;

/// Render `value` with exactly `decimals` fractional digits.
///
/// Follows browser `toFixed` behavior rather than Rust's formatter:
/// exact ties round away from zero (2.5 -> "3"), the sign is printed for any
/// value below zero (-0.001 -> "-0.00") but not for negative zero, and
/// magnitudes of 1e21 and above fall back to exponent notation.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value.abs() >= 1e21 {
        return format!("{:e}", value).replacen('e', "e+", 1);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}", sign, fixed_magnitude(value.abs(), decimals))
}

fn fixed_magnitude(magnitude: f64, decimals: usize) -> String {
    let probe = format!("{:.*}", decimals + TIE_PROBE_DIGITS, magnitude);
    let (kept, tail) = probe.split_at(probe.len() - TIE_PROBE_DIGITS);
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');

    if !is_tie {
        return format!("{:.*}", decimals, magnitude);
    }

    let kept = kept.strip_suffix('.').unwrap_or(kept);
    increment_last_digit(kept)
}

/// Add one unit in the last place of a plain decimal string ("9.99" -> "10.00")
fn increment_last_digit(digits: &str) -> String {
    let mut bytes: Vec<u8> = digits.bytes().collect();
    let mut i = bytes.len();
    loop {
        if i == 0 {
            bytes.insert(0, b'1');
            break;
        }
        i -= 1;
        match bytes[i] {
            b'.' => continue,
            b'9' => bytes[i] = b'0',
            _ => {
                bytes[i] += 1;
                break;
            }
        }
    }
    bytes.into_iter().map(char::from).collect()
}
