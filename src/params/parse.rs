//! Lenient numeric parsing for form and CSV text
//!
//! Field text is read the way a browser reads a number input with `parseFloat`:
//! leading whitespace is skipped and the longest decimal prefix wins. Text with
//! no numeric prefix (including an empty field) becomes NaN, which validation
//! then rejects.

/// Parse the longest leading decimal literal of `text`, or NaN if there is none
pub fn parse_float(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();

    let mut pos = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        pos += 1;
    }
    let negative = bytes.first() == Some(&b'-');

    if trimmed[pos..].starts_with("Infinity") {
        return if negative { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(&bytes[pos + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(bytes.get(exp_pos), Some(b'+') | Some(b'-')) {
            exp_pos += 1;
        }
        let exp_digits = count_digits(&bytes[exp_pos.min(bytes.len())..]);
        if exp_digits > 0 {
            pos = exp_pos + exp_digits;
        }
    }

    let literal = &trimmed[..pos];
    // Rust's parser rejects a bare trailing '.', e.g. "5."
    let literal = literal.strip_suffix('.').unwrap_or(literal);
    literal.parse::<f64>().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
