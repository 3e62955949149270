//! Decimal-string to minor-unit parsing.

use crate::error::DomainError;

/// Converts a human-entered decimal string into a count of minor units,
/// assuming exactly two implied decimal places.
///
/// The accepted shape is: an optional `+` or `-` sign, a possibly empty run
/// of integer digits, then an optional single `.` or `,` separator followed
/// by up to two fractional digits. At least one digit must appear somewhere.
/// Missing fractional digits default to zero, so `"1"` parses to `100` and
/// `".99"` to `99`.
///
/// The transform is fixed at two implied places and is not currency-aware;
/// it never consults a currency's actual minor-unit exponent.
pub fn string_to_units(input: &str) -> Result<i64, DomainError> {
    let mut chars = input.chars().peekable();
    let mut digits = String::with_capacity(input.len() + 2);

    match chars.peek() {
        Some('-') => {
            chars.next();
            digits.push('-');
        }
        Some('+') => {
            chars.next();
        }
        _ => {}
    }

    let mut seen_digits = 0usize;
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(c);
        seen_digits += 1;
        chars.next();
    }

    let mut fraction = ['0', '0'];
    if matches!(chars.peek(), Some('.') | Some(',')) {
        chars.next();
        for slot in fraction.iter_mut() {
            match chars.peek().copied() {
                Some(c) if c.is_ascii_digit() => {
                    *slot = c;
                    seen_digits += 1;
                    chars.next();
                }
                _ => break,
            }
        }
    }

    // Anything left over means a second separator, a third fractional
    // digit, or a non-digit character.
    if chars.next().is_some() || seen_digits == 0 {
        return Err(DomainError::InvalidAmountString(input.to_string()));
    }

    digits.push(fraction[0]);
    digits.push(fraction[1]);

    digits
        .parse::<i64>()
        .map_err(|_| DomainError::AmountOutOfRange(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_number() {
        assert_eq!(string_to_units("1000").unwrap(), 100_000);
        assert_eq!(string_to_units("1").unwrap(), 100);
        assert_eq!(string_to_units("0").unwrap(), 0);
    }

    #[test]
    fn test_fractional_digits() {
        assert_eq!(string_to_units("0.01").unwrap(), 1);
        assert_eq!(string_to_units("2.5").unwrap(), 250);
        assert_eq!(string_to_units("1000.00").unwrap(), 100_000);
    }

    #[test]
    fn test_missing_integer_digits() {
        assert_eq!(string_to_units(".99").unwrap(), 99);
        assert_eq!(string_to_units("-.99").unwrap(), -99);
    }

    #[test]
    fn test_signs() {
        assert_eq!(string_to_units("+1000.00").unwrap(), 100_000);
        assert_eq!(string_to_units("-12.34").unwrap(), -1234);
    }

    #[test]
    fn test_comma_separator() {
        assert_eq!(string_to_units("1,5").unwrap(), 150);
        assert_eq!(string_to_units("3,99").unwrap(), 399);
    }

    #[test]
    fn test_trailing_separator() {
        assert_eq!(string_to_units("12.").unwrap(), 1200);
    }

    #[test]
    fn test_malformed_strings_rejected() {
        for input in [
            "", "+", "-", ".", "abc", "1a", "1.2.3", "1,23,4", "12.345", "1 000", "1-2",
        ] {
            assert!(
                matches!(
                    string_to_units(input),
                    Err(DomainError::InvalidAmountString(_))
                ),
                "expected rejection of {input:?}"
            );
        }
    }

    #[test]
    fn test_out_of_range() {
        let result = string_to_units("99999999999999999999");
        assert!(matches!(result, Err(DomainError::AmountOutOfRange(_))));
    }
}
