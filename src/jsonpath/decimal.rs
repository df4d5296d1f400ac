//! Exact base-10 decimals read from text.
//!
//! `rust_decimal::Decimal` holds 28 significant digits; JSON numbers and numeric
//! strings can carry more. Ordering and integer truncation go through
//! [`ExactDecimal`], which keeps every digit.

use std::cmp::Ordering;

/// A decimal value `digits * 10^exponent`.
///
/// `digits` has no leading or trailing zeros, so equal values have equal parts.
/// Zero has no digits, exponent 0 and is never negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactDecimal {
    negative: bool,
    digits: String,
    exponent: i64,
}

impl ExactDecimal {
    /// Parses `[+-]int[.frac][(e|E)[+-]exp]`, ignoring surrounding whitespace.
    ///
    /// One of `int` and `frac` may be empty. Digit separators, thousands
    /// separators and non-ASCII digits are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonselector::jsonpath::ExactDecimal;
    ///
    /// assert_eq!(ExactDecimal::parse("12.50"), ExactDecimal::parse("1.25e1"));
    /// assert!(ExactDecimal::parse("1_0").is_none());
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let (negative, unsigned) = match text.as_bytes().first()? {
            b'-' => (true, &text[1..]),
            b'+' => (false, &text[1..]),
            _ => (false, text),
        };

        let (mantissa, exponent) = match unsigned.find(|ch: char| ch == 'e' || ch == 'E') {
            Some(at) => (&unsigned[..at], parse_exponent(&unsigned[at + 1..])?),
            None => (unsigned, 0),
        };

        let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }
        if !int_part
            .bytes()
            .chain(frac_part.bytes())
            .all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let all_digits = format!("{}{}", int_part, frac_part);
        let leading = all_digits.trim_start_matches('0');
        let significant = leading.trim_end_matches('0');
        if significant.is_empty() {
            return Some(Self::zero());
        }

        let trailing_zeros = (leading.len() - significant.len()) as i64;
        let exponent = exponent
            .checked_sub(frac_part.len() as i64)?
            .checked_add(trailing_zeros)?;

        Some(Self {
            negative,
            digits: significant.to_string(),
            exponent,
        })
    }

    fn zero() -> Self {
        Self {
            negative: false,
            digits: String::new(),
            exponent: 0,
        }
    }

    fn signum(&self) -> i8 {
        match (self.digits.is_empty(), self.negative) {
            (true, _) => 0,
            (false, true) => -1,
            (false, false) => 1,
        }
    }

    /// Number of digits before the decimal point, negative for values below 0.1.
    fn magnitude(&self) -> i64 {
        (self.digits.len() as i64).saturating_add(self.exponent)
    }

    /// Truncates toward zero; `None` outside the `i32` range.
    pub fn trunc_to_i32(&self) -> Option<i32> {
        let whole_len = self.magnitude();
        if whole_len <= 0 {
            return Some(0);
        }
        // i32::MAX has 10 digits
        if whole_len > 10 {
            return None;
        }

        let mut whole: String = self.digits.chars().take(whole_len as usize).collect();
        while whole.len() < whole_len as usize {
            whole.push('0');
        }
        let value: i64 = whole.parse().ok()?;
        i32::try_from(if self.negative { -value } else { value }).ok()
    }
}

fn parse_exponent(text: &str) -> Option<i64> {
    let digits = text.strip_prefix(|ch: char| ch == '+' || ch == '-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl Ord for ExactDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.signum().cmp(&other.signum()).then_with(|| {
            let by_size = self
                .magnitude()
                .cmp(&other.magnitude())
                .then_with(|| self.digits.cmp(&other.digits));
            if self.negative {
                by_size.reverse()
            } else {
                by_size
            }
        })
    }
}

impl PartialOrd for ExactDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
