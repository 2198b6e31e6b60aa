use crate::convert::{ConversionError, TypeName};
use std::fmt;
use std::str::FromStr;

/// Arbitrary-precision decimal: `digits × 10^-scale`.
///
/// Equality is representational, so `2.0` and `2.00` differ in scale and
/// compare unequal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decimal {
    negative: bool,
    digits: String,
    scale: i64,
}

impl Decimal {
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Unscaled magnitude without leading zeros (`"0"` for zero).
    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn scale(&self) -> i64 {
        self.scale
    }

    pub fn is_zero(&self) -> bool {
        self.digits == "0"
    }

    pub fn to_f64(&self) -> f64 {
        let sign = if self.negative { "-" } else { "" };
        format!("{sign}{}e{}", self.digits, -(self.scale as i128))
            .parse()
            .unwrap_or(f64::NAN)
    }

    fn adjusted_exponent(&self) -> i128 {
        -(self.scale as i128) + (self.digits.len() as i128 - 1)
    }
}

impl FromStr for Decimal {
    type Err = ConversionError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let fail = |reason: &str| ConversionError::new(TypeName::Decimal, text, reason);
        let bytes = text.as_bytes();
        let mut idx = 0usize;
        let mut negative = false;

        match bytes.first() {
            Some(b'-') => {
                negative = true;
                idx = 1;
            }
            Some(b'+') => idx = 1,
            _ => {}
        }

        let mut digits = String::with_capacity(bytes.len());
        let mut fraction_len = 0i64;
        let mut seen_point = false;

        while idx < bytes.len() {
            match bytes[idx] {
                b @ b'0'..=b'9' => {
                    digits.push(b as char);
                    if seen_point {
                        fraction_len += 1;
                    }
                }
                b'.' if !seen_point => seen_point = true,
                _ => break,
            }
            idx += 1;
        }

        if digits.is_empty() {
            return Err(fail("expected at least one digit"));
        }

        let mut exponent = 0i64;
        if idx < bytes.len() && matches!(bytes[idx], b'e' | b'E') {
            exponent = text[idx + 1..]
                .parse::<i64>()
                .map_err(|_| fail("invalid exponent"))?;
            idx = bytes.len();
        }

        if idx != bytes.len() {
            return Err(fail("unexpected character"));
        }

        let scale = fraction_len
            .checked_sub(exponent)
            .ok_or_else(|| fail("exponent out of range"))?;

        let trimmed = digits.trim_start_matches('0');
        let digits = if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        };
        let negative = negative && digits != "0";

        Ok(Self {
            negative,
            digits,
            scale,
        })
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }

        let adjusted = self.adjusted_exponent();
        if self.scale >= 0 && adjusted >= -6 {
            let scale = self.scale as usize;
            if scale == 0 {
                return f.write_str(&self.digits);
            }
            if self.digits.len() > scale {
                let (int_part, frac_part) = self.digits.split_at(self.digits.len() - scale);
                return write!(f, "{int_part}.{frac_part}");
            }
            let padding = "0".repeat(scale - self.digits.len());
            return write!(f, "0.{padding}{}", self.digits);
        }

        // scientific form keeps very large or very small exponents bounded
        let (first, rest) = self.digits.split_at(1);
        f.write_str(first)?;
        if !rest.is_empty() {
            write!(f, ".{rest}")?;
        }
        if adjusted >= 0 {
            write!(f, "E+{adjusted}")
        } else {
            write!(f, "E{adjusted}")
        }
    }
}
