use std::fmt;
use std::str::FromStr;

use crate::error::FootprintError;

/// Non-negative, finite amount of an activity (miles, kWh, therms...).
///
/// The unit is implied by the emission factor it is multiplied with; no
/// conversion happens here.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Quantity(f64);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0.0);

    pub fn new(value: f64) -> Result<Self, FootprintError> {
        if !value.is_finite() {
            return Err(FootprintError::InvalidQuantity {
                input: value.to_string(),
                reason: "quantity must be a finite number",
            });
        }
        if value < 0.0 {
            return Err(FootprintError::InvalidQuantity {
                input: value.to_string(),
                reason: "quantity must not be negative",
            });
        }
        // Normalise -0.0 so it prints as "0".
        Ok(Quantity(value + 0.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl FromStr for Quantity {
    type Err = FootprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| FootprintError::InvalidQuantity {
                input: trimmed.to_string(),
                reason: "not a number",
            })?;
        Quantity::new(value).map_err(|e| match e {
            FootprintError::InvalidQuantity { reason, .. } => FootprintError::InvalidQuantity {
                input: trimmed.to_string(),
                reason,
            },
            other => other,
        })
    }
}

impl TryFrom<f64> for Quantity {
    type Error = FootprintError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Quantity::new(value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_padded_numbers() {
        assert_eq!("5".parse::<Quantity>().unwrap().value(), 5.0);
        assert_eq!("  12.5 \n".parse::<Quantity>().unwrap().value(), 12.5);
        assert_eq!("0".parse::<Quantity>().unwrap(), Quantity::ZERO);
    }

    #[test]
    fn rejects_non_numeric_input() {
        let err = "abc".parse::<Quantity>().unwrap_err();
        match err {
            FootprintError::InvalidQuantity { input, reason } => {
                assert_eq!(input, "abc");
                assert_eq!(reason, "not a number");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!("".parse::<Quantity>().is_err());
    }

    #[test]
    fn rejects_negative_and_non_finite_values() {
        assert!("-1".parse::<Quantity>().is_err());
        assert!("inf".parse::<Quantity>().is_err());
        assert!("NaN".parse::<Quantity>().is_err());
        assert!(Quantity::new(f64::NEG_INFINITY).is_err());
        assert!(Quantity::try_from(-0.5).is_err());
    }

    #[test]
    fn negative_zero_displays_as_zero() {
        let q = Quantity::new(-0.0).unwrap();
        assert_eq!(q.to_string(), "0");
    }
}
