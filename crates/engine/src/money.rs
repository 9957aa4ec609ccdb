use std::{
    fmt,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Decimal places of the display currency.
const DISPLAY_SCALE: u32 = 2;

/// Internal scale for expense shares: display precision plus four guard
/// digits, so repeated accumulation does not drift before the final
/// rounding.
const SHARE_SCALE: u32 = DISPLAY_SCALE + 4;

/// Signed money amount backed by a decimal.
///
/// Use this type for **all** monetary values in the engine (expense
/// amounts, paid/owed totals, net balances, settlement transfers). Binary
/// floating point breaks the conservation invariant under repeated
/// rounding and must not appear anywhere in the engine.
///
/// The value is signed:
/// - positive = is owed money / has paid
/// - negative = owes money
///
/// # Examples
///
/// ```rust
/// use engine::Money;
///
/// let amount = Money::from_minor(12_34);
/// assert_eq!(amount.to_string(), "12.34");
/// assert_eq!(Money::ZERO.round_display().to_string(), "0.00");
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Creates an amount from minor units (cents).
    #[must_use]
    pub fn from_minor(minor: i64) -> Self {
        Self(Decimal::new(minor, DISPLAY_SCALE))
    }

    /// Zero-threshold used when classifying balances and emitting
    /// settlements: anything within ±0.01 counts as settled.
    #[must_use]
    pub fn tolerance() -> Self {
        Self::from_minor(1)
    }

    /// Validates an externally supplied expense amount.
    ///
    /// Rejects non-positive values and values with more than two decimal
    /// digits; the accepted amount is rescaled to display precision.
    pub fn from_amount(value: Decimal) -> Result<Self, EngineError> {
        if value <= Decimal::ZERO {
            return Err(EngineError::InvalidAmount(
                "amount must be positive".to_string(),
            ));
        }
        if value.normalize().scale() > DISPLAY_SCALE {
            return Err(EngineError::InvalidAmount(
                "too many decimals".to_string(),
            ));
        }
        let mut value = value.normalize();
        value.rescale(DISPLAY_SCALE);
        Ok(Self(value))
    }

    /// Returns the raw decimal value.
    #[must_use]
    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    /// Returns `true` if the amount is 0.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Rounds to display precision (2 decimals, half-up) and pins the
    /// scale so zero renders as "0.00" rather than "0".
    #[must_use]
    pub fn round_display(self) -> Self {
        let mut rounded = self
            .0
            .round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(DISPLAY_SCALE);
        Self(rounded)
    }

    /// Splits the amount into `parts` equal shares at guard precision
    /// (display scale + 4, half-up). Returns `None` when `parts` is 0;
    /// expenses are validated upstream to have at least one participant,
    /// so a `None` here is a broken invariant the caller skips over.
    #[must_use]
    pub fn share(self, parts: usize) -> Option<Self> {
        if parts == 0 {
            return None;
        }
        let divided = self.0 / Decimal::from(parts as u64);
        Some(Self(divided.round_dp_with_strategy(
            SHARE_SCALE,
            RoundingStrategy::MidpointAwayFromZero,
        )))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.round_display().0)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Self::Output {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        Money(-self.0)
    }
}
