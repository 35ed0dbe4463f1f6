mod validated;
#[cfg(test)]
pub(crate) mod proptest;

use std::convert::TryFrom;
use std::fmt;
use std::iter::{Product, Sum};
use std::ops;

use self::validated::{step, Validated};
use crate::Error;

/// A natural number built from zero and successor, or the absorbing invalid
/// state.
///
/// Every operation returns a new value. Any operation touching an invalid
/// operand, or leaving the non-negative domain, produces [`Natural::INVALID`],
/// and no operation ever leads back out of it. Check [`Natural::is_valid`]
/// before trusting the magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Natural(Validated);
impl Natural {
    pub const INVALID: Natural = Natural(Validated::Invalid);

    fn filtered(value: Validated) -> Self {
        Natural(value.non_negative())
    }

    pub fn of(i: i64) -> Self {
        Natural::filtered(Validated::Valid(i))
    }
    pub fn zero() -> Self {
        Natural(Validated::ZERO)
    }
    pub fn one() -> Self {
        Natural::zero().succ()
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_valid()
    }
    pub fn get(&self) -> Option<u64> {
        self.0.get().and_then(|n| u64::try_from(n).ok())
    }
    pub fn try_get(&self) -> Result<u64, Error> {
        self.get().ok_or(Error::InvalidResult)
    }
    pub fn into_result(self) -> Result<Natural, Error> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(Error::InvalidResult)
        }
    }

    pub fn succ(self) -> Self {
        Natural::filtered(self.0.successor())
    }

    /// Steps `self` forward once per unit of `addend`.
    pub fn add(self, addend: Natural) -> Self {
        if !(self.is_valid() && addend.is_valid()) {
            return Natural::INVALID;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!("Add: {} + {}", self, addend);
        Natural::filtered(step(self.0, addend.0))
    }

    /// Adds the negation of `subtrahend` to `self`, so a result below zero is
    /// invalid.
    pub fn sub(self, subtrahend: Natural) -> Self {
        let result = Natural::filtered(step(subtrahend.0.negate(), self.0));
        #[cfg(feature = "tracing")]
        {
            tracing::trace!("Sub: {} - {}", self, subtrahend);
            if self.is_valid() && subtrahend.is_valid() && !result.is_valid() {
                tracing::debug!("Subtraction underflow: {} - {}", self, subtrahend);
            }
        }
        result
    }

    /// Adds `self` to zero once per unit of `multiplier`.
    pub fn mul(self, multiplier: Natural) -> Self {
        if !(self.is_valid() && multiplier.is_valid()) {
            return Natural::INVALID;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!("Mul: {} * {}", self, multiplier);
        let mut result = Natural::zero();
        let mut n = Natural::zero();
        while n != multiplier {
            result = result.add(self);
            if !result.is_valid() {
                break;
            }
            n = n.succ();
        }
        result
    }
}

impl Default for Natural {
    fn default() -> Self {
        Natural::zero()
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Validated::Valid(n) => write!(f, "{}", n),
            Validated::Invalid => write!(f, "invalid"),
        }
    }
}

impl From<u32> for Natural {
    fn from(n: u32) -> Self {
        Natural::of(n.into())
    }
}
impl TryFrom<i64> for Natural {
    type Error = Error;
    fn try_from(i: i64) -> Result<Self, Self::Error> {
        if i < 0 {
            Err(Error::Negative(i))
        } else {
            Ok(Natural::of(i))
        }
    }
}
impl TryFrom<Natural> for u64 {
    type Error = Error;
    fn try_from(n: Natural) -> Result<Self, Self::Error> {
        n.try_get()
    }
}

impl ops::Add for Natural {
    type Output = Natural;
    fn add(self, rhs: Natural) -> Natural {
        Natural::add(self, rhs)
    }
}
impl ops::Sub for Natural {
    type Output = Natural;
    fn sub(self, rhs: Natural) -> Natural {
        Natural::sub(self, rhs)
    }
}
impl ops::Mul for Natural {
    type Output = Natural;
    fn mul(self, rhs: Natural) -> Natural {
        Natural::mul(self, rhs)
    }
}

impl Sum for Natural {
    fn sum<I: Iterator<Item = Natural>>(iter: I) -> Self {
        iter.fold(Natural::zero(), Natural::add)
    }
}
impl Product for Natural {
    fn product<I: Iterator<Item = Natural>>(iter: I) -> Self {
        iter.fold(Natural::one(), Natural::mul)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Natural {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.get(), serializer)
    }
}
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Natural {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = <Option<i64> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(value.map_or(Natural::INVALID, Natural::of))
    }
}
