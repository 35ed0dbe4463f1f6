/// Stepping state underneath [`Natural`](super::Natural).
///
/// A `Validated` may hold a negative integer. Subtraction starts its stepping
/// loop from the negated subtrahend, and only the final result is filtered
/// back into the natural domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) enum Validated {
    Valid(i64),
    Invalid,
}
impl Validated {
    pub const ZERO: Validated = Validated::Valid(0);

    pub fn is_valid(self) -> bool {
        matches!(self, Validated::Valid(_))
    }
    pub fn get(self) -> Option<i64> {
        match self {
            Validated::Valid(n) => Some(n),
            Validated::Invalid => None,
        }
    }
    fn map<F: FnOnce(i64) -> Option<i64>>(self, f: F) -> Self {
        match self {
            Validated::Valid(n) => f(n).map_or(Validated::Invalid, Validated::Valid),
            Validated::Invalid => Validated::Invalid,
        }
    }
    pub fn successor(self) -> Self {
        self.map(|n| n.checked_add(1))
    }
    pub fn negate(self) -> Self {
        self.map(i64::checked_neg)
    }
    pub fn non_negative(self) -> Self {
        self.map(|n| if n >= 0 { Some(n) } else { None })
    }
}

/// Applies `successor` to `start` once for every step a Peano counter takes
/// from zero up to `count`.
///
/// A negative or invalid `count` can never be reached by the counter and
/// yields `Invalid`, as does any intermediate overflow.
pub(super) fn step(start: Validated, count: Validated) -> Validated {
    if count.get().map_or(true, |n| n < 0) {
        return Validated::Invalid;
    }
    let mut result = start;
    let mut n = Validated::ZERO;
    while n != count {
        if !result.is_valid() {
            break;
        }
        result = result.successor();
        n = n.successor();
    }
    #[cfg(feature = "tracing")]
    if start.is_valid() && !result.is_valid() {
        tracing::debug!("Successor overflow stepping {:?} by {:?}", start, count);
    }
    result
}
