use thiserror::Error;

// note: every arithmetic operation is O(n) in its right-hand operand, keep magnitudes small

mod natural;


pub use natural::Natural;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("Negative Value: {0}")]
    Negative(i64),
    #[error("Invalid Result")]
    InvalidResult,
}
