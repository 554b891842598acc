//! Checked value containers.
//!
//! [`Maybe`] holds a value that may be absent, [`Outcome`] holds either a
//! success value or a failure value, never both. Accessors that cannot be
//! served report an [`AccessError`] instead of handing back a sentinel
//! value or tearing down the process.

pub mod error;
pub mod maybe;
pub mod outcome;

pub use self::error::*;
pub use self::maybe::Maybe::{Just, Nothing};
pub use self::maybe::*;
pub use self::outcome::*;
