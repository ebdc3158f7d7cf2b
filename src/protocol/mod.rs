//! Play-string notation: tokens, move codes and suffixes.

pub mod suffix;
pub mod token;

pub use suffix::{DraculaSuffix, Expiry, HunterSuffix};
pub use token::{Location, Play, StructuralError, TOKEN_LEN};
