// prelude.rs - Convenient re-exports for the public API.
//
//! # Prelude
//!
//! ```
//! use regex_named::prelude::*;
//!
//! let re = NamedRegex::new(r"answer: (?P<answer>\d+)").unwrap();
//! let (_, groups) = re.find_named("answer: 42").unwrap();
//! assert_eq!(groups["answer"], "42");
//! ```

pub use crate::api::NamedRegex;
pub use crate::error::PatternError;
