//! # regex-named
//!
//! Named capture-group access for the [`regex`](https://crates.io/crates/regex)
//! crate: search results come back as maps keyed by group name instead of
//! positional capture lists.
//!
//! The crate scans the pattern text itself to resolve each `(?P<name>...)`
//! (or `(?<name>...)`) group to its capture index, then delegates all
//! matching to the regex crate. Matching semantics, flags and syntax are
//! exactly those of the underlying engine.
//!
//! ## Quick Start
//!
//! ```rust
//! use regex_named::prelude::*;
//!
//! let re = NamedRegex::new(r"(?P<name>\w+) (?P<age>\d+)").unwrap();
//!
//! let (whole, groups) = re.find_named("foo 42").unwrap();
//! assert_eq!(whole, "foo 42");
//! assert_eq!(groups["name"], "foo");
//! assert_eq!(groups["age"], "42");
//! ```
//!
//! A group that did not participate in a match stays in the map, with an
//! empty value (or `(-1, -1)` in the index form):
//!
//! ```rust
//! use regex_named::prelude::*;
//!
//! let re = NamedRegex::new(r"(?P<name>\w+)? (?P<age>\d+)").unwrap();
//! let (whole, groups) = re.find_named(" 43").unwrap();
//! assert_eq!(whole, " 43");
//! assert_eq!(groups["name"], "");
//! assert_eq!(groups["age"], "43");
//! ```
//!
//! ## Search Methods
//!
//! Eight searches cover every combination of result shape, match count
//! and haystack type:
//!
//! | | text haystack | byte haystack |
//! |---|---|---|
//! | first match, values | [`find_named`] | [`find_named_bytes`] |
//! | first match, offsets | [`find_named_index`] | [`find_named_index_bytes`] |
//! | all matches, values | [`find_all_named`] | [`find_all_named_bytes`] |
//! | all matches, offsets | [`find_all_named_index`] | [`find_all_named_index_bytes`] |
//!
//! Positional searches remain available through
//! [`as_regex`](api::NamedRegex::as_regex) and
//! [`as_bytes_regex`](api::NamedRegex::as_bytes_regex).
//!
//! [`find_named`]: api::NamedRegex::find_named
//! [`find_named_bytes`]: api::NamedRegex::find_named_bytes
//! [`find_named_index`]: api::NamedRegex::find_named_index
//! [`find_named_index_bytes`]: api::NamedRegex::find_named_index_bytes
//! [`find_all_named`]: api::NamedRegex::find_all_named
//! [`find_all_named_bytes`]: api::NamedRegex::find_all_named_bytes
//! [`find_all_named_index`]: api::NamedRegex::find_all_named_index
//! [`find_all_named_index_bytes`]: api::NamedRegex::find_all_named_index_bytes

pub mod api;
pub mod error;
pub mod prelude;
pub mod scanner;
pub mod table;
