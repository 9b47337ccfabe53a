// api.rs - Name-keyed matching on top of the regex crate.
//
// NamedRegex couples the compiled matchers with the name table built by
// the scanner. Search methods return the whole match plus a map keyed by
// group name instead of the positional captures of the regex crate.

use std::collections::HashMap;
use std::fmt;

use crate::error::PatternError;
use crate::scanner;
use crate::table::NameTable;

/// A compiled pattern whose capture groups are addressed by name.
///
/// Construction resolves every named group to its capture index once;
/// the eight `find_*` methods then translate positional match results
/// into name-keyed maps. The value is immutable and can be shared
/// freely across threads.
///
/// # Examples
///
/// ```
/// use regex_named::api::NamedRegex;
///
/// let re = NamedRegex::new(r"(?P<name>\w+) (?P<age>\d+)").unwrap();
/// let (whole, groups) = re.find_named("foo 42").unwrap();
/// assert_eq!(whole, "foo 42");
/// assert_eq!(groups["name"], "foo");
/// assert_eq!(groups["age"], "42");
/// ```
#[derive(Clone)]
pub struct NamedRegex {
    names: NameTable,
    text: regex::Regex,
    bytes: regex::bytes::Regex,
}

impl NamedRegex {
    /// Compile a pattern, resolving its named capture groups.
    ///
    /// The group syntax is scanned before the engine compiles the
    /// pattern, so a duplicated name is reported as
    /// [`PatternError::DuplicateName`] rather than as an engine syntax
    /// error.
    pub fn new(pattern: &str) -> Result<NamedRegex, PatternError> {
        let groups = scanner::scan(pattern.as_bytes())?;
        let names = NameTable::build(&groups)?;
        let text = regex::Regex::new(pattern)?;
        let bytes = regex::bytes::Regex::new(pattern)?;
        Ok(NamedRegex { names, text, bytes })
    }

    /// Like [`NamedRegex::new`], but panics on an invalid pattern.
    ///
    /// Intended for fixed patterns in statics and other process-wide
    /// initialization, never for runtime input.
    ///
    /// # Panics
    ///
    /// Panics if the pattern fails to compile.
    pub fn must_compile(pattern: &str) -> NamedRegex {
        match NamedRegex::new(pattern) {
            Ok(re) => re,
            Err(err) => panic!("NamedRegex::new({:?}): {}", pattern, err),
        }
    }

    /// The pattern text this value was built from.
    pub fn pattern(&self) -> &str {
        self.text.as_str()
    }

    /// Number of capture groups in the pattern (excluding group 0).
    pub fn captures_len(&self) -> usize {
        self.text.captures_len() - 1
    }

    /// Capture index of the group called `name`, or `None`.
    pub fn name_index(&self, name: &str) -> Option<usize> {
        self.names.get(name)
    }

    /// Iterate over the group names of the pattern, in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|(name, _)| name)
    }

    /// Access the underlying text matcher for positional searches.
    pub fn as_regex(&self) -> &regex::Regex {
        &self.text
    }

    /// Access the underlying byte matcher for positional searches.
    pub fn as_bytes_regex(&self) -> &regex::bytes::Regex {
        &self.bytes
    }

    // === Single-match searches ===

    /// Return the first match in `text` and its named groups, or
    /// `None` if there is no match.
    ///
    /// The map holds every group name of the pattern; a group that did
    /// not participate in the match maps to `""`.
    pub fn find_named<'r, 't>(
        &'r self,
        text: &'t str,
    ) -> Option<(&'t str, HashMap<&'r str, &'t str>)> {
        let caps = self.text.captures(text)?;
        Some(project(&self.names, &caps, text_of))
    }

    /// Return the byte offsets of the first match in `text` and of its
    /// named groups, or `None` if there is no match.
    ///
    /// Offsets come as `(start, end)` pairs. A group that did not
    /// participate maps to `(-1, -1)`.
    pub fn find_named_index<'r>(
        &'r self,
        text: &str,
    ) -> Option<((isize, isize), HashMap<&'r str, (isize, isize)>)> {
        let caps = self.text.captures(text)?;
        Some(project(&self.names, &caps, span))
    }

    /// Byte-haystack version of [`NamedRegex::find_named`]. A group
    /// that did not participate maps to `b""`.
    pub fn find_named_bytes<'r, 't>(
        &'r self,
        haystack: &'t [u8],
    ) -> Option<(&'t [u8], HashMap<&'r str, &'t [u8]>)> {
        let caps = self.bytes.captures(haystack)?;
        Some(project(&self.names, &caps, bytes_of))
    }

    /// Byte-haystack version of [`NamedRegex::find_named_index`].
    pub fn find_named_index_bytes<'r>(
        &'r self,
        haystack: &[u8],
    ) -> Option<((isize, isize), HashMap<&'r str, (isize, isize)>)> {
        let caps = self.bytes.captures(haystack)?;
        Some(project(&self.names, &caps, span_bytes))
    }

    // === All-match searches ===

    /// Return every non-overlapping match in `text` and its named
    /// groups, in match order.
    ///
    /// `limit` bounds the number of matches; a negative limit means
    /// all of them. The two vectors are parallel and empty when
    /// nothing matches.
    pub fn find_all_named<'r, 't>(
        &'r self,
        text: &'t str,
        limit: isize,
    ) -> (Vec<&'t str>, Vec<HashMap<&'r str, &'t str>>) {
        project_all(&self.names, self.text.captures_iter(text), limit, text_of)
    }

    /// The all-matches version of [`NamedRegex::find_named_index`].
    pub fn find_all_named_index<'r>(
        &'r self,
        text: &str,
        limit: isize,
    ) -> (Vec<(isize, isize)>, Vec<HashMap<&'r str, (isize, isize)>>) {
        project_all(&self.names, self.text.captures_iter(text), limit, span)
    }

    /// Byte-haystack version of [`NamedRegex::find_all_named`].
    pub fn find_all_named_bytes<'r, 't>(
        &'r self,
        haystack: &'t [u8],
        limit: isize,
    ) -> (Vec<&'t [u8]>, Vec<HashMap<&'r str, &'t [u8]>>) {
        project_all(&self.names, self.bytes.captures_iter(haystack), limit, bytes_of)
    }

    /// Byte-haystack version of [`NamedRegex::find_all_named_index`].
    pub fn find_all_named_index_bytes<'r>(
        &'r self,
        haystack: &[u8],
        limit: isize,
    ) -> (Vec<(isize, isize)>, Vec<HashMap<&'r str, (isize, isize)>>) {
        project_all(&self.names, self.bytes.captures_iter(haystack), limit, span_bytes)
    }
}

impl fmt::Debug for NamedRegex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedRegex")
            .field("pattern", &self.pattern())
            .finish_non_exhaustive()
    }
}

// === Projection ===

// Map one positional capture set through the name table. `value_of`
// projects capture index i; index 0 is the whole match.
fn project<'r, C, V>(
    names: &'r NameTable,
    caps: &C,
    value_of: impl Fn(&C, usize) -> V,
) -> (V, HashMap<&'r str, V>) {
    let mut map = HashMap::with_capacity(names.len());
    for (name, i) in names.iter() {
        map.insert(name, value_of(caps, i));
    }
    (value_of(caps, 0), map)
}

// Project each capture set of `iter`, keeping bases and maps parallel.
// A negative limit means no bound.
fn project_all<'r, C, V>(
    names: &'r NameTable,
    iter: impl Iterator<Item = C>,
    limit: isize,
    value_of: impl Fn(&C, usize) -> V,
) -> (Vec<V>, Vec<HashMap<&'r str, V>>) {
    let limit = if limit < 0 { usize::MAX } else { limit as usize };
    let mut bases = Vec::new();
    let mut maps = Vec::new();
    for caps in iter.take(limit) {
        let (base, map) = project(names, &caps, &value_of);
        bases.push(base);
        maps.push(map);
    }
    (bases, maps)
}

// Text of capture i, empty when the group did not participate.
fn text_of<'t>(caps: &regex::Captures<'t>, i: usize) -> &'t str {
    caps.get(i).map_or("", |m| m.as_str())
}

// Bytes of capture i, empty when the group did not participate.
fn bytes_of<'t>(caps: &regex::bytes::Captures<'t>, i: usize) -> &'t [u8] {
    match caps.get(i) {
        Some(m) => m.as_bytes(),
        None => b"",
    }
}

// Offsets of capture i, (-1, -1) when the group did not participate.
fn span(caps: &regex::Captures<'_>, i: usize) -> (isize, isize) {
    match caps.get(i) {
        Some(m) => (m.start() as isize, m.end() as isize),
        None => (-1, -1),
    }
}

fn span_bytes(caps: &regex::bytes::Captures<'_>, i: usize) -> (isize, isize) {
    match caps.get(i) {
        Some(m) => (m.start() as isize, m.end() as isize),
        None => (-1, -1),
    }
}
