// scanner.rs - Pattern scanner that enumerates capturing groups.
//
// Walks the pattern text once and records, for every capturing group in
// order of its opening parenthesis, whether it carries a name. All other
// `(?...)` constructs are excluded from the regex crate's group numbering,
// so they produce no entry here. The ordinal position of an entry in the
// output therefore equals that group's capture index minus one.

use std::sync::LazyLock;

use memchr::memchr2;
use smallvec::SmallVec;

use crate::error::PatternError;

/// One capturing group of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group<'p> {
    /// A plain `(...)` group.
    Unnamed,
    /// A `(?P<name>...)` or `(?<name>...)` group. The name borrows from
    /// the pattern text.
    Named(&'p str),
}

/// Capturing groups in order of their opening parenthesis.
pub type Groups<'p> = SmallVec<[Group<'p>; 8]>;

/// Matches the name marker directly after `(`: `?P<name>` or `?<name>`.
static NAME_MARKER: LazyLock<regex::bytes::Regex> =
    LazyLock::new(|| regex::bytes::Regex::new(r"^\?P?<(.*?)>").unwrap());

/// Scan `pattern` and return one [`Group`] per capturing group.
///
/// Escape sequences are skipped, so `\(` never opens a group. Closing
/// parentheses need no bookkeeping (group order is fixed by the opening
/// parenthesis alone) and unbalanced patterns are left for the engine to
/// reject. Nesting depth is unbounded: the walk is a flat cursor loop.
///
/// Fails with [`PatternError::TrailingEscape`] if the pattern ends in
/// `\`, and with [`PatternError::InvalidEscape`] if the bytes after a
/// `\` do not decode as one UTF-8 character.
///
/// # Examples
///
/// ```
/// use regex_named::scanner::{scan, Group};
///
/// let groups = scan(br"(?P<name>\w+) (?:\w+) (\d+)").unwrap();
/// assert_eq!(&groups[..], &[Group::Named("name"), Group::Unnamed]);
/// ```
pub fn scan(pattern: &[u8]) -> Result<Groups<'_>, PatternError> {
    let mut groups = Groups::new();
    let mut pos = 0;

    // Only `\` and `(` matter; both are ASCII, so jumping to them can
    // never land inside a multi-byte UTF-8 sequence.
    while let Some(off) = memchr2(b'\\', b'(', &pattern[pos..]) {
        let at = pos + off;
        let rest = &pattern[at + 1..];

        if pattern[at] == b'\\' {
            if rest.is_empty() {
                return Err(PatternError::TrailingEscape);
            }
            let skip = next_char_len(rest).ok_or(PatternError::InvalidEscape)?;
            pos = at + 1 + skip;
            continue;
        }

        if let Some(caps) = NAME_MARKER.captures(rest) {
            let marker = caps.get(0).expect("whole match always present");
            let name = caps.get(1).expect("name group always participates");
            // The marker pattern runs in Unicode mode, so it only ever
            // matches valid UTF-8.
            let name =
                std::str::from_utf8(name.as_bytes()).expect("marker match is valid UTF-8");
            groups.push(Group::Named(name));
            pos = at + 1 + marker.end();
        } else if rest.first() == Some(&b'?') {
            // Some other `(?...)` construct: `?:`, inline flags and the
            // like. The engine gives these no capture index.
            pos = at + 1;
        } else {
            groups.push(Group::Unnamed);
            pos = at + 1;
        }
    }

    Ok(groups)
}

/// Length in bytes of the UTF-8 character starting `input`, or `None`
/// if the leading bytes are not a valid encoding.
fn next_char_len(input: &[u8]) -> Option<usize> {
    let len = match *input.first()? {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return None,
    };
    if input.len() < len || std::str::from_utf8(&input[..len]).is_err() {
        return None;
    }
    Some(len)
}
