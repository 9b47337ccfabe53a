// error.rs - Error type for named-pattern construction.
//
// Scanner and table failures are our own; everything the regex crate
// rejects during compilation is passed through as Syntax.

use std::fmt;

/// Error type for building a [`NamedRegex`](crate::api::NamedRegex).
#[derive(Debug, Clone)]
pub enum PatternError {
    /// The pattern is not valid for the underlying engine.
    Syntax(regex::Error),
    /// The pattern ends with an unterminated `\` escape.
    TrailingEscape,
    /// The bytes following a `\` escape do not decode as one character.
    InvalidEscape,
    /// The same group name is declared more than once.
    DuplicateName(String),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::Syntax(err) => write!(f, "{}", err),
            PatternError::TrailingEscape => {
                write!(f, "trailing backslash at end of expression")
            }
            PatternError::InvalidEscape => write!(f, "invalid UTF-8 after backslash"),
            PatternError::DuplicateName(name) => {
                write!(f, "duplicate capture group name `{}`", name)
            }
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PatternError::Syntax(err) => Some(err),
            _ => None,
        }
    }
}

impl From<regex::Error> for PatternError {
    fn from(err: regex::Error) -> Self {
        PatternError::Syntax(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_engine_error() {
        let engine_err = regex::Regex::new(r"(unclosed").unwrap_err();
        let err = PatternError::from(engine_err.clone());
        assert!(matches!(err, PatternError::Syntax(_)));
        assert_eq!(err.to_string(), engine_err.to_string());
    }

    #[test]
    fn syntax_source_is_engine_error() {
        use std::error::Error;
        let err = PatternError::from(regex::Regex::new(r"[").unwrap_err());
        assert!(err.source().is_some());
        assert!(PatternError::TrailingEscape.source().is_none());
    }

    #[test]
    fn display_impl() {
        assert_eq!(
            PatternError::TrailingEscape.to_string(),
            "trailing backslash at end of expression"
        );
        assert_eq!(
            PatternError::InvalidEscape.to_string(),
            "invalid UTF-8 after backslash"
        );
        assert_eq!(
            PatternError::DuplicateName("age".to_string()).to_string(),
            "duplicate capture group name `age`"
        );
    }

    #[test]
    fn error_trait() {
        let err: Box<dyn std::error::Error> =
            Box::new(PatternError::DuplicateName("name".to_string()));
        assert_eq!(err.to_string(), "duplicate capture group name `name`");
    }
}
