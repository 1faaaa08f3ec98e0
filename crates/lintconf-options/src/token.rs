//! Structural splitting of raw option tokens.

/// Shape of one raw token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenShape<'a> {
    /// `key=value`, split at the first `=`. The value may be empty.
    KeyValue {
        /// Text before the first `=`.
        key: &'a str,
        /// Text after the first `=`.
        value: &'a str,
    },
    /// No `=` anywhere in the token.
    Bare(&'a str),
}

/// Splits a token at its first `=`.
///
/// Never fails and performs no validation.
#[must_use]
pub fn split_token(token: &str) -> TokenShape<'_> {
    match token.split_once('=') {
        Some((key, value)) => TokenShape::KeyValue { key, value },
        None => TokenShape::Bare(token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_first_equals() {
        assert_eq!(
            split_token("group=a=b"),
            TokenShape::KeyValue {
                key: "group",
                value: "a=b"
            }
        );
    }

    #[test]
    fn empty_value_is_not_bare() {
        assert_eq!(
            split_token("encoding="),
            TokenShape::KeyValue {
                key: "encoding",
                value: ""
            }
        );
    }

    #[test]
    fn leading_equals_gives_empty_key() {
        assert_eq!(
            split_token("=5"),
            TokenShape::KeyValue { key: "", value: "5" }
        );
    }

    #[test]
    fn no_equals_is_bare() {
        assert_eq!(split_token("descending"), TokenShape::Bare("descending"));
        assert_eq!(split_token(""), TokenShape::Bare(""));
    }
}
