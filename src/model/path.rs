//! Field path syntax.
//!
//! Paths chain mapping keys with `.`. A key that is empty or contains any of
//! `.`, `[`, `]` or `"` is written as a quoted segment instead, e.g.
//! `metadata.labels["app.kubernetes.io/name"]`, so that every path names
//! exactly one location.

use std::borrow::Cow;

fn needs_quoting(key: &str) -> bool {
    key.is_empty() || key.contains(['.', '[', ']', '"'])
}

/// Append `key` to `prefix`. The empty prefix is the document root.
#[must_use]
pub fn join_key(prefix: &str, key: &str) -> String {
    if needs_quoting(key) {
        let mut path = String::with_capacity(prefix.len() + key.len() + 4);
        path.push_str(prefix);
        path.push_str("[\"");
        for c in key.chars() {
            if matches!(c, '"' | '\\') {
                path.push('\\');
            }
            path.push(c);
        }
        path.push_str("\"]");
        path
    } else if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

/// The final key of `path`, unquoted. The root path yields `""`.
#[must_use]
pub fn last_key(path: &str) -> Cow<'_, str> {
    let mut last = Cow::Borrowed("");
    let mut rest = path;
    while !rest.is_empty() {
        if let Some(quoted) = rest.strip_prefix("[\"") {
            let mut key = String::new();
            let mut end = quoted.len();
            let mut chars = quoted.char_indices();
            while let Some((i, c)) = chars.next() {
                match c {
                    '\\' => {
                        if let Some((_, escaped)) = chars.next() {
                            key.push(escaped);
                        }
                    }
                    '"' => {
                        end = i + 1;
                        break;
                    }
                    _ => key.push(c),
                }
            }
            last = Cow::Owned(key);
            let after = &quoted[end..];
            rest = after.strip_prefix(']').unwrap_or(after);
        } else {
            let segment = rest.strip_prefix('.').unwrap_or(rest);
            let end = segment
                .char_indices()
                .skip(1)
                .find(|(_, c)| matches!(c, '.' | '['))
                .map_or(segment.len(), |(i, _)| i);
            last = Cow::Borrowed(&segment[..end]);
            rest = &segment[end..];
        }
    }
    last
}

/// Whether `path` is `ancestor` or lies underneath it.
#[must_use]
pub fn is_within(path: &str, ancestor: &str) -> bool {
    path.strip_prefix(ancestor)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('.') || rest.starts_with('['))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_keys_are_dotted() {
        assert_eq!(join_key("", "service"), "service");
        assert_eq!(join_key("service", "port"), "service.port");
    }

    #[test]
    fn test_dotted_keys_are_quoted() {
        let labels = join_key("metadata", "labels");
        assert_eq!(
            join_key(&labels, "app.kubernetes.io/name"),
            r#"metadata.labels["app.kubernetes.io/name"]"#
        );
        assert_eq!(join_key("", "a.b"), r#"["a.b"]"#);
        assert_eq!(join_key("x", ""), r#"x[""]"#);
        assert_eq!(join_key("x", r#"say "hi""#), r#"x["say \"hi\""]"#);
    }

    #[test]
    fn test_quoted_and_nested_paths_differ() {
        assert_ne!(join_key("", "a.b"), join_key(&join_key("", "a"), "b"));
    }

    #[test]
    fn test_last_key() {
        assert_eq!(last_key(""), "");
        assert_eq!(last_key("port"), "port");
        assert_eq!(last_key("a.b.timeout"), "timeout");
        assert_eq!(last_key(r#"metadata.labels["app.kubernetes.io/name"]"#), "app.kubernetes.io/name");
        assert_eq!(last_key(r#"["a.b"].enabled"#), "enabled");
        assert_eq!(last_key(r#"x["say \"hi\""]"#), r#"say "hi""#);
    }

    #[test]
    fn test_last_key_round_trips_join() {
        for key in ["plain", "a.b", "", "[x]", r#"q"uote"#, r"back\slash"] {
            assert_eq!(last_key(&join_key("root", key)), key, "{key}");
        }
    }

    #[test]
    fn test_is_within() {
        assert!(is_within("metadata", "metadata"));
        assert!(is_within("metadata.name", "metadata"));
        assert!(is_within(r#"labels["a.b"]"#, "labels"));
        assert!(!is_within("metadata_v2", "metadata"));
    }
}
