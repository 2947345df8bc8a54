use std::path::{MAIN_SEPARATOR, Path};

/// Character-wise longest common prefix over the given strings. An empty
/// input yields an empty prefix.
pub fn common_prefix(paths: &[&str]) -> String {
    let mut iter = paths.iter();
    let Some(first) = iter.next() else {
        return String::new();
    };

    let mut len = first.len();
    for path in iter {
        let shared = first
            .bytes()
            .zip(path.bytes())
            .take_while(|(a, b)| a == b)
            .count();
        len = len.min(shared);
    }

    // Byte-wise agreement can stop inside a multi-byte character; back up to
    // the previous boundary so the prefix stays valid UTF-8.
    while !first.is_char_boundary(len) {
        len -= 1;
    }

    first[..len].to_string()
}

/// A raw common prefix can end mid-component when paths diverge inside a
/// final segment. If the prefix is not an existing directory, cut it back to
/// the last separator boundary (exclusive).
pub fn trim_to_existing_dir(prefix: &str) -> String {
    if prefix.is_empty() || Path::new(prefix).is_dir() {
        return prefix.to_string();
    }

    match prefix.rfind(MAIN_SEPARATOR) {
        Some(idx) => prefix[..idx].to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_prefix_of_nothing_is_empty() {
        assert_eq!(common_prefix(&[]), "");
    }

    #[test]
    fn common_prefix_of_single_path_is_the_path() {
        assert_eq!(common_prefix(&["/tmp/foo/bar"]), "/tmp/foo/bar");
    }

    #[test]
    fn common_prefix_stops_at_divergence() {
        assert_eq!(
            common_prefix(&["/tmp/foo/bar", "/tmp/foo/baz"]),
            "/tmp/foo/ba"
        );
        assert_eq!(common_prefix(&["/tmp/foo", "/var/log"]), "/");
    }

    #[test]
    fn common_prefix_respects_char_boundaries() {
        // "é" and "è" share their first UTF-8 byte only.
        assert_eq!(common_prefix(&["/tmp/é", "/tmp/è"]), "/tmp/");
    }

    #[test]
    fn trim_keeps_an_existing_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let prefix = dir.path().to_string_lossy().into_owned();
        assert_eq!(trim_to_existing_dir(&prefix), prefix);
    }

    #[test]
    fn trim_cuts_a_mid_component_prefix_back_to_a_separator() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir(dir.path().join("bar")).expect("create dir");
        std::fs::create_dir(dir.path().join("baz")).expect("create dir");

        let raw = common_prefix(&[
            &dir.path().join("bar").to_string_lossy(),
            &dir.path().join("baz").to_string_lossy(),
        ]);
        assert!(raw.ends_with("ba"));

        let trimmed = trim_to_existing_dir(&raw);
        assert_eq!(trimmed, dir.path().to_string_lossy());
    }

    #[test]
    fn trim_of_empty_prefix_is_empty() {
        assert_eq!(trim_to_existing_dir(""), "");
    }

    #[test]
    fn trim_without_separator_is_empty() {
        assert_eq!(trim_to_existing_dir("no-such-relative-dir"), "");
    }
}
