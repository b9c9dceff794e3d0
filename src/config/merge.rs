//! Precedence rules for combining document values with CLI overrides
//!
//! - Feature flags: enabled if either source enables them
//! - Strings: first non-empty candidate wins
//! - Lists: comma-separated, kept in document order

/// A flag set by either source stays set.
///
/// There is no way to turn a flag off from the command line once the
/// document enables it.
pub fn either(document: bool, cli: bool) -> bool {
    document || cli
}

/// First candidate that is not the empty string
pub fn first_non_empty<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates.into_iter().find(|c| !c.is_empty())
}

/// Split a comma-separated list. An empty string is an empty list.
pub fn split_list(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }
    s.split(',').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_either() {
        assert!(either(true, false));
        assert!(either(false, true));
        assert!(either(true, true));
        assert!(!either(false, false));
    }

    #[test]
    fn test_first_non_empty_precedence() {
        assert_eq!(first_non_empty(["gzip", "zstd"]), Some("gzip"));
        assert_eq!(first_non_empty(["", "zstd"]), Some("zstd"));
        assert_eq!(first_non_empty(["", ""]), None);
    }

    #[test]
    fn test_split_list_order() {
        assert_eq!(split_list("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(split_list("c,a,b"), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_split_list_empty() {
        assert!(split_list("").is_empty());
    }

    #[test]
    fn test_split_list_verbatim() {
        assert_eq!(split_list("ext4, vfat"), vec!["ext4", " vfat"]);
        assert_eq!(split_list("nvme,"), vec!["nvme", ""]);
    }
}
