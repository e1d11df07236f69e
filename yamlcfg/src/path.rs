//! Dotted-path resolution over a mapping tree.
//!
//! A path such as `"rootobj.subobj1.aBool"` is split on `.` and each segment
//! is matched literally against mapping keys. There is no escaping, so a key
//! that itself contains a dot cannot be addressed.

use crate::value::{ConfigValue, Mapping};

/// Split a path into its segments. An empty path has no segments.
pub fn segments(path: &str) -> Vec<&str> {
    if path.is_empty() {
        return Vec::new();
    }
    path.split('.').collect()
}

/// Resolve `path` against `root`, returning the raw value found.
///
/// Every segment but the last must land on a mapping; the last segment may
/// land on a value of any type. Returns `None` as soon as a segment is
/// missing or an intermediate value is not a mapping.
pub fn resolve<'a>(path: &str, root: &'a Mapping) -> Option<&'a ConfigValue> {
    let parts = segments(path);
    let (last, parents) = parts.split_last()?;

    let mut current = root;
    for part in parents {
        match current.get(*part)? {
            ConfigValue::Object(map) => current = map,
            _ => return None,
        }
    }

    current.get(*last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::test_helpers::*;

    fn sample() -> Mapping {
        mapping(vec![
            ("rootstring", string("this is a string")),
            ("rootint", int(23466)),
            ("rootnull", ConfigValue::Null),
            (
                "rootobj",
                obj(vec![
                    (
                        "subobj1",
                        obj(vec![("aBool", bool_val(true)), ("anInt", int(7))]),
                    ),
                    ("subarray1", array(vec![int(1), int(2)])),
                ]),
            ),
            ("a.b", int(99)),
        ])
    }

    #[test]
    fn test_segments() {
        assert_eq!(segments("a.b.c"), vec!["a", "b", "c"]);
        assert_eq!(segments("single"), vec!["single"]);
        assert!(segments("").is_empty());
        assert_eq!(segments("a..b"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_resolve_top_level() {
        let root = sample();
        assert_eq!(resolve("rootint", &root), Some(&int(23466)));
        assert_eq!(resolve("rootstring", &root), Some(&string("this is a string")));
    }

    #[test]
    fn test_resolve_nested() {
        let root = sample();
        assert_eq!(resolve("rootobj.subobj1.aBool", &root), Some(&bool_val(true)));
        assert!(matches!(
            resolve("rootobj.subarray1", &root),
            Some(ConfigValue::Array(items)) if items.len() == 2
        ));
        assert!(matches!(
            resolve("rootobj.subobj1", &root),
            Some(ConfigValue::Object(_))
        ));
    }

    #[test]
    fn test_resolve_missing_segments() {
        let root = sample();
        assert_eq!(resolve("nope", &root), None);
        assert_eq!(resolve("rootobj.nope.aBool", &root), None);
        assert_eq!(resolve("rootobj.subobj1.aMartian", &root), None);
    }

    #[test]
    fn test_resolve_stops_at_non_mapping() {
        let root = sample();
        assert_eq!(resolve("rootint.anything", &root), None);
        assert_eq!(resolve("rootobj.subarray1.0", &root), None);
        assert_eq!(resolve("rootnull.child", &root), None);
    }

    #[test]
    fn test_resolve_empty_path() {
        let root = sample();
        assert_eq!(resolve("", &root), None);
    }

    #[test]
    fn test_resolve_null_leaf_is_found() {
        let root = sample();
        assert_eq!(resolve("rootnull", &root), Some(&ConfigValue::Null));
    }

    #[test]
    fn test_dotted_keys_are_not_addressable() {
        let root = sample();
        assert_eq!(resolve("a.b", &root), None);
    }
}
