//! Heavier property-based tests for resolution.
//!
//! Note: The normalize and resolver modules already carry quick property
//! tests. This module runs many more cases and covers relative inputs and
//! custom thresholds.

use super::extended::{path_len, strip_marker, MARKER};
use super::normalize::clean;
use super::{FixedWorkingDir, LongPathResolver, PathResolver};
use proptest::prelude::*;
use std::path::{Path, PathBuf};

fn path_component_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        8 => "[a-zA-Z0-9_-]{1,30}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
    ]
}

fn relative_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 1..16)
        .prop_map(|parts| parts.iter().collect::<PathBuf>())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // The rewrite decision depends only on the cleaned length
    #[test]
    fn rewrite_matches_threshold(
        path in relative_path_strategy(),
        threshold in 1usize..400,
    ) {
        let resolver = LongPathResolver::new()
            .with_threshold(threshold)
            .with_working_dir(FixedWorkingDir::new("/work"));
        let resolved = resolver.resolve(&path).unwrap();
        let long = path_len(resolved.absolute()) >= threshold;
        prop_assert_eq!(resolved.is_rewritten(), long);
    }

    // The absolute form never carries the marker
    #[test]
    fn absolute_form_is_unmarked(
        path in relative_path_strategy(),
        threshold in 1usize..400,
    ) {
        let resolver = LongPathResolver::new()
            .with_threshold(threshold)
            .with_working_dir(FixedWorkingDir::new("/work"));
        let resolved = resolver.resolve(&path).unwrap();
        let absolute = resolved.absolute().to_string_lossy().into_owned();
        prop_assert!(!absolute.starts_with(MARKER));
        prop_assert_eq!(strip_marker(resolved.rewritten()), resolved.absolute());
    }

    // Resolution result equals cleaning the joined path
    #[test]
    fn absolute_equals_clean_join(path in relative_path_strategy()) {
        let resolver = LongPathResolver::new().with_working_dir(FixedWorkingDir::new("/work"));
        let resolved = resolver.resolve(&path).unwrap();
        prop_assert_eq!(resolved.absolute(), clean(&Path::new("/work").join(&path)));
    }
}
