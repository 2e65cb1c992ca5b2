//! Common test utilities for integration tests.
//!
//! This module provides helpers for building deep directory trees and for
//! unpacking facade errors.

use std::path::{Path, PathBuf};

use longfs::{Error, LinkFailure, PathFailure};

/// Number of segments in one half of a deep path.
pub const SEGMENTS: usize = 26;

/// Four-letter component for segment `i`, cycling through the alphabet.
#[allow(dead_code)]
pub fn segment(i: usize) -> String {
    (0..4)
        .map(|offset| char::from(b'a' + u8::try_from((i + offset) % 26).unwrap()))
        .collect()
}

/// Builds `base` followed by two runs of [`SEGMENTS`] four-letter components.
///
/// Returns the leaf path and the first component below `base`.
#[allow(dead_code)]
pub fn deep_path(base: &Path) -> (PathBuf, PathBuf) {
    let mut leaf = base.to_path_buf();
    for _ in 0..2 {
        for i in 0..SEGMENTS {
            leaf.push(segment(i));
        }
    }
    (leaf, base.join(segment(0)))
}

/// Unwraps a single-path failure, panicking on anything else.
#[allow(dead_code)]
pub fn path_failure(err: Error) -> Box<PathFailure> {
    match err {
        Error::Path(failure) => failure,
        other => panic!("expected a path failure, got {other:?}"),
    }
}

/// Unwraps a two-path failure, panicking on anything else.
#[allow(dead_code)]
pub fn link_failure(err: Error) -> Box<LinkFailure> {
    match err {
        Error::Link(failure) => failure,
        other => panic!("expected a link failure, got {other:?}"),
    }
}
