use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("unknown algorithm `{0}`, expected a name such as `quick_sort` or `Quick Sort`")]
    UnknownAlgorithm(String),

    #[error("{failed} of {total} test cases were not sorted")]
    Failures { failed: usize, total: usize },

    #[error("{algorithm} left {distribution} (size={len}) unsorted")]
    Unsorted {
        algorithm: &'static str,
        distribution: &'static str,
        len: usize,
    },

    #[error("failed to write report")]
    Io(#[from] io::Error),
}
