//! Runs the conformance battery against the standard library sort, which keeps the battery itself
//! honest.

use sort_test_tools::instantiate_sort_tests;
use sort_test_tools::Sort;

struct SortImpl {}

impl Sort for SortImpl {
    fn name() -> String {
        "rust_std_stable".into()
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord,
    {
        arr.sort();
    }
}

instantiate_sort_tests!(SortImpl);
