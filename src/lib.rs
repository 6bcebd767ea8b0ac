//! Textbook in-memory comparison sorts: bubble, selection, insertion, shaker, shell, comb, heap,
//! merge and quick sort.
//!
//! Every algorithm lives in its own module and exposes the same shape, `sort(&mut [T])` for any
//! `T: Ord`, plus a `SortImpl` type that plugs it into the `sort_test_tools` battery.
//! [`registry`] maps names to all of them for code that wants to iterate the whole collection.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }
        }
    };
}

pub mod elementary;
pub mod gap;
pub mod heap;
pub mod merge;
pub mod quick;
pub mod registry;

pub use elementary::{bubble, insertion, selection, shaker};
pub use gap::{comb, shell};
pub use sort_test_tools::Sort;

/// Returns `true` if every element is less than or equal to its successor.
pub fn is_sorted<T: Ord>(v: &[T]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}
