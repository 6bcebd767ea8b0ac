//! Name to sort operation table, for callers that iterate the whole collection such as the
//! harness, the benchmarks and the fuzzer.

use crate::{bubble, comb, heap, insertion, merge, quick, selection, shaker, shell};

/// Element count for a single timed run of an *O*(*n*^2) sort.
pub const QUADRATIC_BENCH_LEN: usize = 1 << 16;

/// Element count for a single timed run of an *O*(*n* \* log(*n*)) sort.
pub const LINEARITHMIC_BENCH_LEN: usize = 1 << 25;

pub struct Algorithm<T> {
    /// Snake case identifier, e.g. `quick_sort`.
    pub name: &'static str,
    /// Human readable name, e.g. `Quick Sort`.
    pub display_name: &'static str,
    pub sort: fn(&mut [T]),
    /// Whether equal elements keep their input order.
    pub stable: bool,
    pub benchmark_len: usize,
}

impl<T> Algorithm<T> {
    #[inline]
    pub fn run(&self, v: &mut [T]) {
        (self.sort)(v)
    }

    pub fn is_quadratic(&self) -> bool {
        self.benchmark_len == QUADRATIC_BENCH_LEN
    }
}

// Manual impls, derive would needlessly require `T: Clone`.
impl<T> Clone for Algorithm<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Algorithm<T> {}

impl<T> std::fmt::Debug for Algorithm<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Algorithm")
            .field("name", &self.name)
            .field("stable", &self.stable)
            .field("benchmark_len", &self.benchmark_len)
            .finish()
    }
}

/// Every algorithm, from the elementary sorts to quicksort.
pub fn algorithms<T: Ord>() -> Vec<Algorithm<T>> {
    vec![
        Algorithm {
            name: "bubble_sort",
            display_name: "Bubble Sort",
            sort: bubble::sort,
            stable: true,
            benchmark_len: QUADRATIC_BENCH_LEN,
        },
        Algorithm {
            name: "selection_sort",
            display_name: "Selection Sort",
            sort: selection::sort,
            stable: false,
            benchmark_len: QUADRATIC_BENCH_LEN,
        },
        Algorithm {
            name: "insertion_sort",
            display_name: "Insertion Sort",
            sort: insertion::sort,
            stable: true,
            benchmark_len: QUADRATIC_BENCH_LEN,
        },
        Algorithm {
            name: "shaker_sort",
            display_name: "Shaker Sort",
            sort: shaker::sort,
            stable: true,
            benchmark_len: QUADRATIC_BENCH_LEN,
        },
        Algorithm {
            name: "shell_sort",
            display_name: "Shell Sort",
            sort: shell::sort,
            stable: false,
            benchmark_len: QUADRATIC_BENCH_LEN,
        },
        Algorithm {
            name: "comb_sort",
            display_name: "Comb Sort",
            sort: comb::sort,
            stable: false,
            benchmark_len: LINEARITHMIC_BENCH_LEN,
        },
        Algorithm {
            name: "heap_sort",
            display_name: "Heap Sort",
            sort: heap::sort,
            stable: false,
            benchmark_len: LINEARITHMIC_BENCH_LEN,
        },
        Algorithm {
            name: "merge_sort",
            display_name: "Merge Sort",
            sort: merge::sort,
            stable: true,
            benchmark_len: LINEARITHMIC_BENCH_LEN,
        },
        Algorithm {
            name: "quick_sort",
            display_name: "Quick Sort",
            sort: quick::sort,
            stable: false,
            benchmark_len: LINEARITHMIC_BENCH_LEN,
        },
    ]
}

/// Looks an algorithm up by `name` or `display_name`, ignoring ASCII case.
pub fn find<T: Ord>(name: &str) -> Option<Algorithm<T>> {
    algorithms().into_iter().find(|algorithm| {
        algorithm.name.eq_ignore_ascii_case(name)
            || algorithm.display_name.eq_ignore_ascii_case(name)
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn names_are_unique() {
        let algorithms = algorithms::<i32>();
        assert_eq!(algorithms.len(), 9);

        let names = algorithms.iter().map(|a| a.name).collect::<HashSet<_>>();
        assert_eq!(names.len(), algorithms.len());
    }

    #[test]
    fn find_by_either_name() {
        assert_eq!(find::<i32>("quick_sort").map(|a| a.name), Some("quick_sort"));
        assert_eq!(find::<i32>("Merge Sort").map(|a| a.name), Some("merge_sort"));
        assert_eq!(find::<i32>("HEAP_SORT").map(|a| a.name), Some("heap_sort"));
        assert!(find::<i32>("bogo_sort").is_none());
    }

    #[test]
    fn trivial_inputs() {
        for algorithm in algorithms::<i32>() {
            let mut empty: [i32; 0] = [];
            algorithm.run(&mut empty);

            let mut single = [5];
            algorithm.run(&mut single);
            assert_eq!(single, [5], "{}", algorithm.name);
        }
    }

    #[test]
    fn descending_ten() {
        for algorithm in algorithms::<i32>() {
            let mut v = (0..10).rev().collect::<Vec<_>>();
            algorithm.run(&mut v);
            assert_eq!(v, (0..10).collect::<Vec<_>>(), "{}", algorithm.name);
        }
    }

    #[test]
    fn stable_flags() {
        let stable = algorithms::<i32>()
            .into_iter()
            .filter(|a| a.stable)
            .map(|a| a.name)
            .collect::<Vec<_>>();

        assert_eq!(
            stable,
            ["bubble_sort", "insertion_sort", "shaker_sort", "merge_sort"]
        );
    }
}
