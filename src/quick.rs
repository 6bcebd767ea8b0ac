//! Recursive quicksort with a Hoare partition around the middle element.

sort_impl!("quick_sort_unstable");

/// Sorts `v` by partitioning it around the value of its middle element and sorting both sides.
///
/// Average *O*(*n* \* log(*n*)). The fixed middle pivot handles sorted and reverse sorted input
/// well, but crafted inputs can drive it to *O*(*n*^2). In-place, not stable.
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v);
}

fn quicksort<T>(mut v: &mut [T])
where
    T: Ord,
{
    loop {
        if v.len() < 2 {
            return;
        }

        let (left_end, right_start) = partition(v);
        let (left, right) = v.split_at_mut(right_start);

        // Recurse into the left side.
        quicksort(&mut left[..left_end]);

        // Continue with the right side.
        v = right;
    }
}

/// Partitions `v` around the value of `v[(len - 1) / 2]` and returns `(left_end, right_start)`.
///
/// Afterwards no element of `v[..left_end]` is greater than the pivot, no element of
/// `v[right_start..]` is less than it, and the at most one element in between equals it. Both
/// sides are strictly shorter than `v`. `v` must hold at least two elements.
fn partition<T>(v: &mut [T]) -> (usize, usize)
where
    T: Ord,
{
    let len = v.len();
    debug_assert!(len >= 2);

    // Position of the pivot value, it moves along when swapped.
    let mut pivot = (len - 1) / 2;

    let mut lo = 0;
    // One past the upper scan index.
    let mut hi = len;

    while lo < hi {
        while lo < hi && v[lo] < v[pivot] {
            lo += 1;
        }
        while lo < hi && v[hi - 1] > v[pivot] {
            hi -= 1;
        }

        if lo < hi {
            v.swap(lo, hi - 1);

            if pivot == lo {
                pivot = hi - 1;
            } else if pivot == hi - 1 {
                pivot = lo;
            }

            lo += 1;
            hi -= 1;
        }
    }

    (hi, lo)
}
