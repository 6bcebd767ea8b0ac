sort_impl!("selection_sort_unstable");

/// Sorts `v` by moving the minimum of the unsorted suffix to its front, one position at a time.
///
/// *O*(*n*^2) comparisons but at most *n* swaps. Not stable: the swap can jump an element over
/// its equals.
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    let len = v.len();

    for sorted_len in 0..len {
        let mut min = sorted_len;
        for i in (sorted_len + 1)..len {
            if v[i] < v[min] {
                min = i;
            }
        }

        v.swap(sorted_len, min);
    }
}
