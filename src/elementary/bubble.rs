sort_impl!("bubble_sort_stable");

/// Sorts `v` by repeatedly swapping adjacent out-of-order pairs.
///
/// Each pass carries the largest element of the unsorted prefix to the end of that prefix, so
/// the scanned region shrinks by one per pass. *O*(*n*^2), in-place, stable.
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    for unsorted_len in (1..=v.len()).rev() {
        for i in 1..unsorted_len {
            if v[i] < v[i - 1] {
                v.swap(i - 1, i);
            }
        }
    }
}
