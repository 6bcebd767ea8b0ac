sort_impl!("insertion_sort_stable");

/// Sorts `v` by growing a sorted prefix one element at a time.
///
/// Adaptive: *O*(*n*) on already sorted input, *O*(*n*^2) in the worst case. In-place, stable.
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    for sorted_len in 1..v.len() {
        insert_tail(&mut v[..=sorted_len]);
    }
}

/// Moves the last element of `v` left past every element that is strictly greater.
///
/// `v[..v.len() - 1]` must already be sorted.
fn insert_tail<T>(v: &mut [T])
where
    T: Ord,
{
    let mut i = v.len() - 1;

    while i > 0 && v[i - 1] > v[i] {
        v.swap(i - 1, i);
        i -= 1;
    }
}
