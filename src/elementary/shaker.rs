sort_impl!("shaker_sort_stable");

/// Sorts `v` with bidirectional bubble passes, also known as cocktail sort.
///
/// Rabbits at the far end of the input travel to the front in one backward pass instead of one
/// position per pass. *O*(*n*^2), in-place, stable.
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    shake(v);
}

/// Runs forward and backward passes over the unsorted window until it collapses. Returns the
/// number of forward/backward pass pairs, at most `ceil(n / 2)`.
fn shake<T>(v: &mut [T]) -> usize
where
    T: Ord,
{
    if v.len() < 2 {
        return 0;
    }

    let mut lower = 0;
    let mut upper = v.len() - 1;
    let mut passes = 0;

    while lower < upper {
        // Carry the window maximum up to `upper`.
        for i in (lower + 1)..=upper {
            if v[i] < v[i - 1] {
                v.swap(i - 1, i);
            }
        }
        upper -= 1;

        // Carry the window minimum down to `lower`.
        for i in ((lower + 1)..=upper).rev() {
            if v[i - 1] > v[i] {
                v.swap(i - 1, i);
            }
        }
        lower += 1;

        passes += 1;
    }

    passes
}
