use std::cmp;

sort_impl!("comb_sort_unstable");

/// Sorts `v` with bubble passes over a gap that shrinks by a factor of 10/13 each round.
///
/// Once the gap reaches 1 the rounds continue until one completes without a swap, which makes the
/// last round a full adjacent pass over sorted data. In-place, not stable.
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    let len = v.len();
    let mut gap = len;
    let mut done = false;

    while !done || gap > 1 {
        done = true;
        gap = shrink(gap);

        for i in gap..len {
            if v[i] < v[i - gap] {
                v.swap(i - gap, i);
                done = false;
            }
        }
    }
}

#[inline]
fn shrink(gap: usize) -> usize {
    cmp::max(gap * 10 / 13, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shrink_floors_at_one() {
        assert_eq!(shrink(0), 1);
        assert_eq!(shrink(1), 1);
        assert_eq!(shrink(13), 10);
        assert_eq!(shrink(100), 76);
    }
}
