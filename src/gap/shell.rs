sort_impl!("shell_sort_unstable");

/// Sorts `v` with insertion sorts over decreasing gaps 1, 4, 13, 40, ... (`h = 3h + 1`).
///
/// Large gaps move far-off elements close to their destination cheaply. The final gap is always
/// 1, a plain insertion sort, so correctness never depends on the earlier gaps. In-place, not
/// stable.
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    let mut gap = initial_gap(v.len());

    while gap > 0 {
        for offset in 0..gap {
            gapped_insertion_sort(v, offset, gap);
        }

        gap /= 3;
    }
}

fn initial_gap(len: usize) -> usize {
    let mut gap = 1;
    while gap * 3 + 1 < len {
        gap = gap * 3 + 1;
    }

    gap
}

/// Insertion sort over the interleaved subsequence `v[offset], v[offset + gap], ...`.
fn gapped_insertion_sort<T>(v: &mut [T], offset: usize, gap: usize)
where
    T: Ord,
{
    let mut tail = offset + gap;

    while tail < v.len() {
        let mut i = tail;
        while i >= offset + gap && v[i - gap] > v[i] {
            v.swap(i - gap, i);
            i -= gap;
        }

        tail += gap;
    }
}
