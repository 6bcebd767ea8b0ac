//! Heap sort on an implicit binary max-heap stored in the slice itself.
//!
//! The children of node `i` sit at `2 * i + 1` and `2 * i + 2`.

sort_impl!("heap_sort_unstable");

/// Sorts `v` by building a max-heap in place and repeatedly moving its root behind the heap.
///
/// *O*(*n* \* log(*n*)) worst-case, *O*(1) extra memory, not stable.
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    let len = v.len();

    // Grow the heap one element at a time, `v[..heap_len - 1]` is a heap before each push.
    for heap_len in 2..=len {
        push(&mut v[..heap_len]);
    }

    debug_assert!(is_heap(v));

    for heap_len in (2..=len).rev() {
        pop(&mut v[..heap_len]);
    }
}

/// Returns `true` if no element of `v` is greater than its parent.
pub fn is_heap<T>(v: &[T]) -> bool
where
    T: Ord,
{
    (1..v.len()).all(|i| v[i] <= v[(i - 1) / 2])
}

/// Sifts the last element of `heap` up towards the root while it is greater than its parent.
fn push<T>(heap: &mut [T])
where
    T: Ord,
{
    let mut node = heap.len() - 1;

    while node > 0 {
        let parent = (node - 1) / 2;
        if heap[node] <= heap[parent] {
            break;
        }

        heap.swap(node, parent);
        node = parent;
    }
}

/// Swaps the maximum to the end of `heap` and restores the heap property on the rest.
fn pop<T>(heap: &mut [T])
where
    T: Ord,
{
    let last = heap.len() - 1;

    heap.swap(0, last);
    sift_down(&mut heap[..last], 0);
}

fn sift_down<T>(heap: &mut [T], mut node: usize)
where
    T: Ord,
{
    loop {
        let mut child = 2 * node + 1;
        if child >= heap.len() {
            break;
        }

        // Choose the greater child.
        if child + 1 < heap.len() && heap[child] < heap[child + 1] {
            child += 1;
        }

        // Stop if the invariant holds at `node`.
        if heap[node] >= heap[child] {
            break;
        }

        heap.swap(node, child);
        node = child;
    }
}
