//! Bottom-up merge sort, double buffered between the slice and one scratch allocation.

use std::cmp;
use std::mem;
use std::ptr;

sort_impl!("merge_sort_stable");

/// Sorts `v` by merging runs of 1, 2, 4, ... elements until a single run spans the slice.
///
/// Each round merges every pair of neighbouring runs from the buffer holding the live elements
/// into the other one. The scratch buffer has the same length as `v`, is allocated once per call
/// and released before returning. *O*(*n* \* log(*n*)) worst-case, stable.
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    let len = v.len();

    if len < 2 || mem::size_of::<T>() == 0 {
        // These inputs are always sorted.
        return;
    }

    let mut buf = Vec::<T>::with_capacity(len);

    // Declared after `buf` so it is dropped first, the copy back must happen before the
    // allocation goes away.
    let mut double_buf = DoubleBuf {
        v: v.as_mut_ptr(),
        buf: buf.as_mut_ptr(),
        len,
        live_in_buf: false,
    };

    let mut run_len = 1;
    while run_len < len {
        let (src, dst) = double_buf.src_dst();

        let mut start = 0;
        while start < len {
            let mid = cmp::min(start + run_len, len);
            let end = cmp::min(start + run_len * 2, len);

            // SAFETY: `src` and `dst` are distinct allocations of `len` elements and
            // `start <= mid <= end <= len`.
            unsafe {
                merge(src, dst, start, mid, end);
            }

            start = end;
        }

        // `dst` now holds every element, `src` only stale bitwise copies.
        double_buf.live_in_buf = !double_buf.live_in_buf;
        run_len *= 2;
    }

    // Dropping `double_buf` copies the result back if it ended up in `buf`.
}

/// The slice and the scratch buffer, plus which of the two holds the live elements.
///
/// When dropped, including during unwinding from a panicking comparison, it leaves the live
/// elements in the slice. `buf` keeps a length of zero throughout, so its elements are never
/// dropped.
struct DoubleBuf<T> {
    v: *mut T,
    buf: *mut T,
    len: usize,
    live_in_buf: bool,
}

impl<T> DoubleBuf<T> {
    fn src_dst(&self) -> (*const T, *mut T) {
        if self.live_in_buf {
            (self.buf, self.v)
        } else {
            (self.v, self.buf)
        }
    }
}

impl<T> Drop for DoubleBuf<T> {
    fn drop(&mut self) {
        if self.live_in_buf {
            // SAFETY: `buf` holds each element exactly once. What the slice holds are bitwise
            // copies without ownership, overwriting them drops nothing.
            unsafe {
                ptr::copy_nonoverlapping(self.buf, self.v, self.len);
            }
        }
    }
}

/// Merges the sorted runs `src[start..mid]` and `src[mid..end]` into `dst[start..end]`.
///
/// On equal fronts the left run wins, which is what makes the sort stable.
///
/// # Safety
///
/// `src` and `dst` must be valid for `end` elements and must not overlap, and
/// `start <= mid <= end` must hold.
unsafe fn merge<T>(src: *const T, dst: *mut T, start: usize, mid: usize, end: usize)
where
    T: Ord,
{
    let mut left = start;
    let mut right = mid;
    let mut out = start;

    while left < mid && right < end {
        let take_right = *src.add(right) < *src.add(left);

        let from = if take_right {
            right += 1;
            right - 1
        } else {
            left += 1;
            left - 1
        };

        ptr::copy_nonoverlapping(src.add(from), dst.add(out), 1);
        out += 1;
    }

    // At most one of these is non-empty.
    let left_rest = mid - left;
    ptr::copy_nonoverlapping(src.add(left), dst.add(out), left_rest);
    out += left_rest;

    ptr::copy_nonoverlapping(src.add(right), dst.add(out), end - right);
}
