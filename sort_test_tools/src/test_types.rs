use std::cell::Cell;
use std::cmp::Ordering;

// Very large stack value.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct OneKiloByte {
    values: [i64; 128],
}

impl OneKiloByte {
    pub fn new(val: i32) -> Self {
        let mut values = [0i64; 128];
        let mut val_i64 = val as i64;

        for elem in &mut values {
            *elem = val_i64;
            val_i64 = std::hint::black_box(val_i64 + 1);
        }
        Self { values }
    }

    fn as_i64(&self) -> i64 {
        self.values[11] + self.values[55] + self.values[77]
    }
}

impl PartialOrd for OneKiloByte {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OneKiloByte {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_i64().cmp(&other.as_i64())
    }
}

// 16 byte stack value, with more expensive comparison.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct F128 {
    x: f64,
    y: f64,
}

impl F128 {
    pub fn new(val: i32) -> Self {
        let val_f = (val as f64) + (i32::MAX as f64) + 10.0;

        let x = val_f + 0.1;
        let y = val_f.log(4.1);

        assert!(y < x);
        assert!(x.is_normal() && y.is_normal());

        Self { x, y }
    }
}

// Only normal floats are ever constructed, see `F128::new`.
impl Eq for F128 {}

impl PartialOrd for F128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for F128 {
    fn cmp(&self, other: &Self) -> Ordering {
        // Simulate expensive comparison function.
        let this_div = self.x / self.y;
        let other_div = other.x / other.y;

        this_div.partial_cmp(&other_div).unwrap()
    }
}

/// Ordered by `key` alone. `seq` records the input position, which lets a test observe whether
/// equal keys kept their relative order.
#[derive(Debug, Clone, Copy)]
pub struct Keyed {
    pub key: i32,
    pub seq: u32,
}

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Keyed {}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

thread_local! {
    static COMP_COUNT: Cell<usize> = Cell::new(0);
    static PANIC_AT: Cell<Option<usize>> = Cell::new(None);
}

/// Integer whose comparison counts itself and can be armed to panic on the n-th call.
///
/// The counter is per thread, tests running in parallel don't see each other's comparisons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanicCmp(pub i32);

impl PanicCmp {
    /// Resets the comparison counter. With `Some(n)` the comparison with zero based index `n`
    /// panics.
    pub fn arm(panic_at: Option<usize>) {
        COMP_COUNT.with(|count| count.set(0));
        PANIC_AT.with(|at| at.set(panic_at));
    }

    pub fn comp_count() -> usize {
        COMP_COUNT.with(Cell::get)
    }
}

impl PartialOrd for PanicCmp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PanicCmp {
    fn cmp(&self, other: &Self) -> Ordering {
        let idx = COMP_COUNT.with(|count| {
            let idx = count.get();
            count.set(idx + 1);
            idx
        });

        if PANIC_AT.with(Cell::get) == Some(idx) {
            panic!("comparison {idx} panics");
        }

        self.0.cmp(&other.0)
    }
}
