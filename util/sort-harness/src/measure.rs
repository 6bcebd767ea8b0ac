//! This module implements functionality for measuring the duration of a single sort run.

use std::time::{Duration, Instant};

/// Measures the time it takes to execute the function `test_fn`.
#[inline(never)]
pub fn measure_duration(test_fn: impl FnOnce()) -> Duration {
    let start = Instant::now();

    test_fn();

    start.elapsed()
}

/// Formats `duration` as milliseconds with six decimals, right aligned, e.g. `  12.345678ms`.
pub fn format_millis(duration: Duration) -> String {
    format!("{:12.6}ms", duration.as_secs_f64() * 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_have_six_decimals() {
        assert_eq!(
            format_millis(Duration::from_micros(1_500)),
            "    1.500000ms"
        );
        assert_eq!(format_millis(Duration::ZERO).trim_start(), "0.000000ms");
    }

    #[test]
    fn measures_the_closure() {
        let mut ran = false;
        let elapsed = measure_duration(|| ran = true);

        assert!(ran);
        assert!(elapsed < Duration::from_secs(60));
    }
}
