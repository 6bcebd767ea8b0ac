//! The two harness modes: a correctness battery over small sizes and a single timed run per
//! algorithm and distribution.

use std::cmp;
use std::hint::black_box;
use std::io::Write;

use log::{debug, info};
use rand::rngs::StdRng;

use classic_sorts::is_sorted;
use classic_sorts::registry::Algorithm;

use crate::distribution::ValueDistribution;
use crate::error::HarnessError;
use crate::measure::{format_millis, measure_duration};

const TEST_SIZES: [usize; 6] = [0, 1, 2, 3, 10, 100];

/// Sorts every distribution at every size in `TEST_SIZES` with every algorithm and reports one
/// `OK`/`NG` line per case. Failing cases, or all of them with `debug`, also dump their values.
pub fn test_all(
    out: &mut impl Write,
    algorithms: &[Algorithm<i32>],
    rng: &mut StdRng,
    debug: bool,
) -> Result<(), HarnessError> {
    writeln!(out, "\n======== TEST ========")?;

    let mut total = 0;
    let mut failed = 0;

    for algorithm in algorithms {
        for distribution in ValueDistribution::ALL {
            for len in TEST_SIZES {
                let mut values = distribution.generate(len, rng);
                algorithm.run(&mut values);

                let sorted = is_sorted(&values);
                writeln!(
                    out,
                    "{} - {} - {} (size={len})",
                    if sorted { "OK" } else { "NG" },
                    algorithm.display_name,
                    distribution.name(),
                )?;

                if debug || !sorted {
                    writeln!(out, "{}", format_values(&values))?;
                }

                total += 1;
                if !sorted {
                    failed += 1;
                }
            }
        }
    }

    if failed > 0 {
        return Err(HarnessError::Failures { failed, total });
    }

    info!("all {total} test cases sorted");
    Ok(())
}

/// Times one sort per algorithm and distribution. The element count is the algorithm's
/// `benchmark_len`, capped at `max_len` if given. Only the sort itself is timed.
pub fn benchmark_all(
    out: &mut impl Write,
    algorithms: &[Algorithm<i32>],
    rng: &mut StdRng,
    max_len: Option<usize>,
) -> Result<(), HarnessError> {
    writeln!(out, "\n======== BENCHMARK ========")?;

    for algorithm in algorithms {
        let len = max_len.map_or(algorithm.benchmark_len, |max_len| {
            cmp::min(max_len, algorithm.benchmark_len)
        });

        for distribution in ValueDistribution::ALL {
            debug!(
                "generating {len} {} for {}",
                distribution.name(),
                algorithm.name
            );
            let mut values = distribution.generate(len, rng);

            let elapsed = measure_duration(|| algorithm.run(black_box(values.as_mut_slice())));

            if !is_sorted(&values) {
                return Err(HarnessError::Unsorted {
                    algorithm: algorithm.display_name,
                    distribution: distribution.name(),
                    len,
                });
            }

            writeln!(
                out,
                "{} - {} - {} (size={len})",
                format_millis(elapsed),
                algorithm.display_name,
                distribution.name(),
            )?;
            out.flush()?;
        }
    }

    Ok(())
}

/// Joins `values` with `", "` and appends whether they are sorted.
fn format_values(values: &[i32]) -> String {
    let joined = values
        .iter()
        .map(|val| val.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let verdict = if is_sorted(values) {
        "(sorted)"
    } else {
        "(not sorted)"
    };

    format!("{joined} {verdict}")
}

#[cfg(test)]
mod tests {
    use classic_sorts::registry;
    use sort_test_tools::patterns;

    use super::*;

    fn reverse_only(v: &mut [i32]) {
        v.reverse();
    }

    #[test]
    fn value_dump() {
        assert_eq!(format_values(&[]), " (sorted)");
        assert_eq!(format_values(&[1, 2, 2]), "1, 2, 2 (sorted)");
        assert_eq!(format_values(&[3, 1]), "3, 1 (not sorted)");
    }

    #[test]
    fn test_all_reports_every_case() {
        let algorithms = [registry::find::<i32>("insertion_sort").unwrap()];
        let mut out = Vec::new();

        test_all(&mut out, &algorithms, &mut patterns::rng_from_seed(1), false).unwrap();

        let report = String::from_utf8(out).unwrap();
        let lines = report.lines().filter(|line| line.starts_with("OK")).count();
        assert_eq!(lines, ValueDistribution::ALL.len() * TEST_SIZES.len());
        assert!(report.contains("OK - Insertion Sort - Descending Values (size=100)"));
        assert!(!report.contains("NG"));
    }

    #[test]
    fn test_all_flags_broken_sort() {
        let broken = Algorithm {
            name: "reverse",
            display_name: "Reverse",
            sort: reverse_only,
            stable: false,
            benchmark_len: 8,
        };
        let mut out = Vec::new();

        let res = test_all(&mut out, &[broken], &mut patterns::rng_from_seed(1), false);
        assert!(matches!(res, Err(HarnessError::Failures { .. })));

        let report = String::from_utf8(out).unwrap();
        assert!(report.contains("NG - Reverse - Ascending Values (size=10)"));
        assert!(report.contains("9, 8, 7, 6, 5, 4, 3, 2, 1, 0 (not sorted)"));
    }

    #[test]
    fn benchmark_respects_max_len() {
        let algorithms = [registry::find::<i32>("merge_sort").unwrap()];
        let mut out = Vec::new();

        benchmark_all(
            &mut out,
            &algorithms,
            &mut patterns::rng_from_seed(3),
            Some(1_000),
        )
        .unwrap();

        let report = String::from_utf8(out).unwrap();
        assert_eq!(report.matches("(size=1000)").count(), 4);
        assert!(report.contains("ms - Merge Sort - Random Values (size=1000)"));
    }
}
