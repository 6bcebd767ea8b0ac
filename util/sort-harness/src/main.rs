mod battery;
mod distribution;
mod error;
mod measure;

use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{error, info};

use classic_sorts::registry::{self, Algorithm};
use sort_test_tools::patterns;

use crate::error::HarnessError;

/// Checks and times the classic sorting algorithms.
#[derive(Parser, Debug)]
#[command(name = "sort-harness")]
struct Cli {
    /// Seed for the random value distribution. A fresh one is picked and printed if omitted.
    #[arg(long, global = true, env = "OVERRIDE_SEED")]
    seed: Option<u64>,

    /// Only run this algorithm, e.g. `quick_sort` or "Quick Sort". Can be given multiple times.
    #[arg(long = "algorithm", short = 'a', global = true)]
    algorithms: Vec<String>,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Sort every value distribution at sizes 0, 1, 2, 3, 10 and 100 and verify the result.
    Test {
        /// Print the values of every case, not only of the failing ones.
        #[arg(long)]
        debug: bool,
    },
    /// Time a single large run per algorithm and value distribution.
    Bench {
        /// Cap on the element count, the quadratic sorts default to 2^16 and the others to 2^25.
        #[arg(long)]
        max_len: Option<usize>,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), HarnessError> {
    let algorithms = select_algorithms(&cli.algorithms)?;
    info!(
        "running {}",
        algorithms
            .iter()
            .map(|algorithm| algorithm.name)
            .collect::<Vec<_>>()
            .join(", ")
    );

    // Always print the seed before doing anything to ensure reproducibility.
    let seed = patterns::resolve_seed(cli.seed);
    println!("Seed: {seed}");
    let mut rng = patterns::rng_from_seed(seed);

    let mut out = io::stdout().lock();

    match cli.mode {
        Mode::Test { debug } => battery::test_all(&mut out, &algorithms, &mut rng, debug),
        Mode::Bench { max_len } => battery::benchmark_all(&mut out, &algorithms, &mut rng, max_len),
    }
}

fn select_algorithms(names: &[String]) -> Result<Vec<Algorithm<i32>>, HarnessError> {
    if names.is_empty() {
        return Ok(registry::algorithms());
    }

    names
        .iter()
        .map(|name| {
            registry::find(name).ok_or_else(|| HarnessError::UnknownAlgorithm(name.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_bench_flags() {
        let cli = Cli::try_parse_from([
            "sort-harness",
            "bench",
            "--max-len",
            "4096",
            "-a",
            "heap_sort",
            "--seed",
            "9",
        ])
        .unwrap();

        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.algorithms, ["heap_sort"]);
        assert!(matches!(
            cli.mode,
            Mode::Bench {
                max_len: Some(4096)
            }
        ));
    }

    #[test]
    fn selects_by_name() {
        let all = select_algorithms(&[]).unwrap();
        assert_eq!(all.len(), 9);

        let some = select_algorithms(&["Shell Sort".into(), "comb_sort".into()]).unwrap();
        assert_eq!(
            some.iter().map(|a| a.name).collect::<Vec<_>>(),
            ["shell_sort", "comb_sort"]
        );

        assert!(matches!(
            select_algorithms(&["bogo_sort".into()]),
            Err(HarnessError::UnknownAlgorithm(name)) if name == "bogo_sort"
        ));
    }
}
