//! # Morton Code Benchmark Suite
//!
//! Entry point for the `zmorton-core` variants. Probes the CPU, registers every
//! supported encoder and decoder, checks them all against the reference codec,
//! then times them over a doubling sweep of coordinate bounds.
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` for progress detail.

mod benchmark;
mod platforms;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use zmorton_core::{BenchConfig, Capabilities, DimSelection, Registry};

use crate::benchmark::{print_header, run_sweep, run_verification};

/// Dimensions selectable on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum DimsArg {
    /// 2D only.
    #[value(name = "2")]
    Two,
    /// 3D only.
    #[value(name = "3")]
    Three,
    /// Both.
    Both,
}

impl From<DimsArg> for DimSelection {
    fn from(d: DimsArg) -> Self {
        match d {
            DimsArg::Two => DimSelection::Two,
            DimsArg::Three => DimSelection::Three,
            DimsArg::Both => DimSelection::Both,
        }
    }
}

// --- CLI Arguments ---
#[derive(Parser, Debug)]
#[command(name = "zmorton-bench", version, about = "Morton encode/decode correctness and throughput suite")]
struct Cli {
    /// First coordinate bound of the doubling sweep
    #[arg(long, default_value_t = zmorton_core::config::DEFAULT_MAX_FROM)]
    max_from: u32,

    /// Last coordinate bound of the doubling sweep (inclusive)
    #[arg(long, default_value_t = zmorton_core::config::DEFAULT_MAX_TO)]
    max_to: u32,

    /// Timed repetitions per variant
    #[arg(short, long, default_value_t = zmorton_core::config::DEFAULT_TRIALS)]
    trials: u32,

    /// Random-pattern pool size
    #[arg(long, default_value_t = zmorton_core::config::DEFAULT_POOL_SIZE)]
    pool_size: usize,

    /// Seed for the random pools and the fuzz check
    #[arg(long, default_value_t = zmorton_core::config::DEFAULT_SEED)]
    seed: u64,

    /// Dimensions to check and time
    #[arg(short, long, value_enum, default_value_t = DimsArg::Both)]
    dims: DimsArg,

    /// Random inputs per group for the fuzz check (0 disables it)
    #[arg(long, default_value_t = zmorton_core::config::DEFAULT_FUZZ_SAMPLES)]
    fuzz_samples: usize,

    /// Stop after the correctness checks
    #[arg(long, default_value_t = false)]
    skip_perf: bool,

    /// Exit with an error if any correctness check fails
    #[arg(long, default_value_t = false)]
    fail_on_mismatch: bool,
}

impl Cli {
    fn config(&self) -> Result<BenchConfig> {
        BenchConfig::builder()
            .max_range(self.max_from, self.max_to)
            .trials(self.trials)
            .pool_size(self.pool_size)
            .seed(self.seed)
            .dims(self.dims.into())
            .fuzz_samples(self.fuzz_samples)
            .build()
            .context("invalid configuration")
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Cli::parse();
    let config = args.config()?;

    let capabilities = Capabilities::detect();
    let registry = Registry::new(capabilities);

    print_header(&config, capabilities);
    let report = run_verification(&registry, &config);

    if !args.skip_perf {
        run_sweep(&registry, &config);
    }

    if args.fail_on_mismatch && !report.passed() {
        bail!("{} correctness check(s) failed", report.failures().count());
    }
    Ok(())
}
