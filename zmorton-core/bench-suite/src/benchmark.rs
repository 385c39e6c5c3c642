use zmorton_core::{
    run_perf, verify_all, BenchConfig, Capabilities, CheckReport, MonotonicClock, Registry,
    RunningSums, VerificationReport,
};

use crate::platforms::{BenchmarkHost, Platform};

/// Mismatches printed per failing report.
const SHOWN_MISMATCHES: usize = 8;

const RULE: &str =
    "----------------------------------------------------------------------------------";

/// Prints the suite header: host, compiler, build and capabilities.
pub fn print_header(config: &BenchConfig, capabilities: Capabilities) {
    Platform::print("[zmorton] Morton encode/decode correctness and performance suite");
    Platform::print(&format!(
        "Platform: {} ({}-bit pointers)",
        Platform::platform_name(),
        usize::BITS
    ));
    Platform::print(&format!("Compiler: {}", Platform::compiler()));
    Platform::print(&format!("Profile: {}", Platform::profile()));
    Platform::print(&format!(
        "BMI2: {}",
        if capabilities.bmi2() { "available" } else { "not available" }
    ));
    Platform::print(&format!(
        "Dims: {}  MAX: {}..={}  Trials: {}  Pool: {}  Seed: {:#x}",
        config.dims(),
        config.max_from(),
        config.max_to(),
        config.trials(),
        config.pool_size(),
        config.seed()
    ));
    Platform::print(RULE);
}

fn print_check(report: &CheckReport) {
    Platform::print(&format!(
        "[{}] {} {}: {} variants, {} comparisons",
        if report.passed() { "PASS" } else { "FAIL" },
        report.group,
        report.kind,
        report.variants,
        report.comparisons
    ));
    if report.passed() {
        return;
    }
    for m in report.mismatches.iter().take(SHOWN_MISMATCHES) {
        Platform::print(&format!("    {}", m));
    }
    let hidden = report.failures.saturating_sub(SHOWN_MISMATCHES as u64);
    if hidden > 0 {
        Platform::print(&format!("    ... and {} more", hidden));
    }
}

/// Runs and prints every correctness check.
pub fn run_verification(registry: &Registry, config: &BenchConfig) -> VerificationReport {
    Platform::print("Checking correctness");
    let t0 = Platform::now();
    let report = verify_all(registry, config);
    let m = Platform::measure(t0);

    for r in &report.reports {
        print_check(r);
    }
    Platform::print(&format!(
        "Correctness: {} ({} comparisons in {:.1} ms)",
        if report.passed() { "all checks passed" } else { "FAILED" },
        report.comparisons(),
        m.millis
    ));
    Platform::print(RULE);
    report
}

/// Runs the harness for every `MAX` of the sweep and prints each run.
pub fn run_sweep(registry: &Registry, config: &BenchConfig) -> RunningSums {
    let mut sums = RunningSums::new();
    for max in config.max_sweep() {
        Platform::print(&format!("Running performance tests, MAX = {}", max));
        Platform::print("  linear      random");

        let t0 = Platform::now();
        let run = run_perf(registry, config, &MonotonicClock, max);
        let m = Platform::measure(t0);

        for group in Registry::groups() {
            let mut timings = run.group(group).peekable();
            if timings.peek().is_none() {
                continue;
            }
            Platform::print(&format!("{} ({} calls per pattern):", group, run.total(group.dim)));
            for t in timings {
                Platform::print(&format!("  {}", t));
            }
            if let Some(best) = run.fastest(group) {
                Platform::print(&format!("  fastest: {} ({:.3} ms)", best.label, best.combined_ms()));
            }
        }
        log::debug!("MAX={} finished in {:.1} ms", max, m.millis);

        sums.record(&run);
        Platform::print(RULE);
    }
    Platform::print(&sums.to_string());
    sums
}
