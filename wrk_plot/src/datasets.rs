//! Benchmark datasets as they were produced by the wrk2 runs: where the logs
//! live and which request rates were offered.

use wrk_stats::{AggregateConfig, LatencyVariant, Variant};

const RESULTS_DIR: &str = "../bench-results";
const NCONNS: usize = 2;
const ITERATIONS: usize = 5;

pub const RPS_READ: [u64; 27] = [
    1, 25, 50, 75, 100, 125, 150, 175, 200, 225, 250, 275, 300, 325, 350, 360,
    380, 400, 420, 440, 460, 480, 500, 520, 540, 560, 600,
];
pub const RPS_WRITE: [u64; 39] = [
    1, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120, 130, 140, 150, 160,
    170, 180, 190, 200, 205, 210, 215, 220, 225, 230, 235, 240, 245, 250, 255,
    260, 265, 270, 275, 280, 285, 290,
];

// single-run sweep over a larger load range
const SWEEP_DIR: &str = "/tmp";
pub const RPS_SWEEP: [u64; 13] = [
    100, 200, 400, 600, 800, 1000, 2000, 3000, 4000, 5000, 6000, 7000, 8000,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workload {
    Read,
    Write,
}

impl Workload {
    pub fn name(&self) -> &str {
        match self {
            Workload::Read => "read",
            Workload::Write => "write",
        }
    }

    fn dataset(&self) -> &str {
        match self {
            Workload::Read => "3-one-cpu-read-final",
            Workload::Write => "4-one-cpu-write-populated-final",
        }
    }

    pub fn rates(&self) -> &'static [u64] {
        match self {
            Workload::Read => &RPS_READ,
            Workload::Write => &RPS_WRITE,
        }
    }
}

pub fn nconns() -> usize {
    NCONNS
}

/// Five iterations per rate, corrected p99.
pub fn workload_config(workload: Workload, variant: Variant) -> AggregateConfig {
    let prefix = format!(
        "{}/{}/nconns_{}/benchmark_sn_res_{}/res_",
        RESULTS_DIR,
        workload.dataset(),
        NCONNS,
        variant.dir_suffix()
    );
    let mut config = AggregateConfig::new(prefix, workload.rates().to_vec());
    config
        .iterations(ITERATIONS)
        .percentile("99.000")
        .variant(LatencyVariant::Corrected);
    config
}

/// One log per rate, p99.999.
pub fn sweep_config(variant: Variant) -> AggregateConfig {
    let prefix =
        format!("{}/benchmark_sn_res_{}/res_", SWEEP_DIR, variant.dir_suffix());
    let mut config = AggregateConfig::new(prefix, RPS_SWEEP.to_vec());
    config.single_run().percentile("99.999");
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn workload_files() {
        let config = workload_config(Workload::Write, Variant::Micr);
        let files = config.file_names();
        assert_eq!(files.len(), RPS_WRITE.len() * ITERATIONS);
        assert_eq!(
            files[0].2,
            PathBuf::from(
                "../bench-results/4-one-cpu-write-populated-final/nconns_2/benchmark_sn_res_micr/res_1_1"
            )
        );
    }

    #[test]
    fn sweep_files() {
        let config = sweep_config(Variant::Mono);
        let files = config.file_names();
        assert_eq!(files.len(), RPS_SWEEP.len());
        assert_eq!(
            files.last().map(|(_, _, path)| path.clone()),
            Some(PathBuf::from("/tmp/benchmark_sn_res_mono/res_8000"))
        );
    }
}
