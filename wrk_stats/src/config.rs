use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// number of runs per request rate
const ITERATIONS: usize = 5;
// wrk2 percentile label to extract
const PERCENTILE: &str = "99.000";
// fraction cut from each end before averaging iterations
const TRIM: f64 = 0.2;

/// wrk2 prints the latency distribution twice: first corrected for
/// coordinated omission, then uncorrected. Each variant picks one of the two
/// lines carrying the percentile label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum LatencyVariant {
    Corrected,
    Uncorrected,
}

impl LatencyVariant {
    /// Index of the matching percentile line for this variant.
    pub fn line_index(&self) -> usize {
        match self {
            LatencyVariant::Corrected => 0,
            LatencyVariant::Uncorrected => 1,
        }
    }
}

/// Where to find the logs of one series and how to reduce them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AggregateConfig {
    prefix: String,
    rates: Vec<u64>,
    // `None` means one log per rate, without an iteration suffix
    iterations: Option<usize>,
    percentile: String,
    variant: LatencyVariant,
    trim: f64,
}

impl AggregateConfig {
    pub fn new(prefix: impl Into<String>, rates: Vec<u64>) -> Self {
        Self {
            prefix: prefix.into(),
            rates,
            iterations: Some(ITERATIONS),
            percentile: String::from(PERCENTILE),
            variant: LatencyVariant::Corrected,
            trim: TRIM,
        }
    }

    pub fn iterations(&mut self, iterations: usize) -> &mut Self {
        self.iterations = Some(iterations);
        self
    }

    /// Reads a single `{prefix}{rate}` log per rate.
    pub fn single_run(&mut self) -> &mut Self {
        self.iterations = None;
        self
    }

    pub fn percentile(&mut self, percentile: impl Into<String>) -> &mut Self {
        self.percentile = percentile.into();
        self
    }

    pub fn variant(&mut self, variant: LatencyVariant) -> &mut Self {
        self.variant = variant;
        self
    }

    pub fn trim(&mut self, trim: f64) -> &mut Self {
        self.trim = trim;
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn rates(&self) -> &[u64] {
        &self.rates
    }

    pub fn iteration_count(&self) -> Option<usize> {
        self.iterations
    }

    pub fn percentile_label(&self) -> &str {
        &self.percentile
    }

    pub fn latency_variant(&self) -> LatencyVariant {
        self.variant
    }

    pub fn trim_proportion(&self) -> f64 {
        self.trim
    }

    /// Log files of a single rate, in iteration order. Each entry carries the
    /// iteration number (1-based), or `None` in the single-run layout.
    pub fn rate_files(&self, rate: u64) -> Vec<(Option<usize>, PathBuf)> {
        let base = format!("{}{}", self.prefix, rate);
        match self.iterations {
            Some(iterations) => (1..=iterations)
                .map(|iteration| {
                    let path = PathBuf::from(format!("{}_{}", base, iteration));
                    (Some(iteration), path)
                })
                .collect(),
            None => vec![(None, PathBuf::from(base))],
        }
    }

    /// All log files to be read, ordered by rate and then by iteration.
    pub fn file_names(&self) -> Vec<(u64, Option<usize>, PathBuf)> {
        self.rates
            .iter()
            .flat_map(|&rate| {
                self.rate_files(rate)
                    .into_iter()
                    .map(move |(iteration, path)| (rate, iteration, path))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AggregateConfig::new("/tmp/res_", vec![1, 10]);
        assert_eq!(config.iteration_count(), Some(5));
        assert_eq!(config.percentile_label(), "99.000");
        assert_eq!(config.latency_variant(), LatencyVariant::Corrected);
        assert_eq!(config.trim_proportion(), 0.2);
    }

    #[test]
    fn iteration_file_names() {
        let mut config = AggregateConfig::new("/tmp/res_", vec![25, 50]);
        config.iterations(2);
        let names: Vec<_> = config
            .file_names()
            .into_iter()
            .map(|(rate, iteration, path)| {
                (rate, iteration, path.display().to_string())
            })
            .collect();
        assert_eq!(
            names,
            vec![
                (25, Some(1), String::from("/tmp/res_25_1")),
                (25, Some(2), String::from("/tmp/res_25_2")),
                (50, Some(1), String::from("/tmp/res_50_1")),
                (50, Some(2), String::from("/tmp/res_50_2")),
            ]
        );
    }

    #[test]
    fn single_run_file_names() {
        let mut config = AggregateConfig::new("/tmp/res_", vec![100, 200]);
        config.single_run();
        let names: Vec<_> = config
            .file_names()
            .into_iter()
            .map(|(_, iteration, path)| (iteration, path))
            .collect();
        assert_eq!(
            names,
            vec![
                (None, PathBuf::from("/tmp/res_100")),
                (None, PathBuf::from("/tmp/res_200")),
            ]
        );
    }

    #[test]
    fn json_roundtrip() {
        let mut config = AggregateConfig::new("res_", vec![1, 2, 3]);
        config
            .percentile("99.999")
            .variant(LatencyVariant::Uncorrected)
            .single_run();
        let json = serde_json::to_string(&config).unwrap();
        let back: AggregateConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
