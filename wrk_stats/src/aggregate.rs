use crate::config::AggregateConfig;
use crate::log::LogRecord;
use crate::series::{AggregatedPoint, Series};
use crate::stats;
use color_eyre::eyre::WrapErr;
use color_eyre::Report;

/// Reads every log of `config` and reduces each request rate to one point:
/// the trimmed mean of the iteration latencies and their (untrimmed)
/// standard deviation. Fails on the first unreadable log.
pub fn aggregate(
    config: &AggregateConfig,
    label: impl Into<String>,
) -> Result<Series, Report> {
    let mut series = Series::new(label);
    tracing::info!(
        "aggregating {:?}: {} rates from {}",
        series.label(),
        config.rates().len(),
        config.prefix()
    );

    for &rate in config.rates() {
        let point = aggregate_rate(config, rate, series.label())
            .wrap_err_with(|| format!("aggregate rate {}", rate))?;
        series.push(point);
    }
    Ok(series)
}

fn aggregate_rate(
    config: &AggregateConfig,
    rate: u64,
    label: &str,
) -> Result<AggregatedPoint, Report> {
    let files = config.rate_files(rate);
    let mut latencies = Vec::with_capacity(files.len());

    for (iteration, path) in files {
        let record = LogRecord::load(
            &path,
            config.percentile_label(),
            config.latency_variant(),
        )?;
        let line = diagnostic(rate, &record.throughput, label, iteration);
        println!("{}", line);
        tracing::debug!(
            "{}: p{} = {}ms",
            path.display(),
            config.percentile_label(),
            record.latency
        );
        latencies.push(record.latency);
    }

    let mean_latency = stats::trim_mean(&latencies, config.trim_proportion())?;
    let std_latency = stats::stddev(&latencies)?;
    Ok(AggregatedPoint {
        request_rate: rate,
        mean_latency,
        std_latency,
    })
}

/// The line printed for every log read, with the rate asked for and the
/// rate wrk2 achieved.
pub fn diagnostic(
    rate: u64,
    throughput: &str,
    label: &str,
    iteration: Option<usize>,
) -> String {
    match iteration {
        Some(iteration) => format!(
            "Desired RPS - {}, Real RPS: {} ({}) [iteration {}]",
            rate, throughput, label, iteration
        ),
        None => format!(
            "Desired RPS - {}, Real RPS: {} ({})",
            rate, throughput, label
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn write_log(dir: &Path, name: &str, latency: &str) {
        let text = format!(
            " 99.000%  {}\n 99.000%  0.10ms\nRequests/sec:     42.00\n",
            latency
        );
        std::fs::write(dir.join(name), text).unwrap();
    }

    #[test]
    fn diagnostic_line() {
        assert_eq!(
            diagnostic(50, "49.50", "mono", Some(3)),
            "Desired RPS - 50, Real RPS: 49.50 (mono) [iteration 3]"
        );
        assert_eq!(
            diagnostic(100, "99.60", "micr", None),
            "Desired RPS - 100, Real RPS: 99.60 (micr)"
        );
    }

    #[test]
    fn single_run_layout() {
        let dir = tempfile::tempdir().unwrap();
        write_log(dir.path(), "res_100", "2.00s");
        write_log(dir.path(), "res_200", "3.50ms");

        let prefix = format!("{}/res_", dir.path().display());
        let mut config = AggregateConfig::new(prefix, vec![100, 200]);
        config.single_run();

        let series = aggregate(&config, "Monolith").unwrap();
        assert_eq!(series.rates(), &[100, 200]);
        assert_eq!(series.latencies(), &[2000.0, 3.5]);
        assert_eq!(series.stddevs(), &[0.0, 0.0]);
    }

    #[test]
    fn missing_iteration_fails() {
        let dir = tempfile::tempdir().unwrap();
        for iteration in 1..=4 {
            write_log(dir.path(), &format!("res_10_{}", iteration), "1.00ms");
        }

        let prefix = format!("{}/res_", dir.path().display());
        let config = AggregateConfig::new(prefix, vec![10]);
        assert!(aggregate(&config, "Local").is_err());
    }
}
