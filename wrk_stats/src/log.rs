use crate::config::LatencyVariant;
use crate::latency;
use color_eyre::eyre::{self, WrapErr};
use color_eyre::Report;
use std::path::Path;

const THROUGHPUT_MARKER: &str = "Requests/sec:";

/// What we extract from a single wrk2 log.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    /// Achieved request rate, as printed by wrk2. Only used for diagnostics.
    pub throughput: String,
    /// Percentile latency in milliseconds.
    pub latency: f64,
}

impl LogRecord {
    pub fn load(
        path: impl AsRef<Path>,
        percentile: &str,
        variant: LatencyVariant,
    ) -> Result<Self, Report> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("read log {}", path.display()))?;
        Self::parse(&text, percentile, variant)
            .wrap_err_with(|| format!("parse log {}", path.display()))
    }

    pub fn parse(
        text: &str,
        percentile: &str,
        variant: LatencyVariant,
    ) -> Result<Self, Report> {
        // the first line with the throughput marker wins
        let throughput = match text
            .lines()
            .find(|line| line.contains(THROUGHPUT_MARKER))
        {
            Some(line) => second_token(line)?.to_string(),
            None => eyre::bail!("no {:?} line found", THROUGHPUT_MARKER),
        };

        // wrk2 prints the corrected distribution before the uncorrected one;
        // only summary lines (e.g. ` 99.000%    8.11ms`) count, not values of
        // the detailed spectrum that happen to contain the label
        let label = format!("{}%", percentile);
        let latency_lines: Vec<_> = text
            .lines()
            .filter(|line| {
                line.split_whitespace().next() == Some(label.as_str())
            })
            .collect();
        let index = variant.line_index();
        let line = match latency_lines.get(index) {
            Some(line) => line,
            None => eyre::bail!(
                "{:?} latency needs {} lines with percentile {:?}, found {}",
                variant,
                index + 1,
                percentile,
                latency_lines.len()
            ),
        };
        let latency = latency::parse_latency(second_token(line)?)?;

        Ok(Self {
            throughput,
            latency,
        })
    }
}

fn second_token(line: &str) -> Result<&str, Report> {
    match line.split_whitespace().nth(1) {
        Some(token) => Ok(token),
        None => eyre::bail!("line {:?} has no second token", line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WRK2_OUTPUT: &str = "\
Running 30s test @ http://localhost:8080/wrk2-api/home-timeline/read
  2 threads and 2 connections
  Thread calibration: mean lat.: 3.521ms, rate sampling interval: 10ms
  Thread Stats   Avg      Stdev     Max   +/- Stdev
    Latency     3.74ms    1.29ms  15.02ms   81.20%
    Req/Sec    52.61     51.09   111.00     32.14%
  Latency Distribution (HdrHistogram - Recorded Latency)
 50.000%    3.51ms
 75.000%    4.31ms
 90.000%    5.23ms
 99.000%    8.11ms
 99.900%   13.50ms
 99.990%   15.02ms
 99.999%   15.02ms
100.000%   15.02ms

  Detailed Percentile spectrum:
       Value   Percentile   TotalCount 1/(1-Percentile)

       1.405     0.000000            1         1.00
       8.111     0.990000         2960       100.00
#[Mean    =        3.743, StdDeviation   =        1.290]
----------------------------------------------------------
  Uncorrected Latency (measured without taking delayed starts into account)
 50.000%    2.91ms
 75.000%    3.60ms
 90.000%    4.40ms
 99.000%    6.98ms
 99.900%   11.20ms
 99.990%   13.02ms
 99.999%   13.02ms
100.000%   13.02ms
----------------------------------------------------------
  2990 requests in 30.00s, 1.21MB read
Requests/sec:     99.66
Transfer/sec:     41.37KB
";

    #[test]
    fn corrected() {
        let record =
            LogRecord::parse(WRK2_OUTPUT, "99.000", LatencyVariant::Corrected)
                .unwrap();
        assert_eq!(record.throughput, "99.66");
        assert_eq!(record.latency, 8.11);
    }

    #[test]
    fn uncorrected() {
        let record = LogRecord::parse(
            WRK2_OUTPUT,
            "99.000",
            LatencyVariant::Uncorrected,
        )
        .unwrap();
        assert_eq!(record.latency, 6.98);
    }

    #[test]
    fn other_percentile() {
        let record =
            LogRecord::parse(WRK2_OUTPUT, "99.999", LatencyVariant::Corrected)
                .unwrap();
        assert_eq!(record.latency, 15.02);
    }

    #[test]
    fn single_distribution() {
        let text = "\
 99.000%    1.20s
Requests/sec:     10.00
";
        let record =
            LogRecord::parse(text, "99.000", LatencyVariant::Corrected)
                .unwrap();
        assert_eq!(record.latency, 1200.0);

        // there's no second line to pick
        let result =
            LogRecord::parse(text, "99.000", LatencyVariant::Uncorrected);
        assert!(result.is_err());
    }

    #[test]
    fn throughput_echoed_verbatim() {
        let text = "\
 99.000%    1.20ms
Requests/sec:     99.60
";
        let record =
            LogRecord::parse(text, "99.000", LatencyVariant::Corrected)
                .unwrap();
        assert_eq!(record.throughput, "99.60");

        // not a number, but it is only echoed
        let text = " 99.000%    1.20ms\nRequests/sec:     n/a\n";
        let record =
            LogRecord::parse(text, "99.000", LatencyVariant::Corrected)
                .unwrap();
        assert_eq!(record.throughput, "n/a");
    }

    #[test]
    fn spectrum_values_are_not_summary_lines() {
        // a detailed spectrum sits between the two summaries, with values
        // ending in the percentile label
        let text = "\
 99.000%    8.11ms
       Value   Percentile   TotalCount 1/(1-Percentile)
     199.000     0.999000         2987      1000.00
  Uncorrected Latency (measured without taking delayed starts into account)
 99.000%    6.98ms
Requests/sec:     99.66
";
        let record =
            LogRecord::parse(text, "99.000", LatencyVariant::Corrected)
                .unwrap();
        assert_eq!(record.latency, 8.11);
        let record =
            LogRecord::parse(text, "99.000", LatencyVariant::Uncorrected)
                .unwrap();
        assert_eq!(record.latency, 6.98);
    }

    #[test]
    fn missing_markers() {
        let no_throughput = " 99.000%    1.20ms\n";
        assert!(LogRecord::parse(
            no_throughput,
            "99.000",
            LatencyVariant::Corrected
        )
        .is_err());

        let no_percentile = "Requests/sec:     10.00\n";
        assert!(LogRecord::parse(
            no_percentile,
            "99.000",
            LatencyVariant::Corrected
        )
        .is_err());

        let no_token = "Requests/sec:\n 99.000%    1.20ms\n";
        assert!(LogRecord::parse(
            no_token,
            "99.000",
            LatencyVariant::Corrected
        )
        .is_err());
    }

    #[test]
    fn missing_file() {
        let result = LogRecord::load(
            "/nonexistent/res_1_1",
            "99.000",
            LatencyVariant::Corrected,
        );
        assert!(result.is_err());
    }
}
