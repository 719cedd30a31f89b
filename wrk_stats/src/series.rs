use color_eyre::eyre::{self, WrapErr};
use color_eyre::Report;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One reduced point of a latency vs. load curve.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct AggregatedPoint {
    #[serde(rename = "rate")]
    pub request_rate: u64,
    #[serde(rename = "latency_ms")]
    pub mean_latency: f64,
    #[serde(rename = "stddev_ms")]
    pub std_latency: f64,
}

/// A latency vs. load curve, kept as parallel vectors ready to be handed to
/// a plotting library.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "SeriesParts")]
pub struct Series {
    label: String,
    rates: Vec<u64>,
    latencies: Vec<f64>,
    stddevs: Vec<f64>,
}

// what's on disk, checked before it becomes a `Series`
#[derive(Deserialize)]
struct SeriesParts {
    label: String,
    rates: Vec<u64>,
    latencies: Vec<f64>,
    stddevs: Vec<f64>,
}

impl TryFrom<SeriesParts> for Series {
    type Error = Report;

    fn try_from(parts: SeriesParts) -> Result<Self, Self::Error> {
        Self::from_parts(
            parts.label,
            parts.rates,
            parts.latencies,
            parts.stddevs,
        )
    }
}

impl Series {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            rates: Vec::new(),
            latencies: Vec::new(),
            stddevs: Vec::new(),
        }
    }

    pub fn from_parts(
        label: impl Into<String>,
        rates: Vec<u64>,
        latencies: Vec<f64>,
        stddevs: Vec<f64>,
    ) -> Result<Self, Report> {
        eyre::ensure!(
            rates.len() == latencies.len() && rates.len() == stddevs.len(),
            "series parts with different lengths: {} rates, {} latencies, {} stddevs",
            rates.len(),
            latencies.len(),
            stddevs.len()
        );
        Ok(Self {
            label: label.into(),
            rates,
            latencies,
            stddevs,
        })
    }

    pub fn push(&mut self, point: AggregatedPoint) {
        self.rates.push(point.request_rate);
        self.latencies.push(point.mean_latency);
        self.stddevs.push(point.std_latency);
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn rates(&self) -> &[u64] {
        &self.rates
    }

    pub fn latencies(&self) -> &[f64] {
        &self.latencies
    }

    pub fn stddevs(&self) -> &[f64] {
        &self.stddevs
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = AggregatedPoint> + '_ {
        self.rates
            .iter()
            .zip(self.latencies.iter())
            .zip(self.stddevs.iter())
            .map(|((&request_rate, &mean_latency), &std_latency)| {
                AggregatedPoint {
                    request_rate,
                    mean_latency,
                    std_latency,
                }
            })
    }

    /// Writes one `rate,latency_ms,stddev_ms` row per point.
    pub fn to_csv(&self, path: impl AsRef<Path>) -> Result<(), Report> {
        let path = path.as_ref();
        let mut writer = csv::Writer::from_path(path)
            .wrap_err_with(|| format!("create csv {}", path.display()))?;
        for point in self.points() {
            writer.serialize(point).wrap_err("write csv row")?;
        }
        writer.flush().wrap_err("flush csv")?;
        Ok(())
    }

    pub fn from_csv(
        label: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, Report> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path)
            .wrap_err_with(|| format!("open csv {}", path.display()))?;
        let mut series = Self::new(label);
        for record in reader.deserialize() {
            let point: AggregatedPoint = record.wrap_err("read csv row")?;
            series.push(point);
        }
        Ok(series)
    }
}
