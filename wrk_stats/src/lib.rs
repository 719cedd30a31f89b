#![deny(rust_2018_idioms)]

pub mod aggregate;
pub mod config;
pub mod latency;
pub mod log;
pub mod series;
pub mod stats;

// Re-exports.
pub use aggregate::aggregate;
pub use config::{AggregateConfig, LatencyVariant};
pub use log::LogRecord;
pub use series::{AggregatedPoint, Series};

use color_eyre::eyre::WrapErr;
use color_eyre::Report;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The two builds of the benchmarked application.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Deserialize,
    Serialize,
)]
pub enum Variant {
    // all services in a single process
    Mono,
    // one process per service, talking over the network
    Micr,
}

impl Variant {
    /// Name of the results directory suffix used by the benchmark scripts,
    /// e.g. `benchmark_sn_res_mono`.
    pub fn dir_suffix(&self) -> &str {
        match self {
            Variant::Mono => "mono",
            Variant::Micr => "micr",
        }
    }
}

pub fn serialize<T>(data: T, file: impl AsRef<Path>) -> Result<(), Report>
where
    T: serde::Serialize,
{
    // if the file does not exist it will be created, otherwise truncated
    let file = std::fs::File::create(file).wrap_err("serialize create file")?;
    // create a buf writer
    let buf = std::io::BufWriter::new(file);
    // and try to serialize
    serde_json::to_writer_pretty(buf, &data).wrap_err("serialize")?;
    Ok(())
}

pub fn deserialize<T>(file: impl AsRef<Path>) -> Result<T, Report>
where
    T: serde::de::DeserializeOwned,
{
    // open the file in read-only
    let file = std::fs::File::open(file).wrap_err("deserialize open file")?;
    // create a buf reader
    let buf = std::io::BufReader::new(file);
    // and try to deserialize
    let data = serde_json::from_reader(buf).wrap_err("deserialize")?;
    Ok(data)
}
