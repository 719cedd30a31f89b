#![deny(rust_2018_idioms)]

pub mod datasets;
#[cfg(feature = "pyo3")]
mod figures;
mod fmt;
#[cfg(feature = "pyo3")]
pub mod plot;

// Re-exports.
#[cfg(feature = "pyo3")]
pub use figures::{comparison_plot, read_write_plot, set_global_style};
pub use fmt::PlotFmt;

use color_eyre::eyre::WrapErr;
use color_eyre::Report;
use wrk_stats::Variant;

#[macro_export]
macro_rules! pytry {
    ($py:expr, $e:expr) => {{
        match $e {
            Ok(value) => value,
            Err(e) => {
                // show the python traceback before giving up
                e.print($py);
                color_eyre::eyre::bail!("python error: {}", e);
            }
        }
    }};
}

#[macro_export]
macro_rules! pydict {
    ($py:expr, $($tup:expr),*) => {{
        let dict = pyo3::types::PyDict::new($py);
        #[allow(unused_mut)]
        let mut result: pyo3::PyResult<&pyo3::types::PyDict> = Ok(dict);
        $(
            let (key, value) = $tup;
            if let Err(e) = dict.set_item(key, value) {
                result = Err(e);
            }
        )*
        result
    }};
    ($py:expr, $($tup:expr,)*) => {{
        $crate::pydict![$py, $($tup),*]
    }};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorBar {
    // draw the standard deviation across iterations
    Stddev,
    Without,
}

/// Which legend names to use for the two variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Naming {
    Placement,
    Architecture,
}

impl Naming {
    pub fn name(&self, variant: Variant) -> &'static str {
        match self {
            Naming::Placement => PlotFmt::placement_name(variant),
            Naming::Architecture => PlotFmt::architecture_name(variant),
        }
    }
}

/// Axis ranges of one subplot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

/// Path of `file` inside `plot_dir` (created if needed), or `file` itself
/// when there's no plot directory.
pub fn output_path(
    plot_dir: Option<&str>,
    file: &str,
) -> Result<String, Report> {
    match plot_dir {
        Some(plot_dir) => {
            std::fs::create_dir_all(plot_dir).wrap_err_with(|| {
                format!("create plot directory {}", plot_dir)
            })?;
            Ok(format!("{}/{}", plot_dir, file))
        }
        None => Ok(file.to_string()),
    }
}
