pub mod axes;
pub mod figure;

use axes::Axes;
use figure::Figure;
use pyo3::prelude::*;
use pyo3::types::PyDict;

pub struct PyPlot<'p> {
    plt: &'p PyModule,
}

impl<'p> PyPlot<'p> {
    pub fn new(py: Python<'p>) -> PyResult<Self> {
        let plt = PyModule::import(py, "matplotlib.pyplot")?;
        Ok(Self { plt })
    }

    pub fn subplots(
        &self,
        kwargs: Option<&PyDict>,
    ) -> PyResult<(Figure<'p>, Axes<'p>)> {
        // check that `ncols` and `nrows` was not set
        if let Some(kwargs) = kwargs {
            assert!(
                kwargs.get_item("ncols").is_none(),
                "ncols shouldn't be set here; use `PyPlot::subplots_column` instead"
            );
            assert!(
                kwargs.get_item("nrows").is_none(),
                "nrows shouldn't be set here; use `PyPlot::subplots_column` instead"
            );
        }
        let result = self.plt.call_method("subplots", (), kwargs)?;
        let (fig, ax): (&PyAny, &PyAny) = result.extract()?;
        Ok((Figure::new(fig), Axes::new(ax)))
    }

    /// Creates a figure with `nrows` axes stacked vertically.
    pub fn subplots_column(
        &self,
        nrows: usize,
        kwargs: Option<&PyDict>,
    ) -> PyResult<(Figure<'p>, Vec<Axes<'p>>)> {
        let result =
            self.plt.call_method("subplots", (nrows, 1), kwargs)?;
        let (fig, axes): (&PyAny, &PyAny) = result.extract()?;
        // with a single row matplotlib returns the axes itself
        let axes = if nrows == 1 {
            vec![Axes::new(axes)]
        } else {
            (0..nrows)
                .map(|row| axes.get_item(row).map(Axes::new))
                .collect::<PyResult<Vec<_>>>()?
        };
        Ok((Figure::new(fig), axes))
    }

    pub fn savefig(&self, path: &str, kwargs: Option<&PyDict>) -> PyResult<()> {
        self.plt.call_method("savefig", (path,), kwargs)?;
        Ok(())
    }

    pub fn close(&self, figure: Figure<'_>) -> PyResult<()> {
        self.plt.call_method1("close", (figure.fig(),))?;
        Ok(())
    }
}

/// Global matplotlib settings, i.e. `matplotlib.rcParams`.
pub struct RcParams<'p> {
    params: &'p PyAny,
}

impl<'p> RcParams<'p> {
    pub fn new(py: Python<'p>) -> PyResult<Self> {
        let matplotlib = PyModule::import(py, "matplotlib")?;
        let params = matplotlib.getattr("rcParams")?;
        Ok(Self { params })
    }

    pub fn update(&self, params: &PyDict) -> PyResult<()> {
        self.params.call_method1("update", (params,))?;
        Ok(())
    }
}
