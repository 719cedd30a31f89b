use pyo3::prelude::*;
use pyo3::types::PyDict;

pub struct Axes<'a> {
    ax: &'a PyAny,
}

impl<'a> Axes<'a> {
    pub fn new(ax: &'a PyAny) -> Self {
        Self { ax }
    }

    pub fn set_xlabel(&self, label: &str) -> PyResult<()> {
        self.ax.call_method1("set_xlabel", (label,))?;
        Ok(())
    }

    pub fn set_ylabel(&self, label: &str) -> PyResult<()> {
        self.ax.call_method1("set_ylabel", (label,))?;
        Ok(())
    }

    pub fn set_xlim(&self, kwargs: Option<&PyDict>) -> PyResult<()> {
        self.ax.call_method("set_xlim", (), kwargs)?;
        Ok(())
    }

    pub fn set_ylim(&self, kwargs: Option<&PyDict>) -> PyResult<()> {
        self.ax.call_method("set_ylim", (), kwargs)?;
        Ok(())
    }

    pub fn grid(&self) -> PyResult<()> {
        self.ax.call_method0("grid")?;
        Ok(())
    }

    pub fn legend(&self, kwargs: Option<&PyDict>) -> PyResult<()> {
        self.ax.call_method("legend", (), kwargs)?;
        Ok(())
    }

    pub fn plot<X, Y>(
        &self,
        x: Vec<X>,
        y: Vec<Y>,
        kwargs: Option<&PyDict>,
    ) -> PyResult<()>
    where
        X: IntoPy<PyObject>,
        Y: IntoPy<PyObject>,
    {
        self.ax.call_method("plot", (x, y), kwargs)?;
        Ok(())
    }

    // `yerr` is expected in `kwargs`
    pub fn errorbar<X, Y>(
        &self,
        x: Vec<X>,
        y: Vec<Y>,
        kwargs: Option<&PyDict>,
    ) -> PyResult<()>
    where
        X: IntoPy<PyObject>,
        Y: IntoPy<PyObject>,
    {
        self.ax.call_method("errorbar", (x, y), kwargs)?;
        Ok(())
    }
}
