use pyo3::prelude::*;
use pyo3::types::PyDict;

pub struct Figure<'a> {
    fig: &'a PyAny,
}

impl<'a> Figure<'a> {
    pub fn new(fig: &'a PyAny) -> Self {
        Self { fig }
    }

    pub fn fig(&self) -> &PyAny {
        self.fig
    }

    pub fn set_figwidth(&self, width: f64) -> PyResult<()> {
        self.fig.call_method1("set_figwidth", (width,))?;
        Ok(())
    }

    pub fn set_figheight(&self, height: f64) -> PyResult<()> {
        self.fig.call_method1("set_figheight", (height,))?;
        Ok(())
    }

    pub fn subplots_adjust(&self, kwargs: Option<&PyDict>) -> PyResult<()> {
        self.fig.call_method("subplots_adjust", (), kwargs)?;
        Ok(())
    }

    pub fn tight_layout(&self) -> PyResult<()> {
        self.fig.call_method0("tight_layout")?;
        Ok(())
    }

    // Text placed in figure coordinates, i.e. (0, 0) is the bottom left.
    pub fn text(
        &self,
        x: f64,
        y: f64,
        text: &str,
        kwargs: Option<&PyDict>,
    ) -> PyResult<()> {
        self.fig.call_method("text", (x, y, text), kwargs)?;
        Ok(())
    }
}
