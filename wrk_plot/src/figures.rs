use crate::plot::axes::Axes;
use crate::plot::{PyPlot, RcParams};
use crate::{output_path, pydict, pytry, ErrorBar, Naming, PlotFmt, Range};
use color_eyre::eyre;
use color_eyre::Report;
use pyo3::prelude::*;
use wrk_stats::{Series, Variant};

// defaults for every figure
const FONT_SIZE: usize = 16;
const FIG_WIDTH: f64 = 10.0;
const FIG_HEIGHT: f64 = 4.0;
const PNG_DPI: usize = 300;

// axis labels
const RPS_LABEL: &str = "RPS";
const TAIL_LATENCY_LABEL: &str = "Tail Latency (ms)";
const P99_TAIL_LATENCY_LABEL: &str = "P99 Tail Latency (ms)";

pub fn set_global_style() -> Result<(), Report> {
    Python::with_gil(|py| -> Result<(), Report> {
        let params = pytry!(py, RcParams::new(py));
        let kwargs = pytry!(py, pydict!(py, ("font.size", FONT_SIZE)));
        pytry!(py, params.update(kwargs));
        Ok(())
    })
}

/// Single axes with one latency vs. load curve per variant, saved as png.
pub fn comparison_plot(
    curves: &[(Variant, &Series)],
    naming: Naming,
    error_bar: ErrorBar,
    plot_dir: Option<&str>,
    output_file: &str,
) -> Result<(), Report> {
    eyre::ensure!(!curves.is_empty(), "nothing to plot in {}", output_file);

    Python::with_gil(|py| -> Result<(), Report> {
        let plt = pytry!(py, PyPlot::new(py));
        let kwargs =
            pytry!(py, pydict!(py, ("figsize", (FIG_WIDTH, FIG_HEIGHT))));
        let (fig, ax) = pytry!(py, plt.subplots(Some(kwargs)));

        for (variant, series) in curves {
            add_curve(py, &ax, *variant, series, naming, error_bar)?;
        }

        pytry!(py, ax.set_xlabel(RPS_LABEL));
        pytry!(py, ax.set_ylabel(TAIL_LATENCY_LABEL));
        pytry!(py, ax.grid());

        let kwargs =
            pytry!(py, pydict!(py, ("ncol", 1), ("loc", "upper left")));
        pytry!(py, ax.legend(Some(kwargs)));
        pytry!(py, fig.tight_layout());

        let path = output_path(plot_dir, output_file)?;
        let kwargs = pytry!(
            py,
            pydict!(py, ("dpi", PNG_DPI), ("bbox_inches", "tight"))
        );
        pytry!(py, plt.savefig(&path, Some(kwargs)));
        tracing::info!("saved {}", path);

        pytry!(py, plt.close(fig));
        Ok(())
    })
}

/// Two stacked axes, read workload on top and write workload at the bottom,
/// saved both as `{output_stem}.pdf` and `{output_stem}.png`.
#[allow(clippy::too_many_arguments)]
pub fn read_write_plot(
    read_curves: &[(Variant, &Series)],
    write_curves: &[(Variant, &Series)],
    read_range: Range,
    write_range: Range,
    naming: Naming,
    error_bar: ErrorBar,
    plot_dir: Option<&str>,
    output_stem: &str,
) -> Result<(), Report> {
    eyre::ensure!(
        !read_curves.is_empty() && !write_curves.is_empty(),
        "nothing to plot in {}",
        output_stem
    );

    Python::with_gil(|py| -> Result<(), Report> {
        let plt = pytry!(py, PyPlot::new(py));
        let (fig, axes) = pytry!(py, plt.subplots_column(2, None));
        let kwargs = pytry!(py, pydict!(py, ("hspace", 0.25)));
        pytry!(py, fig.subplots_adjust(Some(kwargs)));

        let subplots = [(read_curves, read_range), (write_curves, write_range)];
        for (ax, (curves, range)) in axes.iter().zip(subplots) {
            for (variant, series) in curves {
                add_curve(py, ax, *variant, series, naming, error_bar)?;
            }
            let kwargs = pytry!(
                py,
                pydict!(py, ("ymin", range.y.0), ("ymax", range.y.1))
            );
            pytry!(py, ax.set_ylim(Some(kwargs)));
            let kwargs = pytry!(
                py,
                pydict!(py, ("xmin", range.x.0), ("xmax", range.x.1))
            );
            pytry!(py, ax.set_xlim(Some(kwargs)));
            pytry!(py, ax.grid());
        }

        // only the bottom axes shows the x label
        pytry!(py, axes[1].set_xlabel(RPS_LABEL));

        pytry!(py, fig.set_figwidth(FIG_WIDTH));
        pytry!(py, fig.set_figheight(FIG_HEIGHT));

        // shared y label, placed on the figure rather than on each axes
        let kwargs = pytry!(
            py,
            pydict!(py, ("ha", "center"), ("rotation", "vertical"))
        );
        pytry!(
            py,
            fig.text(0.04, 0.25, P99_TAIL_LATENCY_LABEL, Some(kwargs))
        );
        let kwargs = pytry!(py, pydict!(py, ("ha", "center")));
        pytry!(py, fig.text(0.175, 0.8, "Read", Some(kwargs)));
        let kwargs = pytry!(py, pydict!(py, ("ha", "center")));
        pytry!(py, fig.text(0.175, 0.37, "Write", Some(kwargs)));

        let kwargs =
            pytry!(py, pydict!(py, ("ncol", 1), ("loc", "upper center")));
        pytry!(py, axes[0].legend(Some(kwargs)));

        let pdf = output_path(plot_dir, &format!("{}.pdf", output_stem))?;
        let kwargs = pytry!(py, pydict!(py, ("bbox_inches", "tight")));
        pytry!(py, plt.savefig(&pdf, Some(kwargs)));
        tracing::info!("saved {}", pdf);

        let png = output_path(plot_dir, &format!("{}.png", output_stem))?;
        let kwargs = pytry!(
            py,
            pydict!(py, ("dpi", PNG_DPI), ("bbox_inches", "tight"))
        );
        pytry!(py, plt.savefig(&png, Some(kwargs)));
        tracing::info!("saved {}", png);

        pytry!(py, plt.close(fig));
        Ok(())
    })
}

fn add_curve(
    py: Python<'_>,
    ax: &Axes<'_>,
    variant: Variant,
    series: &Series,
    naming: Naming,
    error_bar: ErrorBar,
) -> Result<(), Report> {
    tracing::debug!(
        "{} ({:?}): {} points",
        series.label(),
        variant,
        series.len()
    );
    let kwargs = pytry!(
        py,
        pydict!(
            py,
            // set style
            ("linestyle", PlotFmt::linestyle(variant)),
            ("color", PlotFmt::color(variant)),
            ("marker", PlotFmt::marker(variant)),
            ("linewidth", PlotFmt::linewidth(variant)),
            ("label", naming.name(variant)),
        )
    );
    let x = series.rates().to_vec();
    let y = series.latencies().to_vec();
    match error_bar {
        ErrorBar::Stddev => {
            pytry!(py, kwargs.set_item("yerr", series.stddevs().to_vec()));
            pytry!(py, kwargs.set_item("capsize", 3));
            pytry!(py, ax.errorbar(x, y, Some(kwargs)));
        }
        ErrorBar::Without => {
            pytry!(py, ax.plot(x, y, Some(kwargs)));
        }
    }
    Ok(())
}
