use color_eyre::eyre::WrapErr;
use color_eyre::Report;
use tracing_subscriber::EnvFilter;
use wrk_plot::datasets::{self, Workload};
use wrk_plot::{ErrorBar, Naming, Range};
use wrk_stats::{Series, Variant};

// folder where all plots will be stored (`None` means the working directory)
const PLOT_DIR: Option<&str> = None;
const OUTPUT_STEM: &str = "communication-overhead";

const READ_RANGE: Range = Range {
    x: (0.0, 600.0),
    y: (0.0, 1000.0),
};
const WRITE_RANGE: Range = Range {
    x: (0.0, 300.0),
    y: (0.0, 1000.0),
};

fn main() -> Result<(), Report> {
    color_eyre::install()?;
    // init logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // set global style
    wrk_plot::set_global_style()?;

    println!("Number of conns - {}", datasets::nconns());
    let mono_read = load_series(Workload::Read, Variant::Mono)?;
    let micr_read = load_series(Workload::Read, Variant::Micr)?;
    let mono_write = load_series(Workload::Write, Variant::Mono)?;
    let micr_write = load_series(Workload::Write, Variant::Micr)?;

    // network first so that it's the first legend entry
    let read_curves = [(Variant::Micr, &micr_read), (Variant::Mono, &mono_read)];
    let write_curves =
        [(Variant::Micr, &micr_write), (Variant::Mono, &mono_write)];
    wrk_plot::read_write_plot(
        &read_curves,
        &write_curves,
        READ_RANGE,
        WRITE_RANGE,
        Naming::Placement,
        ErrorBar::Without,
        PLOT_DIR,
        OUTPUT_STEM,
    )
}

fn load_series(workload: Workload, variant: Variant) -> Result<Series, Report> {
    let config = datasets::workload_config(workload, variant);
    wrk_stats::aggregate(&config, variant.dir_suffix())
        .wrap_err_with(|| format!("load {:?} {}", variant, workload.name()))
}
