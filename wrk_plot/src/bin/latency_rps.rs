use color_eyre::eyre::WrapErr;
use color_eyre::Report;
use tracing_subscriber::EnvFilter;
use wrk_plot::datasets;
use wrk_plot::{ErrorBar, Naming};
use wrk_stats::{Series, Variant};

// folder where all plots will be stored (`None` means the working directory)
const PLOT_DIR: Option<&str> = None;
const OUTPUT_FILE: &str = "latency-rps.png";

fn main() -> Result<(), Report> {
    color_eyre::install()?;
    // init logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // set global style
    wrk_plot::set_global_style()?;

    let mono = load_series(Variant::Mono)?;
    let micr = load_series(Variant::Micr)?;

    wrk_plot::comparison_plot(
        &[(Variant::Mono, &mono), (Variant::Micr, &micr)],
        Naming::Architecture,
        ErrorBar::Without,
        PLOT_DIR,
        OUTPUT_FILE,
    )
}

fn load_series(variant: Variant) -> Result<Series, Report> {
    let config = datasets::sweep_config(variant);
    wrk_stats::aggregate(&config, variant.dir_suffix())
        .wrap_err_with(|| format!("load {:?}", variant))
}
