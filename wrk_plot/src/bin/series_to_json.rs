use color_eyre::eyre::WrapErr;
use color_eyre::Report;
use tracing_subscriber::EnvFilter;
use wrk_plot::datasets::{self, Workload};
use wrk_stats::Variant;

// folder where the aggregated series will be stored
const OUTPUT_DIR: &str = "series";

fn main() -> Result<(), Report> {
    color_eyre::install()?;
    // init logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    std::fs::create_dir_all(OUTPUT_DIR).wrap_err("create output directory")?;

    for workload in [Workload::Read, Workload::Write] {
        for variant in [Variant::Mono, Variant::Micr] {
            let config = datasets::workload_config(workload, variant);
            let series = wrk_stats::aggregate(&config, variant.dir_suffix())
                .wrap_err_with(|| {
                    format!("load {:?} {}", variant, workload.name())
                })?;

            let stem = format!(
                "{}/{}_{}",
                OUTPUT_DIR,
                variant.dir_suffix(),
                workload.name()
            );
            // keep the config next to the series it produced
            wrk_stats::serialize(&config, format!("{}.config.json", stem))
                .wrap_err("write config")?;
            wrk_stats::serialize(&series, format!("{}.json", stem))
                .wrap_err("write json")?;
            series
                .to_csv(format!("{}.csv", stem))
                .wrap_err("write csv")?;
            tracing::info!("saved {}.{{json,csv}}", stem);
        }
    }
    Ok(())
}
