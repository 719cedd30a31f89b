use color_eyre::eyre;
use color_eyre::Report;

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> Result<f64, Report> {
    eyre::ensure!(!values.is_empty(), "mean of no values");
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (i.e. the variance is divided by `n`, not
/// by `n - 1`).
pub fn stddev(values: &[f64]) -> Result<f64, Report> {
    let mean = mean(values)?;
    let variance = values
        .iter()
        .map(|x| {
            let diff = mean - x;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64;
    Ok(variance.sqrt())
}

/// Mean after cutting `floor(proportion * n)` values from each end of the
/// sorted sample.
pub fn trim_mean(values: &[f64], proportion: f64) -> Result<f64, Report> {
    eyre::ensure!(!values.is_empty(), "trimmed mean of no values");
    eyre::ensure!(
        (0.0..0.5).contains(&proportion),
        "trim proportion {} outside [0, 0.5)",
        proportion
    );
    let count = values.len();
    let cut = (proportion * count as f64).floor() as usize;
    eyre::ensure!(
        2 * cut < count,
        "trim proportion {} too big for {} values",
        proportion,
        count
    );

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    mean(&sorted[cut..count - cut])
}
