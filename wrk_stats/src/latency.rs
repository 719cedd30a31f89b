use color_eyre::eyre::{self, WrapErr};
use color_eyre::Report;

const MICROS_PER_MILLI: f64 = 1_000.0;
const MILLIS_PER_SECOND: f64 = 1_000.0;
const MILLIS_PER_MINUTE: f64 = 60_000.0;
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Time units wrk2 may use when printing a latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatencyUnit {
    Micros,
    Millis,
    Seconds,
    Minutes,
    Hours,
}

impl LatencyUnit {
    /// Splits `token` into its numeric prefix and unit.
    // `ms` and `us` have to be checked before `s`, otherwise milliseconds
    // would be read as seconds.
    pub fn split(token: &str) -> Option<(&str, Self)> {
        if let Some(value) = token.strip_suffix("ms") {
            Some((value, LatencyUnit::Millis))
        } else if let Some(value) = token.strip_suffix("us") {
            Some((value, LatencyUnit::Micros))
        } else if let Some(value) = token.strip_suffix('s') {
            Some((value, LatencyUnit::Seconds))
        } else if let Some(value) = token.strip_suffix('m') {
            Some((value, LatencyUnit::Minutes))
        } else if let Some(value) = token.strip_suffix('h') {
            Some((value, LatencyUnit::Hours))
        } else {
            None
        }
    }

    pub fn to_millis(&self, value: f64) -> f64 {
        match self {
            LatencyUnit::Micros => value / MICROS_PER_MILLI,
            LatencyUnit::Millis => value,
            LatencyUnit::Seconds => value * MILLIS_PER_SECOND,
            LatencyUnit::Minutes => value * MILLIS_PER_MINUTE,
            LatencyUnit::Hours => value * MILLIS_PER_HOUR,
        }
    }
}

/// Parses a wrk2 latency token (e.g. `12.34ms`, `1.2s`, `3m`) into
/// milliseconds.
pub fn parse_latency(token: &str) -> Result<f64, Report> {
    let (value, unit) = match LatencyUnit::split(token) {
        Some(split) => split,
        None => eyre::bail!("latency {:?} has no known unit", token),
    };
    let value = value
        .parse::<f64>()
        .wrap_err_with(|| format!("parse latency value {:?}", token))?;
    Ok(unit.to_millis(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units() {
        assert_eq!(parse_latency("12.34ms").unwrap(), 12.34);
        assert_eq!(parse_latency("1.5s").unwrap(), 1500.0);
        assert_eq!(parse_latency("3m").unwrap(), 180_000.0);
        assert_eq!(parse_latency("2h").unwrap(), 7_200_000.0);
        assert_eq!(parse_latency("850.00us").unwrap(), 0.85);
    }

    #[test]
    fn millis_is_not_seconds() {
        assert_eq!(
            LatencyUnit::split("5.00ms"),
            Some(("5.00", LatencyUnit::Millis))
        );
        assert_eq!(
            LatencyUnit::split("5.00s"),
            Some(("5.00", LatencyUnit::Seconds))
        );
    }

    #[test]
    fn malformed() {
        // unknown unit
        assert!(parse_latency("12.34").is_err());
        assert!(parse_latency("12.34ns").is_err());
        // bad numeric prefix
        assert!(parse_latency("abcms").is_err());
        assert!(parse_latency("ms").is_err());
        assert!(parse_latency("").is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use quickcheck_macros::quickcheck;

    // values are printed the way wrk2 prints them: two decimal places
    fn token(value: u32, suffix: &str) -> (f64, String) {
        let value = value as f64 / 100.0;
        (value, format!("{:.2}{}", value, suffix))
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[quickcheck]
    fn millis_unchanged(value: u32) -> bool {
        let (value, token) = token(value, "ms");
        close(parse_latency(&token).unwrap(), value)
    }

    #[quickcheck]
    fn seconds_times_thousand(value: u32) -> bool {
        let (value, token) = token(value, "s");
        close(parse_latency(&token).unwrap(), value * 1000.0)
    }

    #[quickcheck]
    fn minutes_times_sixty_thousand(value: u32) -> bool {
        let (value, token) = token(value, "m");
        close(parse_latency(&token).unwrap(), value * 60_000.0)
    }
}
