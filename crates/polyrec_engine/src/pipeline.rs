//! Sample collection and polynomial recovery.

use tracing::{debug, warn};

use polyrec_math::{decode_in_base, log_in_base, solve_vandermonde, MathError};

use crate::error::EngineError;
use crate::options::FitOptions;
use crate::sample::{Sample, SampleLog};

/// Outcome of a completed fit.
#[derive(Debug, Clone, PartialEq)]
pub struct FitReport {
    /// Coefficients of the fitted polynomial, lowest degree first.
    pub coefficients: Vec<f64>,
    /// Per-sample transform records, in input order (all collected samples,
    /// not just the K used for the fit).
    pub sample_logs: Vec<SampleLog>,
    /// Number of leading samples the fit consumed.
    pub points_used: usize,
}

impl FitReport {
    pub fn degree(&self) -> usize {
        self.points_used.saturating_sub(1)
    }
}

/// Decode and log-transform one sample.
fn transform(sample: &Sample) -> Result<SampleLog, MathError> {
    let decoded: f64 = decode_in_base(&sample.digits, sample.base)?;
    let log_value = log_in_base(decoded, sample.base)?;
    Ok(SampleLog {
        base: sample.base,
        digits: sample.digits.clone(),
        log_value,
    })
}

/// Transform every sample, in order. Fails on the first bad sample,
/// carrying its position so the caller can point at the offending entry.
pub fn collect_samples(samples: &[Sample]) -> Result<Vec<SampleLog>, EngineError> {
    samples
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            let log = transform(sample)
                .map_err(|source| EngineError::Sample { index, source })?;
            debug!(
                "log base {} of {} = {}",
                log.base, log.digits, log.log_value
            );
            Ok(log)
        })
        .collect()
}

/// A sample dropped by [`collect_samples_lossy`], with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedSample {
    pub index: usize,
    pub error: MathError,
}

/// Transform every sample, skipping the ones that fail. Order of the
/// surviving logs still follows input order, so the implicit x-coordinates
/// shift over the gaps. Each skip is logged at warn level.
pub fn collect_samples_lossy(samples: &[Sample]) -> (Vec<SampleLog>, Vec<RejectedSample>) {
    let mut logs = Vec::with_capacity(samples.len());
    let mut rejected = Vec::new();
    for (index, sample) in samples.iter().enumerate() {
        match transform(sample) {
            Ok(log) => {
                debug!(
                    "log base {} of {} = {}",
                    log.base, log.digits, log.log_value
                );
                logs.push(log);
            }
            Err(error) => {
                warn!("skipping sample {index}: {error}");
                rejected.push(RejectedSample { index, error });
            }
        }
    }
    (logs, rejected)
}

/// Fit a polynomial of degree `points - 1` through the first `points`
/// y-samples, taking x = 1..=points in sequence order.
pub fn fit(y_samples: &[f64], points: usize) -> Result<Vec<f64>, EngineError> {
    if y_samples.len() < points {
        return Err(EngineError::InsufficientSamples {
            required: points,
            available: y_samples.len(),
        });
    }
    let xs: Vec<f64> = (1..=points).map(|i| i as f64).collect();
    let ys = &y_samples[..points];
    debug!("fitting degree {} polynomial through {points} points", points.saturating_sub(1));
    Ok(solve_vandermonde(&xs, ys)?)
}

/// Full pipeline: transform the samples and fit the configured number of
/// points.
pub fn run(samples: &[Sample], options: &FitOptions) -> Result<FitReport, EngineError> {
    let sample_logs = collect_samples(samples)?;
    let y_samples: Vec<f64> = sample_logs.iter().map(|log| log.log_value).collect();
    let coefficients = fit(&y_samples, options.points)?;
    Ok(FitReport {
        coefficients,
        sample_logs,
        points_used: options.points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_records_base_and_digits() {
        let logs = collect_samples(&[Sample::new(2, "111")]).unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].base, 2);
        assert_eq!(logs[0].digits, "111");
        // log2(7)
        assert!((logs[0].log_value - 7f64.log2()).abs() < 1e-12);
    }

    #[test]
    fn bad_sample_reports_its_index() {
        let samples = [Sample::new(10, "42"), Sample::new(2, "102")];
        let err = collect_samples(&samples).unwrap_err();
        assert!(matches!(err, EngineError::Sample { index: 1, .. }));
    }

    #[test]
    fn lossy_collection_skips_and_reports() {
        let samples = [
            Sample::new(10, "42"),
            Sample::new(2, "9"),
            Sample::new(16, "ff"),
        ];
        let (logs, rejected) = collect_samples_lossy(&samples);
        assert_eq!(logs.len(), 2);
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].index, 1);
    }

    #[test]
    fn fit_requires_enough_points() {
        let err = fit(&[1.0, 2.0], 3).unwrap_err();
        assert_eq!(
            err,
            EngineError::InsufficientSamples {
                required: 3,
                available: 2
            }
        );
    }

    #[test]
    fn fit_uses_only_the_first_k_samples() {
        // y = 1 + 2x at x = 1, 2; the third sample would break linearity
        // and must be ignored
        let coeffs = fit(&[3.0, 5.0, 100.0], 2).unwrap();
        assert!((coeffs[0] - 1.0).abs() < 1e-9);
        assert!((coeffs[1] - 2.0).abs() < 1e-9);
    }
}
