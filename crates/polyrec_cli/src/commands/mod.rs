pub mod fit;
pub mod fit_json;

use tracing::warn;

use polyrec_engine::FitOptions;

use crate::config::PolyrecConfig;
use crate::input::TestCase;

/// Resolve the fit options for a loaded testcase.
///
/// Precedence: explicit flag, then `polyrec.toml`, then the input file's
/// `keys.k`, then built-in defaults.
pub(crate) fn resolve_options(
    testcase: &TestCase,
    points_flag: Option<usize>,
    precision_flag: Option<usize>,
) -> FitOptions {
    let config = PolyrecConfig::load_if_present();
    let defaults = FitOptions::default();

    if let Some(n) = testcase.declared_n {
        if n != testcase.samples.len() {
            warn!(
                "testcase declares n = {n} but contains {} entries",
                testcase.samples.len()
            );
        }
    }

    FitOptions {
        points: points_flag
            .or(config.as_ref().map(|c| c.points))
            .or(testcase.declared_k)
            .unwrap_or(defaults.points),
        precision: precision_flag
            .or(config.as_ref().map(|c| c.precision))
            .unwrap_or(defaults.precision),
    }
}
