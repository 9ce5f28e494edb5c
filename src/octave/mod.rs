mod table;

pub use table::Band;

use tracing::{debug, warn};

use crate::band::{
    band_of_frequency, band_range, bands_of_frequencies, frequencies_of_bands, lower_frequencies,
    upper_frequencies,
};
use crate::config::OctaveConfig;
use crate::error::{OctaveError, Result};

// ---------------------------------------------------------------------------
// Data model
// ---------------------------------------------------------------------------

/// Which frequencies drive the band set. Fixed when the calculator is built.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// Explicit frequencies; bounds are derived from their min/max.
    Interval(Vec<f64>),
    /// Explicit bounds.
    Range { fmin: f64, fmax: f64 },
}

impl Selection {
    fn mode(&self) -> &'static str {
        match self {
            Selection::Interval(_) => "interval",
            Selection::Range { .. } => "range",
        }
    }
}

/// Octave / fractional-octave band set calculator.
///
/// Every derived quantity (`n`, `center`, `lower`, `upper`, `bandwidth`) is
/// recomputed from the current configuration on each call.
#[derive(Debug, Clone, PartialEq)]
pub struct Octave {
    fraction: f64,
    reference: f64,
    selection: Selection,
    unique: bool,
}

fn check_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(OctaveError::config(format!("{name} must be positive and finite, got {value}")))
    }
}

/// Fold an interval with `pick`, returning NaN if any element is NaN.
fn fold_bound(interval: &[f64], init: f64, pick: fn(f64, f64) -> f64) -> f64 {
    if interval.iter().any(|f| f.is_nan()) {
        return f64::NAN;
    }
    interval.iter().copied().fold(init, pick)
}

fn check_interval(interval: &[f64]) -> Result<()> {
    if interval.is_empty() {
        return Err(OctaveError::config("interval is empty"));
    }
    Ok(())
}

impl Octave {
    pub fn new(config: OctaveConfig) -> Result<Self> {
        check_positive("fraction", config.fraction)?;
        check_positive("reference", config.reference)?;

        let selection = match (config.interval, config.fmin, config.fmax) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
                return Err(OctaveError::ConflictingSelection);
            }
            (Some(interval), None, None) => {
                check_interval(&interval)?;
                Selection::Interval(interval)
            }
            (None, Some(fmin), Some(fmax)) => Selection::Range { fmin, fmax },
            (None, Some(_), None) | (None, None, Some(_)) => {
                return Err(OctaveError::config("fmin and fmax must be given together"));
            }
            (None, None, None) => {
                return Err(OctaveError::config("either interval or fmin/fmax is required"));
            }
        };

        debug!(
            "octave: N={}, f0={}, mode={}, unique={}",
            config.fraction,
            config.reference,
            selection.mode(),
            config.unique
        );

        Ok(Self {
            fraction: config.fraction,
            reference: config.reference,
            selection,
            unique: config.unique,
        })
    }

    /// Contiguous bands between `fmin` and `fmax`.
    pub fn with_range(fraction: f64, fmin: f64, fmax: f64) -> Result<Self> {
        Self::new(OctaveConfig::default().fraction(fraction).range(fmin, fmax))
    }

    /// Bands spanning (or, with `unique`, matching) the given frequencies.
    pub fn with_interval(fraction: f64, interval: impl Into<Vec<f64>>, unique: bool) -> Result<Self> {
        Self::new(
            OctaveConfig::default()
                .fraction(fraction)
                .interval(interval)
                .unique(unique),
        )
    }

    /// Current options; `Octave::new(self.config())` rebuilds an equal calculator.
    pub fn config(&self) -> OctaveConfig {
        let base = OctaveConfig::default()
            .fraction(self.fraction)
            .reference(self.reference)
            .unique(self.unique);
        match &self.selection {
            Selection::Interval(interval) => base.interval(interval.clone()),
            Selection::Range { fmin, fmax } => base.range(*fmin, *fmax),
        }
    }

    // -----------------------------------------------------------------------
    // Configuration accessors
    // -----------------------------------------------------------------------

    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    pub fn set_fraction(&mut self, fraction: f64) -> Result<()> {
        check_positive("fraction", fraction)?;
        self.fraction = fraction;
        Ok(())
    }

    pub fn reference(&self) -> f64 {
        self.reference
    }

    pub fn set_reference(&mut self, reference: f64) -> Result<()> {
        check_positive("reference", reference)?;
        self.reference = reference;
        Ok(())
    }

    pub fn unique(&self) -> bool {
        self.unique
    }

    pub fn set_unique(&mut self, unique: bool) {
        self.unique = unique;
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn interval(&self) -> Option<&[f64]> {
        match &self.selection {
            Selection::Interval(interval) => Some(interval),
            Selection::Range { .. } => None,
        }
    }

    /// Replace the interval. Rejected when the calculator was built from bounds.
    pub fn set_interval(&mut self, interval: impl Into<Vec<f64>>) -> Result<()> {
        let interval = interval.into();
        match &mut self.selection {
            Selection::Interval(current) => {
                check_interval(&interval)?;
                *current = interval;
                Ok(())
            }
            Selection::Range { .. } => Err(self.locked("interval")),
        }
    }

    /// Lower bound: explicit `fmin`, or the smallest interval frequency.
    pub fn fmin(&self) -> f64 {
        match &self.selection {
            Selection::Interval(interval) => fold_bound(interval, f64::INFINITY, f64::min),
            Selection::Range { fmin, .. } => *fmin,
        }
    }

    /// Upper bound: explicit `fmax`, or the largest interval frequency.
    pub fn fmax(&self) -> f64 {
        match &self.selection {
            Selection::Interval(interval) => fold_bound(interval, f64::NEG_INFINITY, f64::max),
            Selection::Range { fmax, .. } => *fmax,
        }
    }

    /// Rejected when the calculator was built from an interval.
    pub fn set_fmin(&mut self, value: f64) -> Result<()> {
        match &mut self.selection {
            Selection::Range { fmin, .. } => {
                *fmin = value;
                Ok(())
            }
            Selection::Interval(_) => Err(self.locked("fmin")),
        }
    }

    /// Rejected when the calculator was built from an interval.
    pub fn set_fmax(&mut self, value: f64) -> Result<()> {
        match &mut self.selection {
            Selection::Range { fmax, .. } => {
                *fmax = value;
                Ok(())
            }
            Selection::Interval(_) => Err(self.locked("fmax")),
        }
    }

    fn locked(&self, field: &'static str) -> OctaveError {
        let mode = self.selection.mode();
        warn!("octave: rejected {} update, calculator is configured by {}", field, mode);
        OctaveError::Locked { field, mode }
    }

    // -----------------------------------------------------------------------
    // Derived views
    // -----------------------------------------------------------------------

    /// Band indices.
    ///
    /// With an interval and `unique`, one index per interval element in input
    /// order (duplicates kept). Otherwise the contiguous run from the band of
    /// `fmin` to the band of `fmax`, both rounded to the nearest band. Because
    /// of that rounding, a bound lying just past a band edge can still map to
    /// the neighbouring band; see [`crate::band::covering_bands`] for a run
    /// that always encloses the bounds.
    pub fn n(&self) -> Vec<f64> {
        match &self.selection {
            Selection::Interval(interval) if self.unique => {
                bands_of_frequencies(interval, self.fraction, self.reference)
            }
            _ => {
                let lo = band_of_frequency(self.fmin(), self.fraction, self.reference);
                let hi = band_of_frequency(self.fmax(), self.fraction, self.reference);
                if !lo.is_finite() || !hi.is_finite() {
                    warn!(
                        "octave: non-finite band bounds (fmin={}, fmax={}), no bands",
                        self.fmin(),
                        self.fmax()
                    );
                }
                band_range(lo, hi)
            }
        }
    }

    /// Center frequencies, same length and order as [`Octave::n`].
    pub fn center(&self) -> Vec<f64> {
        frequencies_of_bands(&self.n(), self.fraction, self.reference)
    }

    pub fn lower(&self) -> Vec<f64> {
        lower_frequencies(&self.center(), self.fraction)
    }

    pub fn upper(&self) -> Vec<f64> {
        upper_frequencies(&self.center(), self.fraction)
    }

    /// `upper − lower` per band.
    pub fn bandwidth(&self) -> Vec<f64> {
        self.upper()
            .iter()
            .zip(self.lower())
            .map(|(u, l)| u - l)
            .collect()
    }

    /// One row per selected band.
    pub fn bands(&self) -> Vec<Band> {
        self.n()
            .into_iter()
            .map(|n| Band::new(n, self.fraction, self.reference))
            .collect()
    }
}

impl TryFrom<OctaveConfig> for Octave {
    type Error = OctaveError;

    fn try_from(config: OctaveConfig) -> Result<Self> {
        Self::new(config)
    }
}
