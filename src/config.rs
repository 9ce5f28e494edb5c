use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::band::REFERENCE;
use crate::error::Result;

// ---------------------------------------------------------------------------
// Calculator options
// ---------------------------------------------------------------------------

/// Constructor options for [`crate::Octave`].
///
/// `interval` and `fmin`/`fmax` are alternatives; supplying both is rejected
/// when the calculator is built, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OctaveConfig {
    #[serde(default = "default_fraction")]
    pub fraction: f64,

    #[serde(default)]
    pub interval: Option<Vec<f64>>,

    #[serde(default)]
    pub fmin: Option<f64>,

    #[serde(default)]
    pub fmax: Option<f64>,

    /// One band per interval element instead of a contiguous range.
    #[serde(default)]
    pub unique: bool,

    #[serde(default = "default_reference")]
    pub reference: f64,
}

fn default_fraction() -> f64 { 1.0 }
fn default_reference() -> f64 { REFERENCE }

impl Default for OctaveConfig {
    fn default() -> Self {
        Self {
            fraction: default_fraction(),
            interval: None,
            fmin: None,
            fmax: None,
            unique: false,
            reference: default_reference(),
        }
    }
}

impl OctaveConfig {
    pub fn fraction(mut self, fraction: f64) -> Self {
        self.fraction = fraction;
        self
    }

    pub fn interval(mut self, interval: impl Into<Vec<f64>>) -> Self {
        self.interval = Some(interval.into());
        self
    }

    pub fn fmin(mut self, fmin: f64) -> Self {
        self.fmin = Some(fmin);
        self
    }

    pub fn fmax(mut self, fmax: f64) -> Self {
        self.fmax = Some(fmax);
        self
    }

    pub fn range(self, fmin: f64, fmax: f64) -> Self {
        self.fmin(fmin).fmax(fmax)
    }

    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    pub fn reference(mut self, reference: f64) -> Self {
        self.reference = reference;
        self
    }

    // -----------------------------------------------------------------------
    // JSON loading
    // -----------------------------------------------------------------------

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        info!("octave config: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OctaveError;

    #[test]
    fn test_defaults_from_empty_object() {
        let cfg = OctaveConfig::from_json("{}").unwrap();
        assert_eq!(cfg, OctaveConfig::default());
        assert!((cfg.fraction - 1.0).abs() < 1e-12);
        assert!((cfg.reference - 1000.0).abs() < 1e-12);
        assert!(!cfg.unique);
        assert!(cfg.interval.is_none() && cfg.fmin.is_none() && cfg.fmax.is_none());
    }

    #[test]
    fn test_partial_json() {
        let cfg = OctaveConfig::from_json(r#"{"fraction": 3, "interval": [1000, 2000], "unique": true}"#)
            .unwrap();
        assert_eq!(cfg, OctaveConfig::default().fraction(3.0).interval([1000.0, 2000.0]).unique(true));
    }

    #[test]
    fn test_json_round_trip() {
        let cfg = OctaveConfig::default().fraction(6.0).range(20.0, 20_000.0).reference(1000.0);
        let back = OctaveConfig::from_json(&cfg.to_json().unwrap()).unwrap();
        assert_eq!(cfg, back);
    }

    #[test]
    fn test_malformed_json() {
        let err = OctaveConfig::from_json(r#"{"fraction": "third"}"#).unwrap_err();
        assert!(matches!(err, OctaveError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("octave-bands-missing-config.json");
        let err = OctaveConfig::from_path(&path).unwrap_err();
        assert!(matches!(err, OctaveError::Io(_)));
    }

    #[test]
    fn test_from_path() {
        let path = std::env::temp_dir().join(format!("octave-bands-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"fmin": 63.0, "fmax": 8000.0}"#).unwrap();
        let cfg = OctaveConfig::from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(cfg.fmin, Some(63.0));
        assert_eq!(cfg.fmax, Some(8000.0));
    }
}
