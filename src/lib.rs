//! Octave and fractional-octave frequency bands.
//!
//! [`band`] holds the closed-form arithmetic (frequency ↔ band index, center
//! ↔ edges). [`Octave`] selects a set of bands from either an explicit list of
//! frequencies or a `fmin`/`fmax` range and derives centers, edges and
//! bandwidths on demand.

pub mod band;
pub mod config;
pub mod error;
pub mod octave;

pub use band::{
    band_of_frequency, covering_bands, frequency_of_band, lower_frequency, upper_frequency,
    REFERENCE,
};
pub use config::OctaveConfig;
pub use error::{OctaveError, Result};
pub use octave::{Band, Octave, Selection};

/// Install a `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Does nothing if a global subscriber is already set.
pub fn init_tracing() {
    // Err only means a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}
