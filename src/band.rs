//! Band arithmetic on the base-2 frequency axis.
//!
//! All functions are pure and never validate their input. A non-positive
//! frequency makes `log2` return NaN (negative) or −inf (zero), and that value
//! flows through to the result instead of panicking.

use tracing::warn;

/// Default reference center frequency in Hz.
pub const REFERENCE: f64 = 1000.0;

/// Largest contiguous band run that will be generated (2^20 bands).
pub const MAX_BANDS: usize = 1 << 20;

/// Unrounded band position of `f`.
///
/// Formula:  x = (log2(f / f0) − 1/N) · N
#[inline]
fn band_position(f: f64, fraction: f64, reference: f64) -> f64 {
    ((f / reference).log2() - 1.0 / fraction) * fraction
}

/// Nearest band index `n` for frequency `f`.
///
/// Ties round half to even, so a position of exactly 0.5 maps to band 0 and
/// 1.5 maps to band 2. The result is whole-number valued, or non-finite when
/// `f <= 0`.
#[inline]
pub fn band_of_frequency(f: f64, fraction: f64, reference: f64) -> f64 {
    band_position(f, fraction, reference).round_ties_even()
}

/// Center frequency of band `n`.
///
/// Formula:  fc = f0 · 10^(3 / 10N) · 2^(n / N)
#[inline]
pub fn frequency_of_band(n: f64, fraction: f64, reference: f64) -> f64 {
    reference * 10.0_f64.powf(3.0 / (10.0 * fraction)) * 2.0_f64.powf(n / fraction)
}

/// Upper band edge:  fu = fc · 2^(+1 / 2N)
#[inline]
pub fn upper_frequency(center: f64, fraction: f64) -> f64 {
    center * 2.0_f64.powf(1.0 / (2.0 * fraction))
}

/// Lower band edge:  fl = fc · 2^(−1 / 2N)
#[inline]
pub fn lower_frequency(center: f64, fraction: f64) -> f64 {
    center * 2.0_f64.powf(-1.0 / (2.0 * fraction))
}

pub fn bands_of_frequencies(freq: &[f64], fraction: f64, reference: f64) -> Vec<f64> {
    freq.iter()
        .map(|&f| band_of_frequency(f, fraction, reference))
        .collect()
}

pub fn frequencies_of_bands(n: &[f64], fraction: f64, reference: f64) -> Vec<f64> {
    n.iter()
        .map(|&b| frequency_of_band(b, fraction, reference))
        .collect()
}

pub fn upper_frequencies(center: &[f64], fraction: f64) -> Vec<f64> {
    center.iter().map(|&c| upper_frequency(c, fraction)).collect()
}

pub fn lower_frequencies(center: &[f64], fraction: f64) -> Vec<f64> {
    center.iter().map(|&c| lower_frequency(c, fraction)).collect()
}

/// Contiguous run of band indices `lo..=hi`.
///
/// Empty when either end is non-finite, `lo > hi`, or the run would exceed
/// [`MAX_BANDS`].
pub(crate) fn band_range(lo: f64, hi: f64) -> Vec<f64> {
    if !lo.is_finite() || !hi.is_finite() || lo > hi {
        return Vec::new();
    }
    let span = hi - lo;
    if span >= MAX_BANDS as f64 {
        warn!("band range {}..={} exceeds {} bands, no bands", lo, hi, MAX_BANDS);
        return Vec::new();
    }
    let count = span as usize + 1;
    (0..count).map(|k| lo + k as f64).collect()
}

/// Band indices whose bands together cover `[fmin, fmax]` completely.
///
/// Unlike nearest-band rounding, the low end is floored and the high end is
/// ceiled, so a frequency sitting just past a band edge is never left out.
/// The price is at most one extra band at either end.
pub fn covering_bands(fmin: f64, fmax: f64, fraction: f64, reference: f64) -> Vec<f64> {
    let lo = band_position(fmin, fraction, reference).floor();
    let hi = band_position(fmax, fraction, reference).ceil();
    band_range(lo, hi)
}
