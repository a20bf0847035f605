//! Construction of the flow generator's eigen-spectrum.

use num_complex::Complex;
use serde::{Deserialize, Serialize};

/// Eigenvalue spectrum of the flow generator in real Jordan form.
///
/// The layout is fixed by construction: entries 0 and 1 are a purely
/// imaginary complex-conjugate pair (one 2x2 rotation block) and entries 2
/// and 3 are purely real (two scalar blocks). The closed-form exponential in
/// [`crate::flow`] relies on this layout, so the only way to obtain a
/// spectrum is through [`build_spectrum`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EigenSpectrum {
    entries: [Complex<f64>; 4],
}

impl EigenSpectrum {
    /// The four spectrum entries, conjugate pair first.
    pub fn entries(&self) -> &[Complex<f64>; 4] {
        &self.entries
    }
}

/// Builds the generator spectrum from remapped shape parameters.
///
/// `lambda` sets the ratio of the two real rates and `epsilon` the weight of
/// the rotational rate relative to them. Both normalization steps keep the
/// dominant eigenvalue magnitude at 1, so matrix entries stay bounded no
/// matter how extreme the remapped controls are.
pub fn build_spectrum(lambda: f64, epsilon: f64) -> EigenSpectrum {
    let mut k1 = lambda;
    let mut k2: f64 = 1.0;
    if k1.abs() > k2.abs() {
        k2 /= k1.abs();
        k1 /= k1.abs();
    } else {
        k1 /= k2.abs();
        k2 /= k2.abs();
    }

    let mut k0 = 1.0;
    if epsilon.abs() > 1.0 {
        k0 /= epsilon;
    } else {
        k1 *= epsilon;
        k2 *= epsilon;
    }

    EigenSpectrum {
        entries: [
            Complex::new(0.0, k0),
            Complex::new(0.0, -k0),
            Complex::new(k1, 0.0),
            Complex::new(k2, 0.0),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::build_spectrum;

    #[test]
    fn spectrum_keeps_the_fixed_block_layout() {
        let spectrum = build_spectrum(0.7, 1.3);
        let entries = spectrum.entries();
        assert_eq!(entries[0].re, 0.0);
        assert_eq!(entries[1].re, 0.0);
        assert_eq!(entries[0].im, -entries[1].im);
        assert!(entries[0].im != 0.0);
        assert_eq!(entries[2].im, 0.0);
        assert_eq!(entries[3].im, 0.0);
    }

    #[test]
    fn dominant_magnitude_is_one_across_the_epsilon_range() {
        for lambda in [-1000.0, -1.0, 0.0, 0.4, 3.0, 1000.0] {
            for epsilon in [-5.0, -1.0, 0.001, 0.5, 1.0, 7.0, 1e9] {
                let spectrum = build_spectrum(lambda, epsilon);
                let max = spectrum
                    .entries()
                    .iter()
                    .map(|entry| entry.norm())
                    .fold(0.0, f64::max);
                assert!(
                    (max - 1.0).abs() < 1e-12,
                    "dominant magnitude for lambda = {lambda}, epsilon = {epsilon} was {max}"
                );
            }
        }
    }

    #[test]
    fn large_lambda_normalizes_onto_the_first_real_rate() {
        let entries = *build_spectrum(1000.0, 1.0).entries();
        assert!((entries[2].re - 1.0).abs() < 1e-12);
        assert!((entries[3].re - 0.001).abs() < 1e-12);
    }

    #[test]
    fn negative_lambda_keeps_its_sign_through_normalization() {
        let entries = *build_spectrum(-4.0, 1.0).entries();
        assert!((entries[2].re + 1.0).abs() < 1e-12);
        assert!((entries[3].re - 0.25).abs() < 1e-12);
    }

    #[test]
    fn large_epsilon_shrinks_the_rotational_rate() {
        let entries = *build_spectrum(1.0, 5.0).entries();
        assert!((entries[0].im - 0.2).abs() < 1e-12);
        assert_eq!(entries[2].re, 1.0);
        assert_eq!(entries[3].re, 1.0);
    }

    #[test]
    fn small_epsilon_shrinks_the_real_rates() {
        let entries = *build_spectrum(1.0, 0.5).entries();
        assert_eq!(entries[0].im, 1.0);
        assert!((entries[2].re - 0.5).abs() < 1e-12);
        assert!((entries[3].re - 0.5).abs() < 1e-12);
    }

    #[test]
    fn infinity_sentinel_epsilon_leaves_real_rates_dominant() {
        let entries = *build_spectrum(1.0, crate::remap::EPSILON_INFINITY).entries();
        assert!(entries[0].im.abs() < 1e-8);
        assert_eq!(entries[2].re, 1.0);
        assert_eq!(entries[3].re, 1.0);
    }
}
