//! Closed-form evaluation of the matrix flow.

use nalgebra::Matrix4;

use crate::spectrum::EigenSpectrum;

/// Exact matrix exponential of the generator at time `t`.
///
/// Each spectrum entry `re + i*im` is exponentiated in closed form as
/// `exp(t*re) * (cos(t*im) + i*sin(t*im))`. The assembly walk then consumes
/// the entries in order: an entry whose exponential has a nonzero imaginary
/// component is taken together with its conjugate as one 2x2
/// scaling-rotation block (`m[i][i+1] = -im`, `m[i+1][i] = +im`), and a real
/// entry becomes a single diagonal scalar. No series truncation is involved,
/// so the result is exact up to floating-point rounding.
///
/// Precondition: the spectrum has the fixed layout produced by
/// [`crate::spectrum::build_spectrum`] -- one conjugate pair followed by two
/// real entries.
pub fn exponential_at(spectrum: &EigenSpectrum, t: f64) -> Matrix4<f64> {
    let mut exponentials = [(0.0, 0.0); 4];
    for (slot, entry) in exponentials.iter_mut().zip(spectrum.entries()) {
        let magnitude = (t * entry.re).exp();
        let angle = t * entry.im;
        *slot = (magnitude * angle.cos(), magnitude * angle.sin());
    }

    let mut matrix = Matrix4::zeros();
    let mut i = 0;
    while i < exponentials.len() {
        let (re, im) = exponentials[i];
        if im != 0.0 && i + 1 < exponentials.len() {
            matrix[(i, i)] = re;
            matrix[(i + 1, i + 1)] = re;
            matrix[(i, i + 1)] = -im;
            matrix[(i + 1, i)] = im;
            i += 2;
        } else {
            matrix[(i, i)] = re;
            i += 1;
        }
    }
    matrix
}
