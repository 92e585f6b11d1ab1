use std::f64::consts::{E, PI};

/// Lower clamp for the root-mean-square term of the gradient, avoids dividing by
/// zero at the origin.
const MIN_RMS: f64 = 1e-14;

/// f(x) = −20·exp(−0.2·√(Σxᵢ²/n)) − exp(Σcos(2πxᵢ)/n) + 20 + e
pub(super) fn compute(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    let (sum_sq, sum_cos) = sums(x);

    let term1 = -20. * (-0.2 * (sum_sq / n).sqrt()).exp();
    let term2 = -(sum_cos / n).exp();
    term1 + term2 + 20. + E
}

pub(super) fn gradient_into(x: &[f64], grad: &mut [f64]) {
    let n = x.len() as f64;
    let (sum_sq, sum_cos) = sums(x);

    let rms = (sum_sq / n).sqrt().max(MIN_RMS);
    let exp_rms = (-0.2 * rms).exp();
    let exp_cos = (sum_cos / n).exp();

    for (g, &xi) in grad.iter_mut().zip(x) {
        let d_rms = 4. * exp_rms * xi / (n * rms);
        let d_cos = exp_cos * 2. * PI * (2. * PI * xi).sin() / n;
        *g = d_rms + d_cos;
    }
}

fn sums(x: &[f64]) -> (f64, f64) {
    x.iter().fold((0., 0.), |(sq, cos), &xi| {
        (sq + xi * xi, cos + (2. * PI * xi).cos())
    })
}
