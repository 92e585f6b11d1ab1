use std::f64::consts::PI;

const A: f64 = 10.;

/// f(x) = 10n + Σ(xᵢ² − 10·cos(2πxᵢ))
pub(super) fn compute(x: &[f64]) -> f64 {
    A * x.len() as f64
        + x.iter()
            .map(|xi| xi * xi - A * (2. * PI * xi).cos())
            .sum::<f64>()
}

/// ∂f/∂xᵢ = 2xᵢ + 20π·sin(2πxᵢ)
pub(super) fn gradient_into(x: &[f64], grad: &mut [f64]) {
    for (g, xi) in grad.iter_mut().zip(x) {
        *g = 2. * xi + 2. * PI * A * (2. * PI * xi).sin();
    }
}
