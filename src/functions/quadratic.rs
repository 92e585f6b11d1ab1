/// f(x) = Σ xᵢ²
pub(super) fn compute(x: &[f64]) -> f64 {
    x.iter().map(|xi| xi * xi).sum()
}

/// ∇f(x) = 2x
pub(super) fn gradient_into(x: &[f64], grad: &mut [f64]) {
    for (g, xi) in grad.iter_mut().zip(x) {
        *g = 2. * xi;
    }
}
