/// f(x) = Σᵢ [100·(xᵢ₊₁ − xᵢ²)² + (1 − xᵢ)²] over adjacent pairs.
pub(super) fn compute(x: &[f64]) -> f64 {
    x.windows(2)
        .map(|pair| {
            let (xi, xn) = (pair[0], pair[1]);
            100. * (xn - xi * xi).powi(2) + (1. - xi).powi(2)
        })
        .sum()
}

/// Every pair contributes to both of its coordinates, so interior coordinates
/// accumulate two terms.
pub(super) fn gradient_into(x: &[f64], grad: &mut [f64]) {
    grad.fill(0.);

    for i in 0..x.len().saturating_sub(1) {
        let (xi, xn) = (x[i], x[i + 1]);
        let inner = xn - xi * xi;

        grad[i] += -400. * xi * inner - 2. * (1. - xi);
        grad[i + 1] += 200. * inner;
    }
}
