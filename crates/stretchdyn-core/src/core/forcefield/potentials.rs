#[inline]
pub fn harmonic_stretch(dist: f64, r_e: f64, k: f64) -> f64 {
    let strain = dist - r_e;
    0.5 * k * strain * strain
}

#[inline]
pub fn harmonic_stretch_derivative(dist: f64, r_e: f64, k: f64) -> f64 {
    k * (dist - r_e)
}
