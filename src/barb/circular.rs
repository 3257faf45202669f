/// Mean of a set of angles in degrees, computed on the unit circle.
///
/// The sine and cosine components are averaged separately and recombined
/// with `atan2`, which keeps the result correct across the 0/360 wrap:
/// the mean of 350 and 10 is 0, not 180. Returns a value in [-180, 180];
/// an empty slice yields 0.0 (the binner never produces one).
pub fn circular_mean(degrees: &[f64]) -> f64 {
    if degrees.is_empty() {
        return 0.0;
    }

    let mut sum_sin = 0.0;
    let mut sum_cos = 0.0;
    for deg in degrees {
        let rad = deg.to_radians();
        sum_sin += rad.sin();
        sum_cos += rad.cos();
    }

    let n = degrees.len() as f64;
    (sum_sin / n).atan2(sum_cos / n).to_degrees()
}
