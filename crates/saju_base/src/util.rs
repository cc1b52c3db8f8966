//! Small angle helpers.

/// Normalize an angle in degrees to [0, 360).
#[inline]
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_both_ways() {
        assert_eq!(normalize_360(370.0), 10.0);
        assert_eq!(normalize_360(-30.0), 330.0);
        assert_eq!(normalize_360(360.0), 0.0);
    }

    #[test]
    fn tiny_negative_stays_in_range() {
        let r = normalize_360(-1e-18);
        assert!((0.0..360.0).contains(&r));
    }
}
