//! Degree arithmetic shared by every component.

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let normalized = value.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Shortest arc between two longitudes, in [0, 180].
pub fn angular_separation(lon_a: f64, lon_b: f64) -> f64 {
    let diff = normalize_degrees(lon_a - lon_b);
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert_eq!(normalize_degrees(370.0), 10.0);
        assert!(normalize_degrees(-1e-15) < 360.0);
    }

    #[test]
    fn test_angular_separation_wraps() {
        assert_eq!(angular_separation(10.0, 350.0), 20.0);
        assert_eq!(angular_separation(100.0, 280.0), 180.0);
        assert_eq!(angular_separation(0.0, 0.0), 0.0);
    }
}
