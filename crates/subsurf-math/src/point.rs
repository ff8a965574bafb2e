use crate::Point3;

/// Midpoint of the segment between two points.
pub fn midpoint(a: Point3, b: Point3) -> Point3 {
    (a + b) * 0.5
}

/// Arithmetic mean of a sequence of points.
///
/// Returns `Point3::ZERO` for an empty sequence; division otherwise follows
/// IEEE-754 (glam) semantics.
pub fn centroid<I>(points: I) -> Point3
where
    I: IntoIterator<Item = Point3>,
{
    let mut sum = Point3::ZERO;
    let mut count = 0u32;
    for p in points {
        sum += p;
        count += 1;
    }
    if count == 0 {
        return Point3::ZERO;
    }
    sum / f64::from(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::DVec3;

    #[test]
    fn test_midpoint() {
        let m = midpoint(DVec3::new(0.0, 0.0, 0.0), DVec3::new(2.0, 4.0, -6.0));
        assert_relative_eq!(m.x, 1.0);
        assert_relative_eq!(m.y, 2.0);
        assert_relative_eq!(m.z, -3.0);
    }

    #[test]
    fn test_centroid_of_square_corners() {
        let c = centroid([
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        ]);
        assert_relative_eq!(c.x, 0.5);
        assert_relative_eq!(c.y, 0.5);
        assert_relative_eq!(c.z, 0.0);
    }

    #[test]
    fn test_centroid_empty_is_zero() {
        assert_eq!(centroid(std::iter::empty::<Point3>()), Point3::ZERO);
    }

    #[test]
    fn test_vector_operators_come_from_glam() {
        let a = DVec3::new(1.0, 2.0, 3.0);
        let b = DVec3::new(4.0, 6.0, 8.0);
        assert_eq!(a + b, DVec3::new(5.0, 8.0, 11.0));
        assert_eq!(b - a, DVec3::new(3.0, 4.0, 5.0));
        assert_eq!(-a, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(a * 2.0, DVec3::new(2.0, 4.0, 6.0));
        assert_relative_eq!(a.distance(b), (9.0f64 + 16.0 + 25.0).sqrt());
    }
}
