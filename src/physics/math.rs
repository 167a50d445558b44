use rand::Rng;

/// Scalar type for physics calculations (f64 for precision)
pub type Scalar = f64;

/// 2D vector type for positions, velocities, and forces
pub type Vector = bevy::math::DVec2;

/// Mass-weighted mean of two vectors.
///
/// Used for both the centre of mass and the momentum-conserving velocity of
/// a merger: `(m_a * a + m_b * b) / (m_a + m_b)`.
#[inline]
pub fn mass_weighted_mean(a: Vector, mass_a: Scalar, b: Vector, mass_b: Scalar) -> Vector {
    (a * mass_a + b * mass_b) / (mass_a + mass_b)
}

/// Uniformly distributed point inside the axis-aligned rectangle `[0, width] × [0, height]`.
pub fn random_point_in_rect<R: Rng + ?Sized>(rng: &mut R, width: Scalar, height: Scalar) -> Vector {
    Vector::new(
        rng.random_range(0.0..=width),
        rng.random_range(0.0..=height),
    )
}

/// Vector with each component uniform in `[-magnitude, magnitude]`.
pub fn random_component_vector<R: Rng + ?Sized>(rng: &mut R, magnitude: Scalar) -> Vector {
    if magnitude <= 0.0 {
        return Vector::ZERO;
    }

    Vector::new(
        rng.random_range(-magnitude..=magnitude),
        rng.random_range(-magnitude..=magnitude),
    )
}

#[cfg(test)]
mod math_tests {
    use super::*;
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    #[test]
    fn test_mass_weighted_mean_equal_masses_is_midpoint() {
        let mean = mass_weighted_mean(Vector::new(0.0, 0.0), 2.0, Vector::new(4.0, 2.0), 2.0);
        assert_eq!(mean, Vector::new(2.0, 1.0));
    }

    #[test]
    fn test_mass_weighted_mean_leans_toward_heavier() {
        let mean = mass_weighted_mean(Vector::new(0.0, 0.0), 3.0, Vector::new(4.0, 0.0), 1.0);
        assert!((mean.x - 1.0).abs() < 1e-12);
        assert_eq!(mean.y, 0.0);
    }

    #[test]
    fn test_random_point_in_rect_stays_inside() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..10_000 {
            let p = random_point_in_rect(&mut rng, 1280.0, 720.0);
            assert!((0.0..=1280.0).contains(&p.x), "x out of range: {}", p.x);
            assert!((0.0..=720.0).contains(&p.y), "y out of range: {}", p.y);
        }
    }

    #[test]
    fn test_random_component_vector_zero_magnitude() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(random_component_vector(&mut rng, 0.0), Vector::ZERO);
    }

    #[test]
    fn test_random_component_vector_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        for _ in 0..10_000 {
            let v = random_component_vector(&mut rng, 10.0);
            assert!(v.x.abs() <= 10.0 && v.y.abs() <= 10.0);
        }
    }
}
