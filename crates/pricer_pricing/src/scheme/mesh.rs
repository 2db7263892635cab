//! Uniform time grid on [0, T].

use super::error::SchemeError;

/// `n_steps + 1` equally spaced points on `[0, T]`.
///
/// The first point is exactly `0` and the last exactly `T`; interior points are
/// `i * dt`, so accumulated round-off never shifts the endpoint.
///
/// # Examples
/// ```
/// use pricer_pricing::scheme::TimeMesh;
///
/// let mesh = TimeMesh::new(0.25, 1000).unwrap();
/// assert_eq!(mesh.len(), 1001);
/// assert_eq!(mesh.points()[0], 0.0);
/// assert_eq!(mesh.points()[1000], 0.25);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TimeMesh {
    points: Vec<f64>,
    dt: f64,
}

impl TimeMesh {
    /// Builds the mesh.
    ///
    /// # Errors
    ///
    /// [`SchemeError::InvalidStepCount`] for `n_steps == 0`,
    /// [`SchemeError::NonPositiveMaturity`] for `maturity <= 0` or non-finite.
    pub fn new(maturity: f64, n_steps: usize) -> Result<Self, SchemeError> {
        if n_steps == 0 {
            return Err(SchemeError::InvalidStepCount(n_steps));
        }
        if !maturity.is_finite() || maturity <= 0.0 {
            return Err(SchemeError::NonPositiveMaturity { maturity });
        }

        let dt = maturity / n_steps as f64;
        let mut points: Vec<f64> = (0..=n_steps).map(|i| i as f64 * dt).collect();
        points[n_steps] = maturity;

        Ok(Self { points, dt })
    }

    /// Step size `T / n_steps`.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Number of steps (one less than the number of points).
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.points.len() - 1
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a valid mesh has at least two points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Final time T.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.points[self.points.len() - 1]
    }

    /// Grid points.
    #[inline]
    pub fn points(&self) -> &[f64] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_mesh_endpoints() {
        let mesh = TimeMesh::new(0.25, 1000).unwrap();
        assert_eq!(mesh.len(), 1001);
        assert_eq!(mesh.n_steps(), 1000);
        assert_eq!(mesh.points()[0], 0.0);
        assert_eq!(mesh.maturity(), 0.25);
        assert_relative_eq!(mesh.dt(), 0.00025, epsilon = 1e-18);
    }

    #[test]
    fn test_single_step_mesh() {
        let mesh = TimeMesh::new(1.0, 1).unwrap();
        assert_eq!(mesh.points(), &[0.0, 1.0]);
    }

    #[test]
    fn test_mesh_rejects_zero_steps() {
        assert_eq!(
            TimeMesh::new(1.0, 0),
            Err(SchemeError::InvalidStepCount(0))
        );
    }

    #[test]
    fn test_mesh_rejects_non_positive_maturity() {
        assert!(matches!(
            TimeMesh::new(0.0, 10),
            Err(SchemeError::NonPositiveMaturity { .. })
        ));
        assert!(matches!(
            TimeMesh::new(-1.0, 10),
            Err(SchemeError::NonPositiveMaturity { .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_mesh_uniform(maturity in 0.01_f64..30.0, n_steps in 1_usize..2000) {
            let mesh = TimeMesh::new(maturity, n_steps).unwrap();
            let dt = maturity / n_steps as f64;

            prop_assert_eq!(mesh.len(), n_steps + 1);
            prop_assert_eq!(mesh.points()[0], 0.0);
            prop_assert_eq!(mesh.points()[n_steps], maturity);
            for w in mesh.points().windows(2) {
                prop_assert!((w[1] - w[0] - dt).abs() <= 1e-9 * maturity.max(1.0));
            }
        }
    }
}
