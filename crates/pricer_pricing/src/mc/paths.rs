//! Single-path generation.

use pricer_models::models::StochasticModel;

use crate::rng::NormalSource;
use crate::scheme::DiscretisationScheme;

/// Overwrites `path` with one trajectory.
///
/// `path[0]` is the model's initial value and
/// `path[j] = next(path[j-1], mesh[j-1], dt, z1, z2)` with two fresh draws per
/// step.
///
/// # Buffer length
///
/// Size `path` to `scheme.mesh().len()` (`n_steps + 1`). A shorter buffer is
/// a truncated trajectory: only `path.len() - 1` steps are simulated and only
/// that many pairs of draws are taken from `source`. Entries past the mesh in
/// a longer buffer are left untouched. An empty buffer draws nothing.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use pricer_models::models::{GbmSde, ModelParameters};
/// use pricer_pricing::mc::fill_path;
/// use pricer_pricing::rng::PricerRng;
/// use pricer_pricing::scheme::{DiscretisationScheme, ExplicitEuler};
///
/// let model = Arc::new(GbmSde::new(ModelParameters::default()).unwrap());
/// let scheme = ExplicitEuler::new(model, 50).unwrap();
/// let mut rng = PricerRng::from_seed(1);
/// let mut path = vec![0.0; scheme.mesh().len()];
///
/// fill_path(&scheme, &mut rng, &mut path);
/// assert_eq!(path[0], 100.0);
/// ```
#[inline]
pub fn fill_path<S, R>(scheme: &S, source: &mut R, path: &mut [f64])
where
    S: DiscretisationScheme + ?Sized,
    R: NormalSource + ?Sized,
{
    let Some(first) = path.first_mut() else {
        return;
    };
    *first = scheme.model().initial_value();

    let dt = scheme.dt();
    let mesh = scheme.mesh().points();
    for j in 1..path.len().min(mesh.len()) {
        let z1 = source.next_normal();
        let z2 = source.next_normal();
        path[j] = scheme.next(path[j - 1], mesh[j - 1], dt, z1, z2);
    }
}
