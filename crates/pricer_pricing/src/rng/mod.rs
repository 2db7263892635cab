//! # Random Number Generation
//!
//! - [`PricerRng`]: seeded `StdRng` with Ziggurat normals
//! - [`NormalSource`]: the only interface the simulation loop needs
//! - [`SourceFactory`] / [`SeededStreams`]: one independent, reproducible
//!   stream per parallel worker
//!
//! ```rust
//! use pricer_pricing::rng::{NormalSource, PricerRng};
//!
//! let mut rng = PricerRng::from_seed(12345);
//! let z = rng.next_normal();
//! assert!(z.is_finite());
//! ```

mod prng;
mod source;

pub use prng::PricerRng;
pub use source::{NormalSource, SeededStreams, SourceFactory};
