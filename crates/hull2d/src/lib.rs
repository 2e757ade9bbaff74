//! Planar convex hulls by divide and conquer.
//!
//! Layout
//! - `geom2`: point type, orientation kernel, tolerance config, circular
//!   indexing, preprocessing and random point clouds.
//! - `hull`: the public entry point, the recursive driver with its base case
//!   and tangent merge, the `Hull` value, and a monotone-chain cross-check.
//! - `error`: `HullError`, the only failure surface (invalid arguments).
//!
//! ```
//! use hull2d::prelude::*;
//!
//! let pts = [
//!     Pt2::new(0.0, 0.0),
//!     Pt2::new(1.0, 0.0),
//!     Pt2::new(1.0, 1.0),
//!     Pt2::new(0.0, 1.0),
//!     Pt2::new(0.5, 0.5),
//! ];
//! let hull = convex_hull(&pts).unwrap();
//! assert_eq!(hull.len(), 4);
//! assert_eq!(hull.area(), 1.0);
//! ```

pub mod error;
pub mod geom2;
pub mod hull;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{ErrorKind, HullError};
pub use geom2::{HullCfg, Pt2};
pub use hull::{convex_hull, convex_hull_with, Hull};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{ErrorKind, HullError};
    pub use crate::geom2::rand::{on_circle, radial, uniform_square, RadialCfg, ReplayToken};
    pub use crate::geom2::{cross, distance, HullCfg, Pt2};
    pub use crate::hull::oracle::{monotone_chain, monotone_chain_with};
    pub use crate::hull::{convex_hull, convex_hull_with, Hull};
}
