//! 2D geometry primitives for hull construction.
//!
//! Purpose
//! - One orientation predicate (`cross`) and one tolerance policy (`HullCfg`)
//!   shared by the base case, the merger, the oracle and the `Hull` queries.
//! - Keep index arithmetic on circular vertex lists in one place (`Ring`).
//!
//! Conventions
//! - Points are `nalgebra::Point2<f64>` (`Pt2`); differences are `Vector2`.
//! - Hull vertex lists are counterclockwise.
//!
//! Code cross-refs: `hull::{base, driver, merge, oracle}`

pub mod kernel;
pub mod preprocess;
pub mod rand;
pub mod ring;
mod types;

pub use kernel::{
    approx_eq, cmp_xy, cross, distance, orientation, projects_inside, Orientation, Pt2,
};
pub use preprocess::sort_dedup;
pub use ring::Ring;
pub use types::{HullCfg, Hs2};
