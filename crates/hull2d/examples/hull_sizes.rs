//! Print hull sizes for a few sampled point clouds.
//!
//! Usage:
//!   cargo run -p hull2d --example hull_sizes -- square
//!   cargo run -p hull2d --example hull_sizes -- radial
//!
//! Uniform squares keep O(log n) vertices on average; radial clouds keep
//! most of their points.

use hull2d::prelude::*;

fn main() {
    let mode = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "square".to_string());
    for (i, n) in [100usize, 1_000, 10_000].into_iter().enumerate() {
        let tok = ReplayToken::new(2025, i as u64);
        let pts = match mode.as_str() {
            "square" => uniform_square(n, 1.0, tok),
            "radial" => radial(n, RadialCfg::default(), tok),
            _ => {
                eprintln!("usage: hull_sizes [square|radial]");
                return;
            }
        };
        match convex_hull(&pts) {
            Ok(h) => println!(
                "{mode} n={n}: vertices={}, area={:.4}, perimeter={:.4}",
                h.len(),
                h.area(),
                h.perimeter()
            ),
            Err(e) => eprintln!("{mode} n={n}: {e}"),
        }
    }
}
