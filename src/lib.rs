//! A weighted best-first pathfinder over 2D grids of traversal costs.
//!
//! The crate is built from two pieces: a generic, comparator-parameterized
//! [`BinaryHeap`] used as the open set, and a [`Pathfinder`] that runs either
//! a multi-source flood fill or a single-target search biased toward the
//! target by a squared-Euclidean heuristic, plus turn-compressed path
//! extraction.
//!
//! # Example
//!
//! ```rust
//! use glam::IVec2;
//! use grid_pathfinding::Pathfinder;
//!
//! let width = 5;
//! let height = 3;
//! let mut cost = vec![0.0f32; width * height];
//! for y in 0..height {
//!     for x in 0..width {
//!         if x == 0 || x == width - 1 || y == 0 || y == height - 1 {
//!             cost[y * width + x] = f32::INFINITY;
//!         }
//!     }
//! }
//!
//! let mut pf = Pathfinder::new(width, height, cost).unwrap();
//! assert!(pf.find_path(&[IVec2::new(1, 1)], IVec2::new(3, 1)));
//!
//! let mut path = Vec::new();
//! assert!(pf.get_path(IVec2::new(3, 1), &mut path));
//! assert_eq!(path, vec![IVec2::new(3, 1), IVec2::new(1, 1)]);
//! ```

pub mod error;
pub mod heap;
pub mod pathfinder;

pub use error::GridError;
pub use heap::{BinaryHeap, HeapComparator};
pub use pathfinder::Pathfinder;
