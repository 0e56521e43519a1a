// src/math/algorithms/mod.rs

pub mod convex_hull; // Gift Wrapping
pub mod smoothing; // Bézier, Chaikin

pub use convex_hull::{ConvexHullBuilder, convex_hull};
pub use smoothing::{BezierSmoother, ChaikinSmoother, PathSmoother, Smoothing};
