// src/debug/visualization/mod.rs

pub mod svg; // Draufsicht als SVG-Datei

pub use self::svg::{render_overlap_svg, render_track_svg, write_track_svg};
