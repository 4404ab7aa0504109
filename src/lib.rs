//! Phong ray tracer
//!
//! Renders spheres lit by ambient, point and directional lights, with hard
//! shadows and recursive mirror reflections. Scenes are built in code or
//! loaded from YAML, and images are written as PNG, PPM or BMP.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod vector;
pub mod matrix;
pub mod color;
pub mod interval;
pub mod ray;
pub mod sphere;
pub mod light;
pub mod scene;
pub mod canvas;
pub mod render;
pub mod config;
pub mod output;
