//! The pixel output side of the glint ray tracer.
//!
//! # Overview
//!
//! Rendering produces [`Color`] values, floating-point RGB triples that are
//! allowed to leave the displayable range while light contributions are being
//! accumulated. They are collected on a [`Canvas`], a CPU-side pixel grid,
//! and only turned into 8-bit channel values when the canvas is serialized
//! with [`Canvas::to_ppm`].
//!
//! The serialization format is the plain-text PPM variant (`P3`): a
//! three-line header followed by whitespace-separated integer channel
//! triples, with no line longer than 70 characters. It is bulky, but every
//! image viewer and diff tool can read it, which is exactly what a renderer
//! under construction needs.

mod canvas;
mod color;

pub use canvas::Canvas;
pub use color::Color;
