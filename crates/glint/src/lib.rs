//! The numeric core of the glint ray tracer.
//!
//! Rendering proper (rays, intersections, shading) does not exist yet. What
//! does exist is everything a renderer computes *with*:
//!
//! - [`Tuple`]: homogeneous points and direction vectors, from
//!   [`glint_linalg`].
//! - [`Matrix`]: square matrices up to 4x4 with cofactor-expansion
//!   determinants and adjugate inversion, also from [`glint_linalg`].
//! - [`Color`] and [`Canvas`]: the pixel side, from [`glint_canvas`],
//!   including the plain-text PPM serializer.
//!
//! All approximate comparisons throughout the workspace use the single
//! [`EPSILON`] tolerance; the [`assert_approx_eq!`] and [`assert_approx_ne!`]
//! macros are the test-side entry points for it.
//!
//! The driver programs under `examples/` are deliberately throwaway: they
//! construct the types above, step tiny simulations, and write PPM files.

use log::LevelFilter;

pub use glint_canvas as canvas;
pub use glint_linalg as math;

pub use glint_canvas::{Canvas, Color};
pub use glint_linalg::{
    assert_approx_eq, assert_approx_ne, point, vector, Mat2, Mat2f, Mat3, Mat3f, Mat4, Mat4f,
    Matrix, Tuple, EPSILON,
};

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and glint will log at *debug* level; `RUST_LOG` can
/// override the defaults.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
