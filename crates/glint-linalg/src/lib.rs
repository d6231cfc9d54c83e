//! The linear algebra core of the glint ray tracer.
//!
//! # Motivation
//!
//! A ray tracer spends nearly all of its time shuffling points, direction
//! vectors and 4x4 transform matrices around, and it needs to expose those
//! types in its public API. This library was created so that the renderer
//! owns those types instead of re-exporting a third-party linear algebra
//! crate from its public surface.
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized matrices. The API can be significantly
//!   simplified by relying on const generics to specify the matrix dimension,
//!   and a ray tracer only ever needs the 2x2 through 4x4 sizes.
//! - Support only a single, column-major, unpadded data layout for matrices,
//!   further simplifying their API.
//! - Matrices are generic over the element type, but only for [`Copy`]
//!   numeric types. The homogeneous [`Tuple`] is a concrete `f32` type, since
//!   that is the only precision the renderer traffics in.
//! - Use a single fixed tolerance ([`EPSILON`]) for every approximate
//!   comparison, so that "equal" means the same thing everywhere in the
//!   renderer and its tests.

pub mod approx;
mod matrix;
mod traits;
mod tuple;

pub use matrix::*;
pub use traits::*;
pub use tuple::*;

/// The tolerance used for all approximate numeric comparisons in the renderer.
pub const EPSILON: f32 = 1e-5;
