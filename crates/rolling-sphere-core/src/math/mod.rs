//! Vector and matrix helpers shared by the motion, shadow and lighting code.
//!
//! Everything here is a thin layer over glam; the only behavior glam does not
//! already give us is the degenerate-axis policy of [`rotate`] and the
//! optional inverse-transpose of [`normal_matrix`].

pub mod interp;
pub mod rotation;

pub use interp::{distance, lerp, lerp_mat4};
pub use rotation::{normal_matrix, rotate};
