//! Cymatic (Chladni-style) field rendering and PNG output.

mod field;
mod png;

pub use field::{axis, render_field, superpose, Field};
pub use png::{encode_png, write_png};
