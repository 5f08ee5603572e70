//! Rendering module for writing formatted documents.

mod docx;
mod json;
mod text;

pub use docx::{cm_to_twips, half_points, save_bytes, to_docx, write_docx, TWIPS_PER_CM};
pub use json::{to_json, JsonFormat};
pub use text::to_outline;
