//! Style records, profiles and presets.
//!
//! A [`StyleProfile`] maps every element kind to a complete
//! [`StyleRecord`] and carries the page-level [`DocumentRecord`].
//! Profiles come from the built-in defaults, a [`StylePreset`], or a JSON
//! [`StyleConfig`] merged over the defaults.

mod config;
mod presets;
mod profile;
mod record;

pub use config::{DocumentConfig, StyleConfig};
pub use presets::StylePreset;
pub use profile::{StyleProfile, StyleProfileBuilder};
pub use record::{Alignment, DocumentRecord, StyleRecord};
