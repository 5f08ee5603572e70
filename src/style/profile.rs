//! Style profiles: the resolver the reformatter looks records up in.

use std::path::Path;

use super::presets::default_config;
use super::{Alignment, DocumentConfig, DocumentRecord, StyleConfig, StylePreset, StyleRecord};
use crate::error::Result;
use crate::model::ElementKind;

/// A complete set of style records plus page-level settings.
///
/// Profiles are immutable values. Every record is complete: configuration
/// is merged over the built-in defaults when the profile is built, so
/// lookups never fall back at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleProfile {
    document: DocumentRecord,
    title: StyleRecord,
    heading1: StyleRecord,
    heading2: StyleRecord,
    body: StyleRecord,
    signature: StyleRecord,
}

impl StyleProfile {
    /// The built-in default profile.
    pub fn builtin() -> Self {
        let bare = Self {
            document: DocumentRecord::default(),
            title: StyleRecord::default(),
            heading1: StyleRecord::default(),
            heading2: StyleRecord::default(),
            body: StyleRecord::default(),
            signature: StyleRecord::default(),
        };
        bare.with_config(&default_config())
    }

    /// A built-in preset.
    pub fn preset(preset: StylePreset) -> Self {
        match preset {
            StylePreset::Default => Self::builtin(),
            other => Self::builtin().with_config(&other.config()),
        }
    }

    /// Build a profile from a configuration merged over the built-in defaults.
    pub fn from_config(config: &StyleConfig) -> Self {
        Self::builtin().with_config(config)
    }

    /// Parse a JSON configuration and merge it over the built-in defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::from_config(&StyleConfig::from_json(json)?))
    }

    /// Load a JSON configuration file and merge it over the built-in defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = StyleConfig::load(path.as_ref())?;
        log::debug!("Loaded style configuration from {}", path.as_ref().display());
        Ok(Self::from_config(&config))
    }

    /// Return a new profile with `config` merged field-wise over this one.
    pub fn with_config(&self, config: &StyleConfig) -> Self {
        let mut profile = self.clone();
        if let Some(ref document) = config.document {
            profile.document = document.apply_to(&profile.document);
        }
        for kind in ElementKind::STYLED {
            if let Some(overlay) = config.style(kind) {
                profile.set_style(kind, overlay);
            }
        }
        profile
    }

    /// Style record for an element kind.
    ///
    /// `Empty` resolves to the body record.
    pub fn style(&self, kind: ElementKind) -> &StyleRecord {
        match kind {
            ElementKind::Title => &self.title,
            ElementKind::Heading1 => &self.heading1,
            ElementKind::Heading2 => &self.heading2,
            ElementKind::Body | ElementKind::Empty => &self.body,
            ElementKind::Signature => &self.signature,
        }
    }

    /// Page-level settings.
    pub fn document(&self) -> &DocumentRecord {
        &self.document
    }

    /// The profile in configuration form, with every field set.
    pub fn to_config(&self) -> StyleConfig {
        let mut config = StyleConfig {
            document: Some(DocumentConfig::from(&self.document)),
            ..Default::default()
        };
        for kind in ElementKind::STYLED {
            config.set_style(kind, self.style(kind).clone());
        }
        config
    }

    /// Start a builder from the built-in defaults.
    pub fn builder() -> StyleProfileBuilder {
        StyleProfileBuilder::new(Self::builtin())
    }

    /// Start a builder from this profile.
    pub fn to_builder(&self) -> StyleProfileBuilder {
        StyleProfileBuilder::new(self.clone())
    }

    fn set_style(&mut self, kind: ElementKind, overlay: &StyleRecord) {
        let slot = match kind {
            ElementKind::Title => &mut self.title,
            ElementKind::Heading1 => &mut self.heading1,
            ElementKind::Heading2 => &mut self.heading2,
            ElementKind::Body => &mut self.body,
            ElementKind::Signature => &mut self.signature,
            ElementKind::Empty => return,
        };
        *slot = slot.merged(overlay);
    }
}

impl Default for StyleProfile {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Editor for a style profile.
///
/// Each setter merges into a working copy; `build` hands out a new
/// immutable profile.
///
/// # Example
///
/// ```
/// use docgen::model::ElementKind;
/// use docgen::style::{Alignment, StyleProfile};
///
/// let profile = StyleProfile::builder()
///     .font_size(ElementKind::Title, 26.0)
///     .alignment(ElementKind::Body, Alignment::Justify)
///     .build();
///
/// assert_eq!(profile.style(ElementKind::Title).font_size, Some(26.0));
/// ```
#[derive(Debug, Clone)]
pub struct StyleProfileBuilder {
    profile: StyleProfile,
}

impl StyleProfileBuilder {
    fn new(profile: StyleProfile) -> Self {
        Self { profile }
    }

    /// Merge a partial record into one element kind.
    pub fn style(mut self, kind: ElementKind, record: StyleRecord) -> Self {
        self.profile.set_style(kind, &record);
        self
    }

    /// Merge a partial page configuration.
    pub fn document(mut self, config: DocumentConfig) -> Self {
        self.profile.document = config.apply_to(&self.profile.document);
        self
    }

    /// Merge a whole configuration.
    pub fn config(mut self, config: &StyleConfig) -> Self {
        self.profile = self.profile.with_config(config);
        self
    }

    /// Set the font family of one element kind.
    pub fn font_family(self, kind: ElementKind, family: impl Into<String>) -> Self {
        self.style(kind, StyleRecord::new().with_font_family(family))
    }

    /// Set the font size of one element kind, in points.
    pub fn font_size(self, kind: ElementKind, size: f32) -> Self {
        self.style(kind, StyleRecord::new().with_font_size(size))
    }

    /// Set bold weight for one element kind.
    pub fn bold(self, kind: ElementKind, bold: bool) -> Self {
        self.style(kind, StyleRecord::new().with_bold(bold))
    }

    /// Set the alignment of one element kind.
    pub fn alignment(self, kind: ElementKind, alignment: Alignment) -> Self {
        self.style(kind, StyleRecord::new().with_alignment(alignment))
    }

    /// Set the first-line indent of one element kind, in characters.
    pub fn first_line_indent(self, kind: ElementKind, chars: f32) -> Self {
        self.style(kind, StyleRecord::new().with_first_line_indent(chars))
    }

    /// Set all four page margins, in centimeters.
    pub fn margins(self, top: f32, bottom: f32, left: f32, right: f32) -> Self {
        self.document(DocumentConfig {
            margin_top: Some(top),
            margin_bottom: Some(bottom),
            margin_left: Some(left),
            margin_right: Some(right),
            ..Default::default()
        })
    }

    /// Finish editing.
    pub fn build(self) -> StyleProfile {
        self.profile
    }
}
