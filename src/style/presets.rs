//! Built-in style presets.

use super::{Alignment, DocumentConfig, StyleConfig, StyleRecord};

/// Built-in style profiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StylePreset {
    /// GB/T 9704-2012 official document layout
    #[default]
    Default,
    /// Formal business letter
    Formal,
    /// Academic paper
    Academic,
}

impl StylePreset {
    /// All presets, in listing order.
    pub fn all() -> &'static [StylePreset] {
        &[StylePreset::Default, StylePreset::Formal, StylePreset::Academic]
    }

    /// Preset name as used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            StylePreset::Default => "default",
            StylePreset::Formal => "formal",
            StylePreset::Academic => "academic",
        }
    }

    /// One-line description.
    pub fn description(&self) -> &'static str {
        match self {
            StylePreset::Default => "GB/T 9704-2012 Chinese document standard",
            StylePreset::Formal => "Formal business document",
            StylePreset::Academic => "Academic paper format",
        }
    }

    /// Look up a preset by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// The preset's overrides on top of the built-in default records.
    pub fn config(&self) -> StyleConfig {
        match self {
            StylePreset::Default => default_config(),
            StylePreset::Formal => formal_config(),
            StylePreset::Academic => academic_config(),
        }
    }
}

impl std::fmt::Display for StylePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn record(family: &str, size: f32, bold: bool, alignment: Alignment) -> StyleRecord {
    StyleRecord::new()
        .with_font_family(family)
        .with_font_size(size)
        .with_bold(bold)
        .with_alignment(alignment)
}

/// Complete records; every other profile is merged over these.
pub(crate) fn default_config() -> StyleConfig {
    StyleConfig {
        document: Some(DocumentConfig {
            margin_top: Some(3.7),
            margin_bottom: Some(3.5),
            margin_left: Some(2.8),
            margin_right: Some(2.6),
            line_spacing: Some(1.5),
            font_family: Some("FangSong_GB2312".into()),
            font_size: Some(16.0),
            indent_unit: Some(0.5),
        }),
        title: Some(
            record("SimHei", 22.0, true, Alignment::Center)
                .with_spacing(400.0, 20.0)
                .with_line_spacing(1.5)
                .with_first_line_indent(0.0),
        ),
        heading1: Some(
            record("SimHei", 16.0, true, Alignment::Left)
                .with_spacing(200.0, 10.0)
                .with_line_spacing(1.5)
                .with_first_line_indent(0.0),
        ),
        heading2: Some(
            record("KaiTi_GB2312", 15.0, false, Alignment::Left)
                .with_spacing(100.0, 8.0)
                .with_line_spacing(1.5)
                .with_first_line_indent(0.0),
        ),
        body: Some(
            record("FangSong_GB2312", 16.0, false, Alignment::Left)
                .with_spacing(0.0, 0.0)
                .with_line_spacing(1.5)
                .with_first_line_indent(2.0),
        ),
        signature: Some(
            record("FangSong_GB2312", 16.0, false, Alignment::Right)
                .with_spacing(200.0, 0.0)
                .with_line_spacing(1.5)
                .with_first_line_indent(0.0),
        ),
    }
}

fn formal_config() -> StyleConfig {
    StyleConfig {
        document: Some(DocumentConfig {
            margin_top: Some(2.5),
            margin_bottom: Some(2.5),
            margin_left: Some(3.0),
            margin_right: Some(2.5),
            line_spacing: Some(1.5),
            font_family: Some("SimSun".into()),
            font_size: Some(14.0),
            indent_unit: None,
        }),
        title: Some(record("SimHei", 20.0, true, Alignment::Center)),
        heading1: Some(record("SimHei", 16.0, true, Alignment::Left)),
        heading2: Some(record("SimSun", 14.0, true, Alignment::Left)),
        body: Some(record("SimSun", 14.0, false, Alignment::Left).with_first_line_indent(2.0)),
        signature: Some(record("SimSun", 14.0, false, Alignment::Right)),
    }
}

fn academic_config() -> StyleConfig {
    StyleConfig {
        document: Some(DocumentConfig {
            margin_top: Some(2.5),
            margin_bottom: Some(2.5),
            margin_left: Some(3.0),
            margin_right: Some(2.5),
            line_spacing: Some(2.0),
            font_family: Some("SimSun".into()),
            font_size: Some(12.0),
            indent_unit: None,
        }),
        title: Some(record("SimHei", 18.0, true, Alignment::Center).with_line_spacing(2.0)),
        heading1: Some(record("SimHei", 15.0, true, Alignment::Left).with_line_spacing(2.0)),
        heading2: Some(record("SimHei", 14.0, true, Alignment::Left).with_line_spacing(2.0)),
        body: Some(
            record("SimSun", 12.0, false, Alignment::Justify)
                .with_line_spacing(2.0)
                .with_first_line_indent(2.0),
        ),
        signature: Some(record("SimSun", 12.0, false, Alignment::Right).with_line_spacing(2.0)),
    }
}
