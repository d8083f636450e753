//! Style definitions for UI components.

/// Sizes for the gutter and line rows.
#[derive(Debug, Clone, Copy)]
pub struct EditorStyle {
    pub gutter_width: f32,
    pub line_height: f32,
    pub line_padding_x: u16,
    pub font_size: f32,
}

impl EditorStyle {
    /// Derives row metrics from the configured font size.
    pub fn for_font_size(font_size: f32) -> Self {
        Self {
            font_size,
            line_height: (font_size * 1.9).round(),
            ..Self::default()
        }
    }
}

impl Default for EditorStyle {
    fn default() -> Self {
        Self {
            gutter_width: 52.0,
            line_height: 27.0,
            line_padding_x: 8,
            font_size: 14.0,
        }
    }
}
