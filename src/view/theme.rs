use ratatui::style::Color;

/// Colours used by the views. Built once at startup and passed down; the
/// graph only reports column indices and this maps them to colours.
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub bg_alt: Color,
    pub panel_bg: Color,
    pub panel_border: Color,
    pub text: Color,
    pub text_muted: Color,
    pub text_dim: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub highlight_bg: Color,
    pub highlight_text: Color,
    pub bar_bg: Color,
    pub branches: Vec<Color>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Rgb(0x0f, 0x14, 0x11),
            bg_alt: Color::Rgb(0x14, 0x1b, 0x16),
            panel_bg: Color::Rgb(0x14, 0x1c, 0x18),
            panel_border: Color::Rgb(0x2c, 0x3a, 0x32),
            text: Color::Rgb(0xe6, 0xf0, 0xe6),
            text_muted: Color::Rgb(0xa6, 0xb4, 0xa6),
            text_dim: Color::Rgb(0x7b, 0x88, 0x7f),
            accent: Color::Rgb(0x6f, 0xd0, 0x8a),
            accent_alt: Color::Rgb(0xd2, 0xa7, 0x6a),
            highlight_bg: Color::Rgb(0x26, 0x4c, 0x37),
            highlight_text: Color::Rgb(0xea, 0xf6, 0xee),
            bar_bg: Color::Rgb(0x18, 0x22, 0x1d),
            branches: vec![
                Color::Rgb(0x6f, 0xd0, 0x8a),
                Color::Rgb(0x7e, 0xe1, 0xa0),
                Color::Rgb(0xd2, 0xa7, 0x6a),
                Color::Rgb(0x7f, 0xd3, 0xc5),
                Color::Rgb(0x8f, 0xb9, 0xe0),
                Color::Rgb(0xf0, 0xc0, 0x7a),
                Color::Rgb(0xa8, 0xe0, 0x63),
                Color::Rgb(0x6c, 0xb0, 0x8a),
                Color::Rgb(0xa9, 0xb6, 0xb0),
            ],
        }
    }
}

impl Theme {
    /// Colour for a graph column, cycling through the branch palette
    pub fn branch_color(&self, column: usize) -> Color {
        if self.branches.is_empty() {
            return self.text;
        }
        self.branches[column % self.branches.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_color_cycles() {
        let theme = Theme::default();
        let n = theme.branches.len();
        assert_eq!(theme.branch_color(0), theme.branch_color(n));
        assert_eq!(theme.branch_color(3), theme.branches[3]);
    }

    #[test]
    fn test_empty_palette_falls_back_to_text() {
        let theme = Theme {
            branches: Vec::new(),
            ..Theme::default()
        };
        assert_eq!(theme.branch_color(4), theme.text);
    }
}
