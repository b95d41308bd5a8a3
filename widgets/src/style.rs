use iced::{Background, Border, Color, Theme};

/// Appearance of the dock's pill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub background: Option<Background>,
    /// Radius is ignored; the pill is always fully rounded.
    pub border: Border,
}

/// Appearance of a single icon slot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IconStyle {
    pub background: Option<Background>,
    pub border: Border,
}

pub fn default(theme: &Theme) -> Style {
    let palette = theme.extended_palette();
    Style {
        background: Some(Background::Color(
            palette.background.weak.color.scale_alpha(0.6),
        )),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            ..Border::default()
        },
    }
}

pub fn icon(theme: &Theme) -> IconStyle {
    let palette = theme.extended_palette();
    IconStyle {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            ..Border::default()
        },
    }
}
