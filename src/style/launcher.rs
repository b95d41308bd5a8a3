use iced::{
    Background, Border, Color, Theme,
    widget::button::{Status, Style},
};

/// Launcher buttons blend into their dock slot and only tint while hovered
/// or pressed.
pub fn style(theme: &Theme, status: Status) -> Style {
    let palette = theme.extended_palette();
    let tint = match status {
        Status::Hovered => Some(palette.primary.weak.color.scale_alpha(0.35)),
        Status::Pressed => Some(palette.primary.base.color.scale_alpha(0.5)),
        Status::Active | Status::Disabled => None,
    };
    Style {
        background: tint.map(Background::Color),
        text_color: palette.background.base.text,
        border: Border {
            radius: 999.0.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..Style::default()
    }
}
