use iced::{Element, Rectangle, Theme};

use crate::magnify::Magnification;
use crate::pointer::PointerReader;
use crate::style::IconStyle;

/// One slot of a [`Dock`](crate::Dock).
///
/// An icon only owns its content and an optional size. The pointer and the
/// magnification settings are handed to it by the dock on every query.
pub struct DockIcon<'a, Message, Renderer = iced::Renderer> {
    pub(crate) content: Element<'a, Message, Theme, Renderer>,
    size: Option<f32>,
    pub(crate) style: Option<Box<dyn Fn(&Theme) -> IconStyle + 'a>>,
}

impl<'a, Message, Renderer> DockIcon<'a, Message, Renderer> {
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            size: None,
            style: None,
        }
    }

    /// Overrides the resting width of this icon.
    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn style(mut self, style: impl Fn(&Theme) -> IconStyle + 'a) -> Self {
        self.style = Some(Box::new(style));
        self
    }

    pub fn resting_width(&self, config: &Magnification) -> f32 {
        self.size.unwrap_or(config.resting)
    }

    /// Width this icon should animate towards, given where it was last laid
    /// out. The dock calls this for every icon on each pointer change and
    /// animation frame; unmeasured icons pass a zero rectangle.
    pub fn target_width(
        &self,
        pointer: &PointerReader,
        config: &Magnification,
        bounds: Rectangle,
    ) -> f32 {
        slot_width(pointer.get(), bounds, config, self.resting_width(config))
    }
}

fn slot_width(
    pointer_x: f32,
    bounds: Rectangle,
    config: &Magnification,
    resting: f32,
) -> f32 {
    let center = bounds.x + bounds.width / 2.0;
    config.width_at_rest(pointer_x - center, resting)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointer::PointerSignal;
    use iced::widget::text;
    use iced::{Point, Size};

    fn icon() -> DockIcon<'static, ()> {
        DockIcon::new(text("A"))
    }

    fn slot_at(center: f32, width: f32) -> Rectangle {
        Rectangle {
            x: center - width / 2.0,
            y: 0.0,
            width,
            height: width,
        }
    }

    #[test]
    fn follows_the_shared_pointer() {
        let signal = PointerSignal::new();
        let reader = signal.reader();
        let config = Magnification::default();
        let icon = icon();
        let bounds = slot_at(100.0, 40.0);

        assert_eq!(icon.target_width(&reader, &config, bounds), 40.0);
        signal.set(100.0);
        assert_eq!(icon.target_width(&reader, &config, bounds), 60.0);
        signal.set(240.0);
        assert_eq!(icon.target_width(&reader, &config, bounds), 40.0);
        signal.clear();
        assert_eq!(icon.target_width(&reader, &config, bounds), 40.0);
    }

    #[test]
    fn size_override_changes_rest() {
        let signal = PointerSignal::new();
        let config = Magnification::default();
        let icon = icon().size(48.0);

        assert_eq!(icon.resting_width(&config), 48.0);
        assert_eq!(
            icon.target_width(&signal.reader(), &config, slot_at(0.0, 48.0)),
            48.0
        );
        signal.set(0.0);
        assert_eq!(
            icon.target_width(&signal.reader(), &config, slot_at(0.0, 48.0)),
            60.0
        );
    }

    #[test]
    fn unmeasured_icon_uses_zero_box() {
        let config = Magnification::default();
        let unmeasured = Rectangle::new(Point::ORIGIN, Size::ZERO);
        assert_eq!(slot_width(0.0, unmeasured, &config, 40.0), 60.0);
        assert_eq!(slot_width(70.0, unmeasured, &config, 40.0), 50.0);
    }
}
