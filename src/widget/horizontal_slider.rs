use iced::advanced::Shell;
use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{self, Tree, Widget};
use iced::mouse;
use iced::{Border, Element, Event, Length, Point, Rectangle, Size, Theme};
use std::ops::RangeInclusive;
use std::time::Instant;

use crate::ui_timing::DOUBLE_CLICK;

/// Slider for a dock setting. Double-click restores `default`.
pub struct HorizontalSlider<'a, Message> {
    range: RangeInclusive<f32>,
    value: f32,
    default: f32,
    on_change: Box<dyn Fn(f32) -> Message + 'a>,
    width: Length,
    height: Length,
    handle_width: f32,
}

impl<'a, Message> HorizontalSlider<'a, Message> {
    pub fn new<F>(range: RangeInclusive<f32>, value: f32, on_change: F) -> Self
    where
        F: Fn(f32) -> Message + 'a,
    {
        let default = *range.start();
        Self {
            range,
            value,
            default,
            on_change: Box::new(on_change),
            width: Length::Fixed(200.0),
            height: Length::Fixed(12.0),
            handle_width: 4.0,
        }
    }

    pub fn default(mut self, default: f32) -> Self {
        self.default = default.clamp(*self.range.start(), *self.range.end());
        self
    }

    pub fn width(mut self, width: Length) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Length) -> Self {
        self.height = height;
        self
    }

    fn normalized(&self) -> f32 {
        let span = self.range.end() - self.range.start();
        if span <= 0.0 {
            return 0.0;
        }
        ((self.value - self.range.start()) / span).clamp(0.0, 1.0)
    }

    fn value_at(&self, cursor_position: Point, bounds: Rectangle) -> f32 {
        let x = cursor_position.x - bounds.x - self.handle_width / 2.0;
        let travel = (bounds.width - self.handle_width).max(1.0);
        let normalized = (x / travel).clamp(0.0, 1.0);
        self.range.start() + normalized * (self.range.end() - self.range.start())
    }
}

#[derive(Default)]
struct State {
    is_dragging: bool,
    last_click_at: Option<Instant>,
}

impl<'a, Message, Renderer> Widget<Message, Theme, Renderer> for HorizontalSlider<'a, Message>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    fn layout(
        &mut self,
        _tree: &mut Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let size = limits.width(self.width).height(self.height).resolve(
            self.width,
            self.height,
            Size::ZERO,
        );

        layout::Node::new(size)
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_ref::<State>();
        let palette = theme.extended_palette();
        let bounds = layout.bounds();
        let radius = bounds.height / 2.0;

        let handle_x = bounds.x + (bounds.width - self.handle_width) * self.normalized();
        let active = state.is_dragging || cursor.is_over(bounds);

        renderer.fill_quad(
            renderer::Quad {
                bounds,
                border: Border {
                    radius: radius.into(),
                    width: 1.0,
                    color: palette.background.strong.color,
                },
                ..Default::default()
            },
            palette.background.weak.color,
        );

        let filled_width = handle_x - bounds.x;
        if filled_width > 0.0 {
            renderer.fill_quad(
                renderer::Quad {
                    bounds: Rectangle {
                        width: filled_width,
                        ..bounds
                    },
                    border: Border {
                        radius: radius.into(),
                        ..Border::default()
                    },
                    ..Default::default()
                },
                palette.primary.weak.color,
            );
        }

        renderer.fill_quad(
            renderer::Quad {
                bounds: Rectangle {
                    x: handle_x,
                    width: self.handle_width,
                    ..bounds
                },
                border: Border {
                    radius: (self.handle_width / 2.0).into(),
                    ..Border::default()
                },
                ..Default::default()
            },
            if active {
                palette.primary.strong.color
            } else {
                palette.primary.base.color
            },
        );
    }

    fn tag(&self) -> widget::tree::Tag {
        widget::tree::Tag::of::<State>()
    }

    fn state(&self) -> widget::tree::State {
        widget::tree::State::new(State::default())
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn iced::advanced::Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if cursor.is_over(bounds) {
                    let now = Instant::now();
                    let is_double_click = state
                        .last_click_at
                        .is_some_and(|last| now.duration_since(last) <= DOUBLE_CLICK);
                    state.last_click_at = Some(now);
                    state.is_dragging = true;
                    if is_double_click {
                        shell.publish((self.on_change)(self.default));
                    } else if let Some(cursor_position) = cursor.position() {
                        shell.publish((self.on_change)(self.value_at(cursor_position, bounds)));
                    }
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                state.is_dragging = false;
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if state.is_dragging
                    && let Some(cursor_position) = cursor.position()
                {
                    shell.publish((self.on_change)(self.value_at(cursor_position, bounds)));
                }
            }
            _ => {}
        }
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();
        if state.is_dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(layout.bounds()) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message, Renderer> From<HorizontalSlider<'a, Message>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(slider: HorizontalSlider<'a, Message>) -> Self {
        Self::new(slider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slider(value: f32) -> HorizontalSlider<'static, f32> {
        HorizontalSlider::new(20.0..=160.0, value, |v| v)
    }

    fn track() -> Rectangle {
        Rectangle::new(Point::new(10.0, 0.0), Size::new(144.0, 12.0))
    }

    #[test]
    fn maps_cursor_to_range() {
        let slider = slider(60.0);
        assert_eq!(slider.value_at(Point::new(0.0, 6.0), track()), 20.0);
        assert_eq!(slider.value_at(Point::new(500.0, 6.0), track()), 160.0);
        assert_eq!(slider.value_at(Point::new(82.0, 6.0), track()), 90.0);
    }

    #[test]
    fn default_is_clamped() {
        assert_eq!(slider(60.0).default(500.0).default, 160.0);
        assert_eq!(slider(60.0).default, 20.0);
    }

    #[test]
    fn normalized_value() {
        assert_eq!(slider(20.0).normalized(), 0.0);
        assert_eq!(slider(90.0).normalized(), 0.5);
        assert_eq!(slider(400.0).normalized(), 1.0);
    }
}
