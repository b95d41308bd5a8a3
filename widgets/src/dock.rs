use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{self, Tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{
    Background, Border, Color, Element, Event, Length, Point, Rectangle, Size, Theme, mouse,
    window,
};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::icon::DockIcon;
use crate::magnify::Magnification;
use crate::pointer::{PointerReader, PointerSignal};
use crate::spring::{Spring, SpringConfig};
use crate::style::{self, Style};

pub const DEFAULT_PADDING: f32 = 8.0;
pub const DEFAULT_SPACING: f32 = 8.0;

/// A row of icons that grow as the pointer approaches them.
pub struct Dock<'a, Message, Renderer = iced::Renderer> {
    icons: Vec<DockIcon<'a, Message, Renderer>>,
    config: Magnification,
    spring: SpringConfig,
    padding: f32,
    spacing: f32,
    width: Length,
    height: Length,
    style: Box<dyn Fn(&Theme) -> Style + 'a>,
}

impl<'a, Message, Renderer> Dock<'a, Message, Renderer> {
    pub fn new() -> Self {
        Self::with_icons(Vec::new())
    }

    pub fn with_icons(icons: impl IntoIterator<Item = DockIcon<'a, Message, Renderer>>) -> Self {
        Self {
            icons: icons.into_iter().collect(),
            config: Magnification::default(),
            spring: SpringConfig::default(),
            padding: DEFAULT_PADDING,
            spacing: DEFAULT_SPACING,
            width: Length::Shrink,
            height: Length::Shrink,
            style: Box::new(style::default),
        }
    }

    pub fn push(mut self, icon: DockIcon<'a, Message, Renderer>) -> Self {
        self.icons.push(icon);
        self
    }

    /// Width of an icon with the pointer right over its center.
    pub fn magnification(mut self, peak: f32) -> Self {
        self.config.peak = peak;
        self
    }

    /// Pointer offset at which icons are back at their resting width.
    pub fn distance(mut self, distance: f32) -> Self {
        self.config.distance = distance;
        self
    }

    pub fn resting_width(mut self, resting: f32) -> Self {
        self.config.resting = resting;
        self
    }

    pub fn spring(mut self, spring: SpringConfig) -> Self {
        self.spring = spring;
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    pub fn style(mut self, style: impl Fn(&Theme) -> Style + 'a) -> Self {
        self.style = Box::new(style);
        self
    }

    pub fn config(&self) -> Magnification {
        self.config
    }

    fn restings(&self) -> Vec<f32> {
        self.icons
            .iter()
            .map(|icon| icon.resting_width(&self.config))
            .collect()
    }

    /// Target width of every icon, measured against `layout`. Icons without
    /// a laid out slot yet are measured as a zero box.
    fn targets(&self, pointer: &PointerReader, layout: Layout<'_>) -> Vec<f32> {
        let mut slots = layout.children();
        self.icons
            .iter()
            .map(|icon| {
                let bounds = slots
                    .next()
                    .map_or(Rectangle::new(Point::ORIGIN, Size::ZERO), |slot| {
                        slot.bounds()
                    });
                icon.target_width(pointer, &self.config, bounds)
            })
            .collect()
    }
}

impl<'a, Message, Renderer> Default for Dock<'a, Message, Renderer> {
    fn default() -> Self {
        Self::new()
    }
}

/// Animation state kept in the widget tree between frames.
#[derive(Debug)]
pub(crate) struct State {
    pointer: PointerSignal,
    springs: Vec<Spring>,
    restings: Vec<f32>,
    config: Magnification,
    seen: u64,
    stale: bool,
    last_tick: Option<Instant>,
}

impl State {
    pub(crate) fn new(restings: Vec<f32>, config: Magnification, spring: SpringConfig) -> Self {
        if !config.is_active() {
            debug!(
                distance = config.distance,
                "dock magnification disabled by non-positive or non-finite distance"
            );
        }
        Self {
            pointer: PointerSignal::new(),
            springs: restings.iter().map(|&w| Spring::new(w, spring)).collect(),
            restings,
            config,
            seen: 0,
            stale: false,
            last_tick: None,
        }
    }

    /// Reconciles with a rebuilt dock. Returns whether targets are stale.
    pub(crate) fn sync(
        &mut self,
        restings: Vec<f32>,
        config: Magnification,
        spring: SpringConfig,
    ) -> bool {
        self.springs.truncate(restings.len());
        while self.springs.len() < restings.len() {
            let resting = restings[self.springs.len()];
            self.springs.push(Spring::new(resting, spring));
        }
        for spring_state in &mut self.springs {
            spring_state.set_config(spring);
        }

        let stale = config != self.config || restings != self.restings;
        self.config = config;
        self.restings = restings;
        self.stale |= stale;
        stale
    }

    pub(crate) fn pointer(&self) -> &PointerSignal {
        &self.pointer
    }

    pub(crate) fn widths(&self) -> impl Iterator<Item = f32> + '_ {
        self.springs.iter().map(Spring::value)
    }

    fn needs_retarget(&self) -> bool {
        self.stale || self.pointer.version() != self.seen
    }

    /// Points every spring at its icon's target width for the pointer
    /// value seen now. Returns whether any spring is moving.
    pub(crate) fn retarget(&mut self, targets: impl IntoIterator<Item = f32>) -> bool {
        self.seen = self.pointer.version();
        self.stale = false;

        for (spring, target) in self.springs.iter_mut().zip(targets) {
            spring.set_target(target);
        }
        self.is_animating()
    }

    pub(crate) fn is_animating(&self) -> bool {
        self.springs.iter().any(|spring| !spring.is_settled())
    }

    /// Advances every spring to `now`. Returns whether another frame is
    /// needed.
    pub(crate) fn tick(&mut self, now: Instant) -> bool {
        let elapsed = self
            .last_tick
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));

        let mut moving = false;
        for spring in &mut self.springs {
            moving |= spring.step(elapsed);
        }

        self.last_tick = moving.then_some(now);
        moving
    }
}

impl<'a, Message, Renderer> Widget<Message, Theme, Renderer> for Dock<'a, Message, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> widget::tree::Tag {
        widget::tree::Tag::of::<State>()
    }

    fn state(&self) -> widget::tree::State {
        widget::tree::State::new(State::new(self.restings(), self.config, self.spring))
    }

    fn children(&self) -> Vec<Tree> {
        self.icons
            .iter()
            .map(|icon| Tree::new(&icon.content))
            .collect()
    }

    fn diff(&self, tree: &mut Tree) {
        let contents: Vec<_> = self.icons.iter().map(|icon| &icon.content).collect();
        tree.diff_children(&contents);

        let state = tree.state.downcast_mut::<State>();
        state.sync(self.restings(), self.config, self.spring);
    }

    fn size(&self) -> Size<Length> {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let state = tree.state.downcast_ref::<State>();
        let restings = self.restings();
        let widths: Vec<f32> = state
            .widths()
            .chain(restings.iter().skip(state.springs.len()).copied())
            .take(self.icons.len())
            .collect();

        let tallest = widths
            .iter()
            .fold(self.config.peak.max(self.config.resting), |tallest, &w| {
                tallest.max(w)
            });
        let row_width = widths.iter().sum::<f32>()
            + self.spacing * widths.len().saturating_sub(1) as f32;
        let intrinsic = Size::new(
            row_width + self.padding * 2.0,
            tallest + self.padding * 2.0,
        );
        let size = limits
            .width(self.width)
            .height(self.height)
            .resolve(self.width, self.height, intrinsic);

        let mut x = self.padding;
        let mut nodes = Vec::with_capacity(widths.len());
        for ((icon, child), &w) in self.icons.iter_mut().zip(&mut tree.children).zip(&widths) {
            let slot = Size::new(w, w);
            let content = icon.content.as_widget_mut().layout(
                child,
                renderer,
                &layout::Limits::new(Size::ZERO, slot),
            );
            let content_size = content.size();
            let content = content.move_to(Point::new(
                (w - content_size.width) / 2.0,
                (w - content_size.height) / 2.0,
            ));

            let y = size.height - self.padding - w;
            nodes.push(layout::Node::with_children(slot, vec![content]).move_to(Point::new(x, y)));
            x += w + self.spacing;
        }

        layout::Node::with_children(size, nodes)
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let appearance = (self.style)(theme);

        renderer.fill_quad(
            renderer::Quad {
                bounds,
                border: Border {
                    radius: (bounds.height / 2.0).into(),
                    ..appearance.border
                },
                ..Default::default()
            },
            appearance
                .background
                .unwrap_or(Background::Color(Color::TRANSPARENT)),
        );

        for ((icon, child), slot) in self.icons.iter().zip(&tree.children).zip(layout.children()) {
            let slot_bounds = slot.bounds();
            if let Some(icon_style) = icon.style.as_ref().map(|f| f(theme)) {
                renderer.fill_quad(
                    renderer::Quad {
                        bounds: slot_bounds,
                        border: Border {
                            radius: (slot_bounds.width / 2.0).into(),
                            ..icon_style.border
                        },
                        ..Default::default()
                    },
                    icon_style
                        .background
                        .unwrap_or(Background::Color(Color::TRANSPARENT)),
                );
            }

            if let Some(content) = slot.children().next() {
                icon.content
                    .as_widget()
                    .draw(child, renderer, theme, style, content, cursor, viewport);
            }
        }
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        for ((icon, child), slot) in self
            .icons
            .iter_mut()
            .zip(&mut tree.children)
            .zip(layout.children())
        {
            if let Some(content) = slot.children().next() {
                icon.content.as_widget_mut().update(
                    child, event, content, cursor, renderer, clipboard, shell, viewport,
                );
            }
        }

        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();

        match event {
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                match cursor.position_over(bounds) {
                    Some(position) => state.pointer().set(position.x),
                    None => state.pointer().clear(),
                }
            }
            Event::Mouse(mouse::Event::CursorLeft) => state.pointer().clear(),
            Event::Window(window::Event::RedrawRequested(now)) => {
                if state.needs_retarget() || state.is_animating() {
                    let targets = self.targets(&state.pointer().reader(), layout);
                    let moving = state.retarget(targets) && state.tick(*now);
                    shell.invalidate_layout();
                    if moving {
                        shell.request_redraw();
                    }
                }
                return;
            }
            _ => {}
        }

        if state.needs_retarget() {
            let targets = self.targets(&state.pointer().reader(), layout);
            if state.retarget(targets) {
                shell.request_redraw();
            }
        }
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.icons
            .iter()
            .zip(&tree.children)
            .zip(layout.children())
            .map(|((icon, child), slot)| {
                let interaction = slot
                    .children()
                    .next()
                    .map_or(mouse::Interaction::None, |content| {
                        icon.content
                            .as_widget()
                            .mouse_interaction(child, content, cursor, viewport, renderer)
                    });
                if interaction == mouse::Interaction::None && cursor.is_over(slot.bounds()) {
                    mouse::Interaction::Pointer
                } else {
                    interaction
                }
            })
            .max()
            .unwrap_or(mouse::Interaction::None)
    }
}

impl<'a, Message, Renderer> From<Dock<'a, Message, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(dock: Dock<'a, Message, Renderer>) -> Self {
        Self::new(dock)
    }
}
