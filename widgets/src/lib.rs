//! A taskbar-style dock for iced: icons in a row that swell as the pointer
//! gets close to them.

pub mod dock;
pub mod icon;
pub mod magnify;
pub mod pointer;
pub mod spring;
pub mod style;

pub use dock::Dock;
pub use icon::DockIcon;
pub use magnify::{DEFAULT_DISTANCE, DEFAULT_MAGNIFICATION, Magnification, RESTING_WIDTH};
pub use pointer::{PointerReader, PointerSignal};
pub use spring::{Spring, SpringConfig};

use iced::{Element, Theme};

pub fn dock<'a, Message, Renderer>(
    icons: impl IntoIterator<Item = DockIcon<'a, Message, Renderer>>,
) -> Dock<'a, Message, Renderer> {
    Dock::with_icons(icons)
}

pub fn dock_icon<'a, Message, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> DockIcon<'a, Message, Renderer> {
    DockIcon::new(content)
}
