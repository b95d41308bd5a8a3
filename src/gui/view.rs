use super::Dockbar;
use crate::config::{DISTANCE_RANGE, MAGNIFICATION_RANGE};
use crate::{message::Message, style::launcher, widget::horizontal_slider::HorizontalSlider};
use dockbar_widgets::{Dock, DockIcon, style as dock_style};
use iced::{
    Alignment, Element, Length,
    widget::{button, column, container, row, text},
};

impl Dockbar {
    fn dock(&self) -> Element<'_, Message> {
        let icons = self.settings.items.iter().map(|item| {
            let launcher = button(item.icon.text().size(20))
                .padding(8)
                .style(launcher::style)
                .on_press(Message::Launch(item.name.clone()));
            let icon = DockIcon::new(launcher).style(dock_style::icon);
            match item.size {
                Some(size) => icon.size(size),
                None => icon,
            }
        });

        Dock::with_icons(icons)
            .magnification(self.magnification)
            .distance(self.distance)
            .into()
    }

    fn setting<'a>(
        label: &'a str,
        range: std::ops::RangeInclusive<f32>,
        value: f32,
        default: f32,
        on_change: fn(f32) -> Message,
    ) -> Element<'a, Message> {
        row![
            text(label).width(Length::Fixed(110.0)),
            HorizontalSlider::new(range, value, on_change).default(default),
            text(format!("{value:.0}")).width(Length::Fixed(40.0)),
        ]
        .spacing(12)
        .align_y(Alignment::Center)
        .into()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let status = match &self.last_launched {
            Some(name) => format!("Launched {name}"),
            None => "Move the pointer over the dock".to_string(),
        };

        let controls = column![
            text(status).size(18),
            Self::setting(
                "Magnification",
                MAGNIFICATION_RANGE,
                self.magnification,
                self.settings.magnification,
                Message::Magnification,
            ),
            Self::setting(
                "Distance",
                DISTANCE_RANGE,
                self.distance,
                self.settings.distance,
                Message::Distance,
            ),
            button("Reset").on_press(Message::Reset),
        ]
        .spacing(10);

        column![
            container(controls).padding(16),
            container(self.dock())
                .center_x(Length::Fill)
                .align_bottom(Length::Fill)
                .padding(16),
        ]
        .into()
    }
}
