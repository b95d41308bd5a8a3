use super::Dockbar;
use crate::config::{DISTANCE_RANGE, MAGNIFICATION_RANGE};
use crate::message::Message;
use iced::Task;
use tracing::{debug, info};

impl Dockbar {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Launch(name) => {
                info!(item = %name, "launch");
                self.last_launched = Some(name);
            }
            Message::Magnification(value) => {
                self.magnification =
                    value.clamp(*MAGNIFICATION_RANGE.start(), *MAGNIFICATION_RANGE.end());
                debug!(magnification = self.magnification);
            }
            Message::Distance(value) => {
                self.distance = value.clamp(*DISTANCE_RANGE.start(), *DISTANCE_RANGE.end());
                debug!(distance = self.distance);
            }
            Message::Reset => {
                self.magnification = self.settings.magnification;
                self.distance = self.settings.distance;
            }
        }
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn launch_updates_status() {
        let mut app = Dockbar::new(Settings::default());
        let _ = app.update(Message::Launch("Mail".to_string()));
        assert_eq!(app.last_launched.as_deref(), Some("Mail"));
    }

    #[test]
    fn sliders_stay_in_range() {
        let mut app = Dockbar::new(Settings::default());
        let _ = app.update(Message::Magnification(1000.0));
        let _ = app.update(Message::Distance(-3.0));
        assert_eq!(app.magnification, *MAGNIFICATION_RANGE.end());
        assert_eq!(app.distance, *DISTANCE_RANGE.start());
    }

    #[test]
    fn reset_restores_configured_values() {
        let settings = Settings {
            magnification: 80.0,
            distance: 100.0,
            ..Settings::default()
        };
        let mut app = Dockbar::new(settings);
        let _ = app.update(Message::Magnification(30.0));
        let _ = app.update(Message::Distance(300.0));
        let _ = app.update(Message::Reset);
        assert_eq!(app.magnification, 80.0);
        assert_eq!(app.distance, 100.0);
    }
}
