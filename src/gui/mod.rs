mod update;
mod view;

use crate::config::Settings;

pub struct Dockbar {
    settings: Settings,
    magnification: f32,
    distance: f32,
    last_launched: Option<String>,
}

impl Dockbar {
    pub fn new(settings: Settings) -> Self {
        Self {
            magnification: settings.magnification,
            distance: settings.distance,
            settings,
            last_launched: None,
        }
    }
}
