use anyhow::{Context, bail};
use clap::Parser;
use dockbar_widgets::{DEFAULT_DISTANCE, DEFAULT_MAGNIFICATION};
use iced::widget::Text;
use serde::Deserialize;
use std::{
    fs,
    ops::RangeInclusive,
    path::{Path, PathBuf},
};
use tracing::{Level, info};

pub const DEFAULT_CONFIG_FILE: &str = "dockbar.toml";

/// Values the magnification slider can reach.
pub const MAGNIFICATION_RANGE: RangeInclusive<f32> = 20.0..=160.0;
/// Values the distance slider can reach.
pub const DISTANCE_RANGE: RangeInclusive<f32> = 20.0..=400.0;

#[derive(Parser, Debug)]
#[command(name = "dockbar", version, about = "Magnifying launcher dock")]
pub struct Cli {
    /// TOML settings file. Falls back to ./dockbar.toml when present.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Width of an icon right under the pointer.
    #[arg(long)]
    pub magnification: Option<f32>,
    /// Pointer distance at which icons are back at rest.
    #[arg(long)]
    pub distance: Option<f32>,
    #[arg(long, default_value = "info")]
    pub log_level: Level,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Glyph {
    Terminal,
    Folder,
    Globe,
    Mail,
    Music,
    Camera,
    Calendar,
    Settings,
}

impl Glyph {
    pub fn text<'a>(self) -> Text<'a> {
        use iced_fonts::lucide;
        match self {
            Glyph::Terminal => lucide::terminal(),
            Glyph::Folder => lucide::folder(),
            Glyph::Globe => lucide::globe(),
            Glyph::Mail => lucide::mail(),
            Glyph::Music => lucide::music(),
            Glyph::Camera => lucide::camera(),
            Glyph::Calendar => lucide::calendar(),
            Glyph::Settings => lucide::settings(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Item {
    pub name: String,
    pub icon: Glyph,
    #[serde(default)]
    pub size: Option<f32>,
}

impl Item {
    fn new(name: &str, icon: Glyph) -> Self {
        Self {
            name: name.to_string(),
            icon,
            size: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub magnification: f32,
    pub distance: f32,
    pub items: Vec<Item>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            magnification: DEFAULT_MAGNIFICATION,
            distance: DEFAULT_DISTANCE,
            items: vec![
                Item::new("Terminal", Glyph::Terminal),
                Item::new("Files", Glyph::Folder),
                Item::new("Browser", Glyph::Globe),
                Item::new("Mail", Glyph::Mail),
                Item::new("Music", Glyph::Music),
                Item::new("Photos", Glyph::Camera),
                Item::new("Calendar", Glyph::Calendar),
                Item::new("Settings", Glyph::Settings),
            ],
        }
    }
}

impl Settings {
    pub fn parse(source: &str) -> anyhow::Result<Self> {
        let settings: Settings = toml::from_str(source).context("parsing config")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&source).with_context(|| format!("in {}", path.display()))
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        within("magnification", self.magnification, &MAGNIFICATION_RANGE)?;
        within("distance", self.distance, &DISTANCE_RANGE)?;
        for item in &self.items {
            if item.name.trim().is_empty() {
                bail!("dock item with an empty name");
            }
            if let Some(size) = item.size {
                positive(&format!("size of {}", item.name), size)?;
            }
        }
        Ok(())
    }

    /// Applies command line overrides on top of file values.
    pub fn apply(&mut self, cli: &Cli) -> anyhow::Result<()> {
        if let Some(magnification) = cli.magnification {
            self.magnification = magnification;
        }
        if let Some(distance) = cli.distance {
            self.distance = distance;
        }
        self.validate()
    }
}

fn positive(what: &str, value: f32) -> anyhow::Result<()> {
    if !value.is_finite() || value <= 0.0 {
        bail!("{what} must be a positive number, got {value}");
    }
    Ok(())
}

fn within(what: &str, value: f32, range: &RangeInclusive<f32>) -> anyhow::Result<()> {
    positive(what, value)?;
    if !range.contains(&value) {
        bail!(
            "{what} must be between {} and {}, got {value}",
            range.start(),
            range.end()
        );
    }
    Ok(())
}

pub fn load(cli: &Cli) -> anyhow::Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => Settings::read(path)?,
        None => {
            let fallback = Path::new(DEFAULT_CONFIG_FILE);
            if fallback.exists() {
                Settings::read(fallback)?
            } else {
                info!("no {DEFAULT_CONFIG_FILE} found, using built-in launcher set");
                Settings::default()
            }
        }
    };
    settings.apply(cli)?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("dockbar").chain(args.iter().copied()))
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Settings::parse("").unwrap(), Settings::default());
    }

    #[test]
    fn parses_items() {
        let settings = Settings::parse(
            r#"
            magnification = 72.0
            [[items]]
            name = "Shell"
            icon = "terminal"
            size = 48.0
            "#,
        )
        .unwrap();
        assert_eq!(settings.magnification, 72.0);
        assert_eq!(settings.distance, DEFAULT_DISTANCE);
        assert_eq!(settings.items.len(), 1);
        assert_eq!(settings.items[0].icon, Glyph::Terminal);
        assert_eq!(settings.items[0].size, Some(48.0));
    }

    #[test]
    fn rejects_unknown_icon() {
        let err = Settings::parse(
            r#"
            [[items]]
            name = "X"
            icon = "spaceship"
            "#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("parsing config"));
    }

    #[test]
    fn rejects_non_positive_distance() {
        assert!(Settings::parse("distance = 0.0").is_err());
        assert!(Settings::parse("distance = -5.0").is_err());
        assert!(Settings::parse("magnification = -1.0").is_err());
    }

    #[test]
    fn rejects_values_the_sliders_cannot_reach() {
        let err = Settings::parse("magnification = 200.0").unwrap_err();
        assert!(format!("{err:#}").contains("between 20 and 160"));
        assert!(Settings::parse("distance = 500.0").is_err());
        assert!(Settings::parse("distance = 10.0").is_err());
        assert!(Settings::parse("magnification = 160.0\ndistance = 400.0").is_ok());
    }

    #[test]
    fn cli_overrides_file_values() {
        let mut settings = Settings::parse("magnification = 72.0\ndistance = 90.0").unwrap();
        settings.apply(&cli(&["--distance", "200"])).unwrap();
        assert_eq!(settings.magnification, 72.0);
        assert_eq!(settings.distance, 200.0);
    }

    #[test]
    fn cli_values_are_validated() {
        let mut settings = Settings::default();
        assert!(settings.apply(&cli(&["--magnification", "0"])).is_err());
        assert!(settings.apply(&cli(&["--magnification", "200"])).is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = load(&cli(&["--config", "/nonexistent/dockbar.toml"])).unwrap_err();
        assert!(format!("{err:#}").contains("reading config"));
    }
}
