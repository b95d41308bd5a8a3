mod config;
mod gui;
mod logging;
mod message;
mod style;
mod ui_timing;
mod widget;

use clap::Parser;
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    let cli = config::Cli::parse();
    logging::init(cli.log_level)?;

    let settings = config::load(&cli).inspect_err(|err| error!("{err:#}"))?;
    info!(
        magnification = settings.magnification,
        distance = settings.distance,
        items = settings.items.len(),
        "starting dock"
    );

    iced::application(
        move || gui::Dockbar::new(settings.clone()),
        gui::Dockbar::update,
        gui::Dockbar::view,
    )
    .title("Dockbar")
    .font(iced_fonts::LUCIDE_FONT_BYTES)
    .window_size((720.0, 360.0))
    .run()?;
    Ok(())
}
