use anyhow::Context;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

pub fn init(level: Level) -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("installing log subscriber")
}
