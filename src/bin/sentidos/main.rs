//! sentidos - the "Sentidos con Vida" page, with ambient audio feedback
//!
//! Run with: cargo run --bin sentidos
//!
//! Click or touch anywhere to unlock audio; hover and Tab around for the
//! feedback textures, and try the ♪ bienvenida control for the welcome
//! chord.

mod app;
mod page;
mod ui;

use app::Sentidos;
use sentidos_audio::config::FeedbackConfig;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    Sentidos::new()
        .config(FeedbackConfig::default().with_master_gain(0.8))
        .run()
}
