//! Hoop Shot entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::path::PathBuf;

    use clap::Parser;
    use hoop_shot::Settings;

    #[derive(Parser, Debug)]
    #[command(author, version, about = "Arcade basketball shooting game", long_about = None)]
    pub struct Args {
        /// JSON settings file
        #[arg(long)]
        pub config: Option<PathBuf>,
        /// Initial round length in seconds (10-120, steps of 10)
        #[arg(long = "time")]
        pub time_budget_secs: Option<u32>,
        /// Directory holding bounce.wav, swish.wav and buzzer.wav
        #[arg(long)]
        pub sound_dir: Option<PathBuf>,
        /// Start with sound cues muted
        #[arg(long)]
        pub mute: bool,
        /// Fixed seed for the wind
        #[arg(long)]
        pub seed: Option<u64>,
    }

    impl Args {
        /// Config file first, then flags on top
        pub fn into_settings(self) -> anyhow::Result<Settings> {
            let mut settings = match &self.config {
                Some(path) => Settings::load(path)?,
                None => Settings::default(),
            };
            if let Some(secs) = self.time_budget_secs {
                settings.time_budget_secs = secs;
            }
            if let Some(dir) = self.sound_dir {
                settings.sound_dir = dir;
            }
            if self.mute {
                settings.muted = true;
            }
            if self.seed.is_some() {
                settings.seed = self.seed;
            }
            Ok(settings.normalized())
        }
    }

}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    hoop_shot::platform::web::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = cli::Args::parse().into_settings()?;
    log::info!("Hoop Shot (native) starting...");
    hoop_shot::platform::native::run(settings)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
