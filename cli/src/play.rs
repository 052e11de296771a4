//! Plays a sound from the pool: a random completion or notification sound,
//! or an explicit file name.

use clap::Parser;
use tracing::warn;

use chirp_core::audio::{AssetPool, Player};
use chirp_core::config::AppConfig;

#[derive(Parser)]
#[command(version, about = "Plays a sound from the chirp pool")]
struct Cli {
    /// "stop", "notification", or a file name in the sounds directory
    sound: String,
}

fn main() {
    let cli = Cli::parse();
    let _ = dotenvy::dotenv();
    let _guard = chirp_cli::logging::init();

    let config = AppConfig::load();
    let pool = AssetPool::new(config.sounds_dir());
    let player = Player::new(config.volume, config.playback_timeout());
    let mut rng = rand::thread_rng();

    let picked = match cli.sound.as_str() {
        "stop" => pool.pick_stop(&mut rng),
        "notification" => pool.pick_notification(&mut rng, config.engineer_name().as_deref()),
        name => Ok(pool.resolve_file(name)),
    };

    // Attempted playback always exits 0; the printed line is the result.
    match picked.and_then(|path| player.play(&path).map(|()| path)) {
        Ok(path) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            println!("Played sound: {name}");
        }
        Err(e) => {
            warn!(error = %e, "playback failed");
            println!("Could not play sound: {e}");
        }
    }
}
