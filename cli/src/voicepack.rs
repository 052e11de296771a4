//! Generates the voicepack: every phrase in the catalog rendered to WAV,
//! through OpenAI speech synthesis when a key is present and the platform
//! synthesizer otherwise.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::warn;

use chirp_core::config::AppConfig;
use chirp_core::tts::{self, OpenAiTts, TtsError, voicepack_entries};

#[derive(Parser)]
#[command(version, about = "Generates the chirp voicepack WAV files")]
struct Cli {
    /// Regenerate files that already exist
    #[arg(long)]
    force: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let _ = dotenvy::dotenv();
    let _guard = chirp_cli::logging::init();

    let config = AppConfig::load();
    let sounds_dir = config.sounds_dir();
    if let Err(e) = std::fs::create_dir_all(&sounds_dir) {
        eprintln!(
            "Cannot create sounds directory {}: {e}",
            sounds_dir.display()
        );
        return ExitCode::FAILURE;
    }

    let openai = OpenAiTts::from_env();
    match &openai {
        Some(_) => println!("Using OpenAI speech synthesis"),
        None => println!("OPENAI_API_KEY not set, using the platform synthesizer"),
    }
    println!("Writing to {}", sounds_dir.display());

    let entries = voicepack_entries(config.engineer_name().as_deref());
    let (mut generated, mut skipped, mut failed) = (0usize, 0usize, 0usize);

    for entry in &entries {
        let dest = sounds_dir.join(&entry.file_name);
        if dest.exists() && !cli.force {
            println!("Skipping {} (already exists)", entry.file_name);
            skipped += 1;
            continue;
        }

        match generate(openai.as_ref(), &entry.text, &dest).await {
            Ok(()) => {
                println!("Generated {}", entry.file_name);
                generated += 1;
            }
            Err(e) => {
                println!("Failed {}: {e}", entry.file_name);
                failed += 1;
            }
        }
    }

    println!("{generated} generated, {skipped} skipped, {failed} failed");

    // Non-zero only on total failure: nothing produced, at least one attempt failed
    if generated == 0 && failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

async fn generate(openai: Option<&OpenAiTts>, text: &str, dest: &Path) -> Result<(), TtsError> {
    if let Some(client) = openai {
        match client.synthesize(text, dest).await {
            Ok(()) => return Ok(()),
            Err(e) => warn!(error = %e, "openai synthesis failed, falling back"),
        }
    }
    tts::local::synthesize(text, dest, tts::local::SYNTH_TIMEOUT)
}
