use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use crate::catalog::CHANNELS;
use crate::client::AuthClient;
use crate::config;
use crate::playlist::build_playlist;
use crate::writer::write_playlist;

const GREETING: &str = "
WELCOME to the SmoothStreamsTV playlist generator!

This program will generate an .m3u8 playlist file with all available channels
for the SmoothStreamsTV IPTV provider, playable in media players and browsers.
Please note: server and channel names/numbers are sourced from SmoothStreamsTV,
and current as of October 3, 2018.";

#[derive(Parser)]
#[command(name = "sstv-playlist")]
#[command(about = "Generate an m3u8 playlist with your SmoothStreamsTV credentials", long_about = None)]
pub struct Cli {
    /// Run using environment variables exclusively, skipping all prompts
    #[arg(short, long)]
    pub env: bool,
}

pub async fn run_cli() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    println!("{}", GREETING.bold());

    let settings = config::resolve_settings(cli.env)?;

    let client = AuthClient::new();
    let token = client
        .fetch_auth_token(&settings.credentials, &settings.host)
        .await?;
    println!("{}", "\nThank you, authentication successful.".green());

    println!("{}", "\nPlease wait, generating playlist.".yellow());
    let playlist = build_playlist(&settings.server, &settings.host, &token);
    log::info!("generated playlist entries for {} channels", CHANNELS.len());

    let path = write_playlist(&playlist)?;
    println!("{}", "\nPlaylist built successfully, located at:".yellow());
    println!("{}", path.display().to_string().underline());

    Ok(())
}
