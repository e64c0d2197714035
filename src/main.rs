use tokio::io::BufReader;
use tracing::{error, info};

use meetingbot::{Config, MeetingRoom};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    // Initialize logging
    if let Err(e) = meetingbot::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        meetingbot::logging::init_console_only(&config.logging.level);
    }

    info!(nick = %config.bot.nick, room = %config.bot.room, "meetingbot starting");

    let room = MeetingRoom::new(&config.bot.room);
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    if let Err(e) = meetingbot::console::run(
        &room,
        &config.bot.nick,
        &config.bot.console_user,
        stdin,
        stdout,
    )
    .await
    {
        error!("console session failed: {e}");
        std::process::exit(1);
    }

    info!("meetingbot stopped");
}
