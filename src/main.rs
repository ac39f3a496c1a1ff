use clap::{Parser, Subcommand};
use std::io::Write;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use channel_dispatch::{
    ChannelFactory, ChannelKind, Config, DispatchService, SendRequest, Session, VideoRequest,
};

#[derive(Parser)]
#[command(name = "channel-dispatch")]
#[command(about = "Send a message through a chosen messaging channel", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long, global = true, default_value = "config.yaml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Choose a channel and message interactively (default)
    Run,
    /// Send a single message without prompting
    Send {
        /// Channel name: whatsapp, telegram, facebook or instagram
        #[arg(long)]
        channel: String,

        /// Recipient
        #[arg(long)]
        to: String,

        /// Send as a video message
        #[arg(long)]
        video: bool,

        /// Video file reference
        #[arg(long, requires = "video")]
        file: Option<String>,

        /// Video file format
        #[arg(long, requires = "video")]
        format: Option<String>,

        /// Video duration in minutes
        #[arg(long, requires = "video", allow_negative_numbers = true, default_value_t = 0)]
        duration: i64,

        /// Message content
        content: String,
    },
    /// List supported channels
    Channels,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let loaded = Config::resolve(&cli.config);
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => Config::load_env(),
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .init();

    if let Err(e) = &loaded {
        tracing::warn!("Failed to load config: {}, using defaults", e);
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_session(&config),
        Commands::Send {
            channel,
            to,
            video,
            file,
            format,
            duration,
            content,
        } => {
            let request = SendRequest {
                channel,
                recipient: to,
                content,
                video: video.then(|| VideoRequest {
                    file: file.unwrap_or_default(),
                    format: format.unwrap_or_default(),
                    duration_minutes: duration,
                }),
            };
            let stdout = std::io::stdout();
            send_once(&config, request, &mut stdout.lock())
        }
        Commands::Channels => {
            for kind in ChannelKind::ALL {
                println!("{}. {} ({})", kind.position(), kind.label(), kind.name());
            }
            ExitCode::SUCCESS
        }
        Commands::Version => {
            println!("channel-dispatch v{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Commands::InitConfig => init_config(),
    }
}

fn dispatcher(config: &Config) -> DispatchService {
    DispatchService::new(ChannelFactory::new().with_timestamp_format(&config.output.timestamp_format))
}

fn run_session(config: &Config) -> ExitCode {
    tracing::info!("Starting {}", config.app.name);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock()).with_dispatcher(dispatcher(config));

    match session.run() {
        Ok(outcome) => {
            tracing::debug!("Outcome: {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Session failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn send_once(config: &Config, request: SendRequest, out: &mut dyn Write) -> ExitCode {
    match dispatcher(config).send_request(request, chrono::Local::now(), out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Send failed: {}", e);
            let _ = writeln!(std::io::stderr(), "Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_config() -> ExitCode {
    match Config::default().to_yaml() {
        Ok(yaml) => {
            println!("{}", yaml);
            println!("\nSave this to config.yaml and adjust as needed.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_request(channel: &str) -> SendRequest {
        SendRequest {
            channel: channel.to_string(),
            recipient: "Alice".to_string(),
            content: "Hello".to_string(),
            video: None,
        }
    }

    #[test]
    fn test_send_known_channel_succeeds() {
        let mut out = Vec::new();
        let code = send_once(&Config::default(), text_request("WHATSAPP"), &mut out);
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(String::from_utf8(out).unwrap().contains("via WhatsApp to Alice"));
    }

    #[test]
    fn test_send_unrecognized_channel_fails() {
        let mut out = Vec::new();
        let code = send_once(&Config::default(), text_request("signal"), &mut out);
        assert_eq!(code, ExitCode::FAILURE);
        assert!(out.is_empty());
    }

    #[test]
    fn test_cli_parses_send() {
        let cli = Cli::try_parse_from([
            "channel-dispatch", "send", "--channel", "telegram", "--to", "Bob",
            "--video", "--file", "clip.mp4", "--format", "mp4", "--duration", "-3", "Watch",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Send { channel, video, duration, content, .. }) => {
                assert_eq!(channel, "telegram");
                assert!(video);
                assert_eq!(duration, -3);
                assert_eq!(content, "Watch");
            }
            _ => panic!("expected send"),
        }
    }

    #[test]
    fn test_cli_file_requires_video() {
        assert!(Cli::try_parse_from([
            "channel-dispatch", "send", "--channel", "telegram", "--to", "Bob", "--file", "x", "hi",
        ])
        .is_err());
    }
}
