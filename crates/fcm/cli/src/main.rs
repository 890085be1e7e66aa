//! fcm - send push notifications from the command line.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::WrapErr as _;
use fcm_core::{Message, MessageContent, MessagingPayload, MulticastMessage, NotificationPayload};
use fcm_service::{FcmOptions, FcmService, PlatformOptions};
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Parser)]
#[command(name = "fcm")]
#[command(about = "Firebase Cloud Messaging client", long_about = None)]
struct Cli {
    /// Config file (defaults to $FCM_CONFIG or the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send to one or more device tokens
    Device {
        #[arg(long = "token", required = true)]
        tokens: Vec<String>,
        #[command(flatten)]
        payload: PayloadArgs,
    },

    /// Send to a topic
    Topic {
        topic: String,
        #[command(flatten)]
        payload: PayloadArgs,
    },

    /// Send to a device group
    Group {
        notification_key: String,
        #[command(flatten)]
        payload: PayloadArgs,
    },

    /// Send to devices matching a topic condition
    Condition {
        condition: String,
        #[command(flatten)]
        payload: PayloadArgs,
    },

    /// Send an APNs alert to iOS devices
    Ios(PlatformArgs),

    /// Send a data notification to Android devices
    Android(PlatformArgs),

    /// Send message content read from a JSON file to devices
    Raw {
        #[arg(long = "token", required = true)]
        tokens: Vec<String>,
        #[arg(long)]
        content: PathBuf,
    },

    /// Subscribe devices to a topic
    Subscribe {
        topic: String,
        #[arg(long = "token", required = true)]
        tokens: Vec<String>,
    },

    /// Unsubscribe devices from a topic
    Unsubscribe {
        topic: String,
        #[arg(long = "token", required = true)]
        tokens: Vec<String>,
    },

    /// Send one message read from a JSON file
    Send {
        message: PathBuf,
        #[arg(long)]
        dry_run: bool,
    },

    /// Send a multicast message read from a JSON file
    Multicast {
        message: PathBuf,
        #[arg(long)]
        dry_run: bool,
    },

    /// Send a list of messages read from a JSON file
    SendAll {
        messages: PathBuf,
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the loaded configuration
    Config,
}

#[derive(Args)]
struct PayloadArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    body: Option<String>,
    /// Data entry as KEY=VALUE, repeatable
    #[arg(long = "data", value_parser = parse_key_value)]
    data: Vec<(String, String)>,
    /// Deliver in the background without an alert
    #[arg(long)]
    silent: bool,
}

impl PayloadArgs {
    fn payload(&self) -> MessagingPayload {
        let notification = (self.title.is_some() || self.body.is_some()).then(|| {
            NotificationPayload {
                title: self.title.clone(),
                body: self.body.clone(),
                ..Default::default()
            }
        });
        let data = (!self.data.is_empty())
            .then(|| self.data.iter().cloned().collect::<BTreeMap<_, _>>());

        MessagingPayload { data, notification }
    }
}

#[derive(Args)]
struct PlatformArgs {
    #[arg(long = "token", required = true)]
    tokens: Vec<String>,
    #[arg(long)]
    title: String,
    #[arg(long)]
    body: String,
    #[arg(long)]
    priority: Option<String>,
    #[arg(long)]
    expiration: Option<u64>,
    #[arg(long)]
    sound: Option<String>,
}

impl PlatformArgs {
    fn options(&self) -> PlatformOptions {
        PlatformOptions {
            priority: self.priority.clone(),
            expiration: self.expiration,
            sound: self.sound.clone(),
        }
    }
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got {s:?}"))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> color_eyre::eyre::Result<T> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).wrap_err_with(|| format!("failed to parse {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> color_eyre::eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let options = FcmOptions::load(cli.config.as_deref()).wrap_err("failed to load config")?;

    if let Commands::Config = cli.command {
        println!("Config file: {:?}\n", FcmOptions::config_path());
        return print_json(&options);
    }

    let service = FcmService::from_options(&options)
        .await
        .wrap_err("failed to initialize FCM")?;

    match cli.command {
        Commands::Device { tokens, payload } => print_json(
            &service
                .send_to_device(&tokens, &payload.payload(), payload.silent)
                .await?,
        ),
        Commands::Topic { topic, payload } => print_json(
            &service
                .send_to_topic(&topic, &payload.payload(), payload.silent)
                .await?,
        ),
        Commands::Group {
            notification_key,
            payload,
        } => print_json(
            &service
                .send_to_device_group(&notification_key, &payload.payload(), payload.silent)
                .await?,
        ),
        Commands::Condition { condition, payload } => print_json(
            &service
                .send_to_condition(&condition, &payload.payload(), payload.silent)
                .await?,
        ),
        Commands::Ios(args) => print_json(
            &service
                .send_notification_to_ios(&args.tokens, &args.title, &args.body, &args.options())
                .await?,
        ),
        Commands::Android(args) => print_json(
            &service
                .send_notification_to_android(
                    &args.tokens,
                    &args.title,
                    &args.body,
                    &args.options(),
                )
                .await?,
        ),
        Commands::Raw { tokens, content } => {
            let content: MessageContent = read_json(&content)?;
            print_json(
                &service
                    .send_notification_raw_message(&tokens, &content)
                    .await?,
            )
        }
        Commands::Subscribe { topic, tokens } => {
            print_json(&service.subscribe_to_topic(&tokens, &topic).await?)
        }
        Commands::Unsubscribe { topic, tokens } => {
            print_json(&service.unsubscribe_from_topic(&tokens, &topic).await?)
        }
        Commands::Send { message, dry_run } => {
            let message: Message = read_json(&message)?;
            print_json(&service.send(&message, dry_run).await?)
        }
        Commands::Multicast { message, dry_run } => {
            let message: MulticastMessage = read_json(&message)?;
            print_json(&service.send_multicast(&message, dry_run).await?)
        }
        Commands::SendAll { messages, dry_run } => {
            let messages: Vec<Message> = read_json(&messages)?;
            print_json(&service.send_all(&messages, dry_run).await?)
        }
        Commands::Config => Ok(()),
    }
}
