//! inbox-count - run the unread-count extension outside the host
//!
//! Replays a JSON snapshot of label-provider responses through one update
//! pass and prints the payload the host would display.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::PreferenceStore;
use inbox::{
    ExtensionData, ExtensionPublisher, InboxExtension, Preferences, SnapshotLabelProvider,
    StaticAccountSource, UpdateReason, accounts_preference,
};
use log::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "inbox-count")]
#[command(version)]
#[command(about = "Unread-mail counts across accounts and inbox categories", long_about = None)]
struct Cli {
    /// JSON snapshot of label rows per account
    #[arg(short, long)]
    snapshot: PathBuf,

    /// Preferences file (defaults to ~/.config/inbox-count/preferences.json)
    #[arg(short, long)]
    prefs: Option<PathBuf>,

    /// Linked accounts; defaults to every account in the snapshot
    #[arg(short, long, value_delimiter = ',')]
    accounts: Vec<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one update pass and print the payload (default)
    Update {
        /// Host update reason code
        #[arg(long, default_value_t = 6)]
        reason: i32,

        /// Print the payload as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the label URIs the extension would watch
    Watch,

    /// Print the accounts picker summary
    Accounts,
}

/// Prints each payload to stdout
struct StdoutPublisher {
    json: bool,
}

impl ExtensionPublisher for StdoutPublisher {
    fn publish_update(&self, data: &ExtensionData) {
        if self.json {
            match serde_json::to_string_pretty(data) {
                Ok(json) => println!("{}", json),
                Err(e) => warn!("Failed to serialize payload: {}", e),
            }
            return;
        }

        if !data.visible {
            println!("(hidden) {}", data.expanded_title);
            return;
        }
        println!("[{}] {}", data.status, data.expanded_title);
        if !data.expanded_body.is_empty() {
            println!("{}", data.expanded_body);
        }
        match &data.click_intent.label_uri {
            Some(uri) => println!("-> {} ({})", data.click_intent.package, uri),
            None => println!("-> {}", data.click_intent.package),
        }
    }
}

/// Load preferences, falling back to defaults when the file is unusable
fn load_preferences(path: Option<PathBuf>) -> Preferences {
    let store = match path {
        Some(path) => PreferenceStore::open(path),
        None => PreferenceStore::open_default(),
    };
    match store {
        Ok(store) => Preferences::from_store(&store),
        Err(e) => {
            warn!("Using default preferences: {:#}", e);
            Preferences::default()
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    if cli.prefs.is_none() {
        if let Err(e) = config::init() {
            warn!("Failed to initialize config directory: {}", e);
        }
    }

    let provider = SnapshotLabelProvider::from_file(&cli.snapshot)
        .with_context(|| format!("Could not load snapshot {}", cli.snapshot.display()))?;
    let accounts = if cli.accounts.is_empty() {
        StaticAccountSource::new(provider.accounts())
    } else {
        StaticAccountSource::new(cli.accounts.iter().map(String::as_str))
    };
    let prefs = load_preferences(cli.prefs);
    let extension = InboxExtension::new(provider, accounts);

    match cli.command.unwrap_or(Command::Update {
        reason: 6,
        json: false,
    }) {
        Command::Update { reason, json } => {
            let data = extension.update_and_publish(
                UpdateReason::from_code(reason),
                &prefs,
                &StdoutPublisher { json },
            );
            info!("Published update, {} unread", data.status);
        }
        Command::Watch => {
            for uri in extension.on_initialize(false, &prefs) {
                println!("{}", uri);
            }
        }
        Command::Accounts => {
            let picker = accounts_preference(extension.account_source(), &prefs);
            println!("{}", picker.summary);
            for account in &picker.entries {
                let mark = if picker.selected.contains(account) { "x" } else { " " };
                println!("[{}] {}", mark, account);
            }
        }
    }

    Ok(())
}
