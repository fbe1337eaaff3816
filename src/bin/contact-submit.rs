//! Send a message through the contact form from a terminal
//!
//! Fields not given as flags are prompted for. The result is printed the
//! way the page banner shows it: style class, then text.
//!
//! Usage: contact-submit [--base-url URL] [--name NAME] [--email EMAIL] [--message TEXT]

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use contact_form::config::BASE_URL_ENV;
use contact_form::ui::{FormFields, StatusBanner, SubmitButton};
use contact_form::{
    ContactConfig, Field, FormSubmitHandler, HttpTransport, Status, SubmitEvent, SubmitOutcome,
};

#[derive(Parser, Debug)]
#[command(name = "contact-submit", version, about = "Submit the contact form")]
struct Cli {
    #[arg(long, help = "Server origin (overrides CONTACT_BASE_URL)")]
    base_url: Option<String>,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    message: Option<String>,
    #[arg(long, default_value = "", hide = true)]
    hp: String,
}

/// Banner rendered as a line on stdout
struct ConsoleBanner;

impl StatusBanner for ConsoleBanner {
    fn show(&self, status: &Status) {
        println!("[{}] {}", status.kind.class_name(), status.text);
    }
}

fn prompt(label: &str) -> anyhow::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .with_context(|| format!("Failed to read {}", label))?;
    Ok(line)
}

fn field_value(given: Option<String>, label: &str) -> anyhow::Result<String> {
    match given {
        Some(value) => Ok(value),
        None => prompt(label),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = ContactConfig::resolve(cli.base_url, std::env::var(BASE_URL_ENV).ok())?;
    log::info!("Contact endpoint: {}", config.endpoint_url());

    let form = FormFields::new()
        .with(Field::Name, field_value(cli.name, "Ad və soyad")?)
        .with(Field::Email, field_value(cli.email, "Email")?)
        .with(Field::Message, field_value(cli.message, "Mesaj")?)
        .with(Field::Honeypot, cli.hp);

    let transport = HttpTransport::new(&config).context("Failed to create HTTP client")?;
    let mut handler = FormSubmitHandler::new(transport, form, SubmitButton::new(), ConsoleBanner);

    let outcome = handler.on_submit(&mut SubmitEvent::new()).await;
    if outcome != SubmitOutcome::Accepted {
        std::process::exit(1);
    }

    Ok(())
}
