use clap::{Args, Subcommand};

use crate::config::AppConfig;
use crate::error::AppResult;

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Show the resolved configuration (secrets masked).
    Show,
}

pub fn run(command: ConfigCommand) -> AppResult<()> {
    match command {
        ConfigCommand::Show => run_show(),
    }
}

fn run_show() -> AppResult<()> {
    let cfg = AppConfig::load()?;
    for line in describe(&cfg) {
        println!("{line}");
    }
    Ok(())
}

fn describe(cfg: &AppConfig) -> Vec<String> {
    vec![
        format!("Account email: {}", display_value(&cfg.email)),
        format!("API token: {}", mask_secret(&cfg.api_token)),
        format!("Subdomain: {}", cfg.subdomain),
        format!("API base URL: {}", display_value(&cfg.api_base_url)),
        format!("Payload directory: {}", cfg.payload_dir.display()),
        format!("Listen address: {}", cfg.bind),
    ]
}

fn display_value(value: &Option<String>) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
        .unwrap_or_else(|| "<not set>".to_string())
}

fn mask_secret(value: &Option<String>) -> String {
    match value {
        Some(token) if token.chars().count() > 6 => {
            let chars: Vec<char> = token.chars().collect();
            let prefix: String = chars[..3].iter().collect();
            let suffix: String = chars[chars.len() - 3..].iter().collect();
            format!("{prefix}***{suffix}")
        }
        Some(token) if !token.is_empty() => "***".to_string(),
        _ => "<not set>".to_string(),
    }
}
