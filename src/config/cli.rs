use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "reservation-desk")]
#[command(about = "Check table availability and request reservations")]
pub struct CliConfig {
    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "API base URL (overrides config and RESERVATION_API_BASE_URL)")]
    pub api_base_url: Option<String>,

    #[arg(long, help = "Restaurant IANA time zone, e.g. America/New_York")]
    pub timezone: Option<String>,

    #[arg(long, help = "Pin the current time (RFC 3339), e.g. 2026-10-16T18:30:00-04:00")]
    pub now: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    #[command(about = "Show the weekly opening hours")]
    Hours,
    #[command(about = "List bookable time slots for a date")]
    Slots {
        #[arg(long, help = "YYYY-MM-DD")]
        date: String,
    },
    #[command(about = "Request a reservation")]
    Book(BookArgs),
}

#[derive(Debug, Clone, Args)]
pub struct BookArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long, help = "YYYY-MM-DD")]
    pub date: String,

    #[arg(long, help = "Slot label such as \"7:00 PM\" or 19:00")]
    pub time: String,

    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=8))]
    pub guests: u8,

    #[arg(long, help = "Sign up for the newsletter")]
    pub newsletter: bool,
}

impl CliConfig {
    /// 命令列的設定優先於檔案與環境變數
    pub fn app_config(&self) -> crate::Result<crate::AppConfig> {
        let config = crate::AppConfig::load(self.config.as_deref())?
            .with_base_url_override(self.api_base_url.clone())
            .with_timezone_override(self.timezone.clone());
        Ok(config)
    }
}
