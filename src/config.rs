//! Configuration and CLI argument handling

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "event-countdown")]
#[command(about = "A small HTTP service that displays a live countdown to an event")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Event date and time, e.g. 2026-12-31T23:59 or an RFC 3339 timestamp
    #[arg(short, long, env = "COUNTDOWN_EVENT_DATE")]
    pub event_date: Option<String>,

    /// Title shown above the countdown
    #[arg(short, long, env = "COUNTDOWN_TITLE")]
    pub title: Option<String>,

    /// IANA timezone of the event date, e.g. Australia/Perth
    #[arg(short = 'z', long, env = "COUNTDOWN_TIMEZONE")]
    pub timezone: Option<String>,

    /// Screen position: {top,middle,bottom}-{left,middle,right}
    #[arg(long, env = "COUNTDOWN_POSITION")]
    pub position: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
