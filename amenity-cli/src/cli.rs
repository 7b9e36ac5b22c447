//! Command-line arguments

use amenity_client::ClientConfig;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use shared::util::parse_amenity_id;

/// Book community amenities from the terminal
#[derive(Debug, Parser)]
#[command(name = "amenity", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Resident username; logs in before running the command
    #[arg(long, short = 'u', env = "AMENITY_USERNAME", global = true)]
    pub username: Option<String>,

    /// Resident password
    #[arg(long, short = 'p', env = "AMENITY_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Log filter (overridden by RUST_LOG)
    #[arg(long, env = "AMENITY_LOG", global = true)]
    pub log: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, env = "AMENITY_LOG_JSON", global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct ConnectionArgs {
    /// Host running the three services on their default ports
    #[arg(long, env = "AMENITY_HOST", default_value = "http://localhost", global = true)]
    pub host: String,

    /// Amenity service URL (overrides --host)
    #[arg(long, env = "AMENITY_API_URL", global = true)]
    pub amenity_url: Option<String>,

    /// Booking service URL (overrides --host)
    #[arg(long, env = "BOOKING_API_URL", global = true)]
    pub booking_url: Option<String>,

    /// User service URL (overrides --host)
    #[arg(long, env = "USER_API_URL", global = true)]
    pub user_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "AMENITY_TIMEOUT_SECS", default_value_t = 30, global = true)]
    pub timeout: u64,
}

impl ConnectionArgs {
    pub fn client_config(&self) -> ClientConfig {
        let defaults = ClientConfig::from_host(&self.host);
        ClientConfig::new(
            self.amenity_url.clone().unwrap_or(defaults.amenity_url),
            self.booking_url.clone().unwrap_or(defaults.booking_url),
            self.user_url.clone().unwrap_or(defaults.user_url),
        )
        .with_timeout(self.timeout)
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List amenities
    Amenities,

    /// Show availability of an amenity on a date
    Availability {
        #[arg(long, short = 'a', value_parser = amenity_id)]
        amenity: i64,
        /// Date (YYYY-MM-DD)
        #[arg(long, short = 'd')]
        date: NaiveDate,
    },

    /// Book a day (hall, BBQ) or an hour slot
    Book {
        #[arg(long, short = 'a', value_parser = amenity_id)]
        amenity: i64,
        /// Date (YYYY-MM-DD)
        #[arg(long, short = 'd')]
        date: NaiveDate,
        /// Slot start (HH:mm), required for hour-based amenities
        #[arg(long, short = 't')]
        time: Option<String>,
    },

    /// List your bookings
    Bookings,

    /// Cancel one of your bookings
    Cancel {
        booking_id: i64,
    },

    /// Register a resident account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        flat_no: String,
        #[arg(long)]
        contact: String,
    },

    /// Admin views
    Admin {
        #[command(subcommand)]
        command: AdminCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// List all bookings, optionally for one amenity
    Bookings {
        #[arg(long, short = 'a', value_parser = amenity_id)]
        amenity: Option<i64>,
    },

    /// Booking statistics
    Stats,
}

/// Amenity ids are coerced like form values ("12" and "12 " are both 12)
fn amenity_id(raw: &str) -> Result<i64, String> {
    parse_amenity_id(raw).ok_or_else(|| format!("'{raw}' is not an amenity id"))
}
