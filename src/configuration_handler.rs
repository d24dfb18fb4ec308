use crate::configuration::Configuration;
use clap::Parser;

const DEFAULT_ALLOWED_ORIGIN: &str = "https://restaurant-table-booking-system-beg6.vercel.app";

#[derive(Debug, Clone, Parser)]
#[command(name = "table_booking", about = "Restaurant table reservation service")]
pub struct ConfigurationHandler {
    /// Port the HTTP server listens on
    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,

    /// Browser origin allowed to call the API. May be repeated or comma separated.
    #[arg(
        long = "allowed-origin",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = DEFAULT_ALLOWED_ORIGIN
    )]
    allowed_origins: Vec<String>,
}

impl ConfigurationHandler {
    pub fn parse_arguments() -> Self {
        let _ = dotenvy::dotenv();
        Self::parse()
    }
}

impl Configuration for ConfigurationHandler {
    fn port(&self) -> u16 {
        self.port
    }

    fn allowed_origins(&self) -> Vec<String> {
        self.allowed_origins.clone()
    }
}
