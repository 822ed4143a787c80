use crate::utils::error::Result;
use crate::utils::validation::{
    validate_listen_addr, validate_positive_number, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ATIS_URL: &str = "https://www.egcbatis.co.uk/main/index.php";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "egcb-atis")]
#[command(about = "Textual ATIS service for Barton aerodrome (EGCB)")]
pub struct AppConfig {
    #[arg(long, default_value = DEFAULT_ATIS_URL)]
    pub atis_url: String,

    #[arg(long, default_value = "0.0.0.0")]
    pub listen_addr: String,

    #[arg(long, default_value = "5000")]
    pub port: u16,

    #[arg(long, default_value = "10")]
    pub request_timeout_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("atis_url", &self.atis_url)?;
        validate_listen_addr("listen_addr", &self.listen_addr)?;
        validate_positive_number("request_timeout_secs", self.request_timeout_secs, 1)?;
        Ok(())
    }
}
