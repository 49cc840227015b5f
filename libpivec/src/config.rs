use std::path::PathBuf;

use errors::*;

pub const DEV_MEM: &'static str = "/dev/mem";

/// Settings for a single run, fixed once the command line is parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// `None` leaves the control register untouched.
    pub color: Option<bool>,
    pub verbose: bool,
    pub mem_device: PathBuf,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            color: None,
            verbose: false,
            mem_device: PathBuf::from(DEV_MEM),
        }
    }
}

pub fn parse_color(value: &str) -> Result<bool> {
    match value {
        "on" => Ok(true),
        "off" => Ok(false),
        other => Err(ErrorKind::InvalidColorValue(other.to_owned()).into()),
    }
}
