//! Converter configuration.

use grid_transform::WeatherType;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where payloads are read from and where layer files are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Directory holding the raw feed payloads.
    pub data_dir: PathBuf,

    /// Directory the converted layer files are written to.
    pub output_dir: PathBuf,

    /// Pretty-print output JSON.
    pub pretty: bool,

    /// Feed cycle label embedded in payload file names (`v2-wind-1200.json`).
    pub cycle: String,

    /// File name of the storm list inside `data_dir`.
    pub cyclone_file: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("weather-data"),
            output_dir: PathBuf::from("output"),
            pretty: false,
            cycle: "1200".to_string(),
            cyclone_file: "cyclone.json".to_string(),
        }
    }
}

impl ConverterConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup, such as a map in tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(val) = lookup("WEATHER_DATA_DIR") {
            config.data_dir = PathBuf::from(val);
        }

        if let Some(val) = lookup("WEATHER_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(val);
        }

        if let Some(val) = lookup("WEATHER_PRETTY_JSON") {
            config.pretty = val.to_lowercase() == "true" || val == "1";
        }

        if let Some(val) = lookup("WEATHER_CYCLE") {
            config.cycle = val;
        }

        if let Some(val) = lookup("WEATHER_CYCLONE_FILE") {
            config.cyclone_file = val;
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.cycle.is_empty() || !self.cycle.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("cycle must be digits, got '{}'", self.cycle));
        }

        if self.cyclone_file.is_empty() {
            return Err("cyclone_file must not be empty".to_string());
        }

        if self.data_dir == self.output_dir {
            return Err("output_dir must differ from data_dir".to_string());
        }

        Ok(())
    }

    /// Raw payload path for a field kind.
    pub fn payload_path(&self, kind: WeatherType) -> PathBuf {
        self.data_dir.join(format!("v2-{}-{}.json", kind.as_str(), self.cycle))
    }

    /// Converted layer path for a field kind.
    pub fn layer_path(&self, kind: WeatherType) -> PathBuf {
        self.output_dir.join(format!("{}-{}.json", kind.as_str(), self.cycle))
    }

    pub fn cyclone_path(&self) -> PathBuf {
        self.data_dir.join(&self.cyclone_file)
    }

    pub fn cyclone_layer_path(&self) -> PathBuf {
        self.output_dir.join("cyclones.json")
    }
}
