use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

const CONFIG_FILE: &str = "polyrec.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolyrecConfig {
    pub points: usize,
    pub precision: usize,
}

impl Default for PolyrecConfig {
    fn default() -> Self {
        Self {
            points: 7,     // Degree-6 fit unless the input says otherwise
            precision: 10, // Decimal places in printed values
        }
    }
}

impl PolyrecConfig {
    pub fn load() -> Self {
        Self::load_if_present().unwrap_or_default()
    }

    /// Load the config file if one exists in the working directory.
    /// Returns None when the file is absent or unreadable, so callers can
    /// tell "configured" apart from "defaulted".
    pub fn load_if_present() -> Option<Self> {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return None;
        }
        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => Some(config),
                Err(e) => {
                    eprintln!("Error parsing config file: {}. Using defaults.", e);
                    None
                }
            },
            Err(e) => {
                eprintln!("Error reading config file: {}. Using defaults.", e);
                None
            }
        }
    }

    pub fn save(&self) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        let mut file = fs::File::create(CONFIG_FILE)?;
        file.write_all(content.as_bytes())
    }

    pub fn restore() -> Self {
        let config = Self::default();
        let _ = config.save();
        config
    }
}
