use anyhow::{Context, Result};
use chrono::NaiveDate;
use directories::BaseDirs;
use log::warn;
use serde::Deserialize;
use std::{collections::HashMap, fs, path::PathBuf};

use crate::keywords::Keywords;
use crate::parse_input::ParseOptions;

const DEFAULT_DATE_FORMAT: &str = "%A, %d %b %Y";

#[derive(Debug, Clone)]
pub struct Config {
    /// chrono format used when printing resolved dates to humans.
    pub date_format: String,
    /// Pins "today" instead of reading the clock. Useful for replaying old notes.
    pub reference_date: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    date_format: Option<String>,
    /// "YYYY-MM-DD"
    reference_date: Option<String>,
    /// Optional table:
    /// [synonyms]
    /// tmrw = "tomorrow"
    /// "nxt wk" = "next week"
    synonyms: Option<HashMap<String, String>>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native), apply defaults,
    /// and extend the global Keywords registry with user-defined synonyms if present.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config()?;
        Ok(Self::from_file_config(file_config))
    }

    /// Options that make the parser honour `reference_date`.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            reference_date: self.reference_date,
        }
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let reference_date = file_config
            .reference_date
            .as_deref()
            .and_then(Self::parse_reference_date);

        let date_format = file_config
            .date_format
            .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string());

        // Extend global keyword registry once at startup.
        Self::load_synonyms(&file_config.synonyms);

        Self {
            date_format,
            reference_date,
        }
    }

    fn parse_reference_date(s: &str) -> Option<NaiveDate> {
        match NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(e) => {
                warn!("ignoring reference_date '{s}': {e}");
                None
            }
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("eventdate")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("eventdate").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }

    /// Merge `[synonyms]` into the global Keywords registry.
    /// Omits aliases that collide with a canonical phrase (eg. "tomorrow").
    fn load_synonyms(synonyms: &Option<HashMap<String, String>>) {
        match synonyms {
            Some(map) if !map.is_empty() => {
                let pairs: Vec<(String, String)> = map
                    .iter()
                    .filter(|(alias, _)| {
                        let canonical = Keywords::is_canonical(alias);
                        if canonical {
                            warn!("ignoring synonym '{alias}': it is already a keyword");
                        }
                        !canonical
                    })
                    .map(|(a, t)| (a.clone(), t.clone()))
                    .collect();

                if !pairs.is_empty() {
                    Keywords::extend(&pairs);
                }
            }
            _ => {}
        }
    }
}
