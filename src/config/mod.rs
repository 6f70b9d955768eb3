// SPDX-License-Identifier: MPL-2.0
//! Event configuration: what is being celebrated, where, when, and how to
//! RSVP. Loaded from an `event.toml` in the platform config directory and
//! falling back to the compiled-in defaults for anything missing or
//! malformed. Transient page state (RSVP, photos, selection) is never
//! written here; only the event definition is persisted.

pub mod defaults;

use crate::error::Result;
use crate::invite::deeplink::RsvpTarget;
use crate::invite::song::{Catalog, Song};
use crate::ui::theming::ThemeMode;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "event.toml";
const APP_NAME: &str = "BeachBash";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub event: EventSection,
    #[serde(default)]
    pub venue: VenueSection,
    #[serde(default = "defaults::rsvp")]
    pub rsvp: RsvpTarget,
    #[serde(default = "defaults::songs")]
    pub songs: Vec<Song>,
    #[serde(default)]
    pub general: GeneralSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EventSection {
    pub title: String,
    pub subtitle: String,
    pub schedule: String,
    pub gift_line: String,
    pub blurb: String,
    /// Event start in `%Y-%m-%dT%H:%M:%S` local time.
    pub starts_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VenueSection {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub directions_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GeneralSection {
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl Default for EventSection {
    fn default() -> Self {
        Self {
            title: defaults::TITLE.to_string(),
            subtitle: defaults::SUBTITLE.to_string(),
            schedule: defaults::SCHEDULE.to_string(),
            gift_line: defaults::GIFT_LINE.to_string(),
            blurb: defaults::BLURB.to_string(),
            starts_at: defaults::STARTS_AT.to_string(),
        }
    }
}

impl Default for VenueSection {
    fn default() -> Self {
        Self {
            name: defaults::VENUE_NAME.to_string(),
            latitude: defaults::LATITUDE,
            longitude: defaults::LONGITUDE,
            directions_url: defaults::DIRECTIONS_URL.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            event: EventSection::default(),
            venue: VenueSection::default(),
            rsvp: defaults::rsvp(),
            songs: defaults::songs(),
            general: GeneralSection::default(),
        }
    }
}

impl Config {
    /// Event start as a timestamp. A malformed `starts_at` falls back to
    /// the compiled-in default rather than failing the whole page.
    #[must_use]
    pub fn starts_at(&self) -> NaiveDateTime {
        parse_starts_at(&self.event.starts_at).unwrap_or_else(|| {
            eprintln!(
                "Unparseable event.starts_at {:?}, using default",
                self.event.starts_at
            );
            parse_starts_at(defaults::STARTS_AT).expect("default start date parses")
        })
    }

    /// The immutable song catalog for this run.
    #[must_use]
    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.songs.clone())
    }
}

fn parse_starts_at(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").ok()
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the event definition, preferring `override_path` when given.
/// Any failure degrades to the defaults with a diagnostic line.
#[must_use]
pub fn load(override_path: Option<&Path>) -> Config {
    let path = override_path
        .map(Path::to_path_buf)
        .or_else(get_default_config_path);

    if let Some(path) = path {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return config,
                Err(err) => eprintln!("Failed to load {}: {err}", path.display()),
            }
        }
    }
    Config::default()
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
