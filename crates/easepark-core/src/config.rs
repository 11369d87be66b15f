// crates/easepark-core/src/config.rs

//! Explicit display settings.
//!
//! Language, theme and list preferences are a plain value that callers load
//! once and pass down. Nothing in the crate reads global state.

use crate::error::Result;
use crate::lang::Language;
use crate::ranker::{CarparkFilter, CarparkRanker, SortColumn, SortDirection};
use crate::resolver::{DistrictResolver, ResolveOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// User-facing settings, typically read from `settings.toml`:
///
/// ```toml
/// lang = "tc"
/// theme = "dark"
/// vehicle_type = "P"
/// open_only = true
/// sort = "name"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub lang: Language,
    pub theme: Theme,
    /// Vehicle-type code used for vacancy ranking.
    pub vehicle_type: String,
    pub open_only: bool,
    pub sort: SortColumn,
    pub direction: SortDirection,
    pub title_suffix: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lang: Language::En,
            theme: Theme::Light,
            vehicle_type: "P".to_owned(),
            open_only: false,
            sort: SortColumn::Vacancy,
            direction: SortDirection::Natural,
            title_suffix: true,
        }
    }
}

impl Settings {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_toml_str(&text)?;
        log::debug!("settings loaded from {}", path.as_ref().display());
        Ok(settings)
    }

    pub fn resolver(&self) -> DistrictResolver {
        DistrictResolver::new(ResolveOptions {
            title_suffix: self.title_suffix,
        })
    }

    /// A ranker configured from these settings, with `open_only` applied.
    pub fn ranker(&self) -> CarparkRanker {
        CarparkRanker::new(self.vehicle_type.as_str())
            .lang(self.lang)
            .sort_by(self.sort, self.direction)
            .filter(CarparkFilter::new().open_only(self.open_only))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_use_defaults() {
        let s = Settings::from_toml_str("lang = \"sc\"\ntheme = \"dark\"").unwrap();
        assert_eq!(s.lang, Language::Sc);
        assert_eq!(s.theme, Theme::Dark);
        assert_eq!(s.vehicle_type, "P");
        assert!(s.title_suffix);
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
    }

    #[test]
    fn bad_value_is_an_error() {
        assert!(Settings::from_toml_str("lang = 3").is_err());
    }

    #[test]
    fn ranker_reflects_settings() {
        let s = Settings {
            vehicle_type: " M ".into(),
            ..Settings::default()
        };
        assert_eq!(s.ranker().vehicle_type(), "M");
    }
}
