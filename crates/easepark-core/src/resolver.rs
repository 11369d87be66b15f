// crates/easepark-core/src/resolver.rs

//! # District Resolver
//!
//! Turns a route parameter (`/district/:key`) into the set of canonical
//! districts the car-park list should be filtered by, plus the page title.
//!
//! Matching order, first hit wins:
//! 1. region (`hong_kong_island`, `Hong Kong Island`, `港島`, ...)
//! 2. district alias (`Central-Western`, `Central & Western`, `中西區`, ...)
//! 3. passthrough: the input itself, tidied up, as a pseudo-district
//!
//! Nothing here fails. Unknown input degrades to the passthrough label so
//! the page always has something to show.

use crate::carpark::CarparkRecord;
use crate::lang::Language;
use crate::registry::{DistrictKey, RegionKey};
use crate::text::{normalize_key, passthrough_label};
use crate::traits::Localize;
use serde::{Deserialize, Serialize};

/// How titles are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveOptions {
    /// Append the localized "Parking Information" suffix.
    pub title_suffix: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self { title_suffix: true }
    }
}

/// Which matching step produced a [`Resolution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "key", rename_all = "snake_case")]
pub enum Scope {
    Region(RegionKey),
    District(DistrictKey),
    Passthrough,
}

/// A district in a resolved set: a registry entry, or the best-effort
/// pseudo-district built from unmatched input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedDistrict {
    Known(DistrictKey),
    Unknown(String),
}

impl ResolvedDistrict {
    pub fn key(&self) -> Option<DistrictKey> {
        match self {
            ResolvedDistrict::Known(key) => Some(*key),
            ResolvedDistrict::Unknown(_) => None,
        }
    }

    /// Canonical (English) label; for a pseudo-district, the tidied input.
    pub fn canonical_name(&self) -> &str {
        match self {
            ResolvedDistrict::Known(key) => key.canonical_name(),
            ResolvedDistrict::Unknown(label) => label,
        }
    }
}

impl Localize for ResolvedDistrict {
    fn localized(&self, lang: Language) -> &str {
        match self {
            ResolvedDistrict::Known(key) => key.localized(lang),
            ResolvedDistrict::Unknown(label) => label,
        }
    }
}

/// Result of resolving one route parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    scope: Scope,
    districts: Vec<ResolvedDistrict>,
    title: String,
}

impl Resolution {
    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn districts(&self) -> &[ResolvedDistrict] {
        &self.districts
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_passthrough(&self) -> bool {
        self.scope == Scope::Passthrough
    }

    /// Canonical English names of the resolved districts, in order.
    pub fn canonical_names(&self) -> Vec<&str> {
        self.districts.iter().map(|d| d.canonical_name()).collect()
    }

    /// Whether a feed district string (any language, any registered
    /// spelling) falls inside this resolution.
    pub fn includes_district_name(&self, name: &str) -> bool {
        match self.scope {
            Scope::Passthrough => {
                let wanted = self
                    .districts
                    .iter()
                    .map(|d| normalize_key(d.canonical_name()))
                    .find(|k| !k.is_empty());
                match wanted {
                    Some(wanted) => normalize_key(name) == wanted,
                    None => false,
                }
            }
            _ => match DistrictKey::lookup(name) {
                Some(key) => self.districts.iter().any(|d| d.key() == Some(key)),
                None => false,
            },
        }
    }

    /// Whether a car park's district falls inside this resolution. Each of
    /// the record's district labels is tried, English first.
    pub fn includes(&self, record: &CarparkRecord) -> bool {
        record
            .district
            .iter()
            .any(|name| self.includes_district_name(name))
    }
}

/// Resolves route parameters against the static registry.
///
/// Stateless apart from its [`ResolveOptions`]; share freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistrictResolver {
    options: ResolveOptions,
}

impl DistrictResolver {
    pub fn new(options: ResolveOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ResolveOptions {
        self.options
    }

    /// Resolve `raw` and build the title in `lang`.
    pub fn resolve(&self, raw: &str, lang: Language) -> Resolution {
        let key = normalize_key(raw);

        if let Some(region) = RegionKey::from_normalized(&key) {
            return Resolution {
                scope: Scope::Region(region),
                districts: region
                    .districts()
                    .iter()
                    .copied()
                    .map(ResolvedDistrict::Known)
                    .collect(),
                title: self.title(region.localized(lang), lang),
            };
        }

        if let Some(district) = DistrictKey::from_normalized(&key) {
            return Resolution {
                scope: Scope::District(district),
                districts: vec![ResolvedDistrict::Known(district)],
                title: self.title(district.localized(lang), lang),
            };
        }

        let label = passthrough_label(raw);
        log::debug!("no region or district matches {raw:?}; passing through as {label:?}");
        Resolution {
            scope: Scope::Passthrough,
            title: self.title(&label, lang),
            districts: vec![ResolvedDistrict::Unknown(label)],
        }
    }

    fn title(&self, label: &str, lang: Language) -> String {
        if !self.options.title_suffix {
            return label.to_owned();
        }
        let suffix = title_suffix(lang);
        if label.is_empty() {
            return suffix.trim().to_owned();
        }
        format!("{label}{suffix}")
    }
}

/// Localized "Parking Information" suffix, including its leading space
/// where the language uses one.
pub fn title_suffix(lang: Language) -> &'static str {
    match lang {
        Language::En => " Parking Information",
        Language::Tc => "停車場資訊",
        Language::Sc => "停车场信息",
    }
}

/// Resolve with default options (titles carry the suffix).
///
/// ```rust
/// use easepark_core::{resolve, Language};
///
/// let r = resolve("Central-Western", Language::En);
/// assert_eq!(r.canonical_names(), ["Central and Western"]);
/// assert_eq!(r.title(), "Central and Western Parking Information");
/// ```
pub fn resolve(raw: &str, lang: Language) -> Resolution {
    DistrictResolver::default().resolve(raw, lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_spellings_resolve_identically() {
        let expected = resolve("hong_kong_island", Language::En);
        assert_eq!(expected.scope(), Scope::Region(RegionKey::HongKongIsland));
        assert_eq!(
            expected.canonical_names(),
            ["Central and Western", "Wan Chai", "Eastern", "Southern"]
        );
        for raw in ["Hong Kong Island", "hong-kong-island", "hong kong island", "HONG%20KONG%20ISLAND"] {
            assert_eq!(resolve(raw, Language::En), expected, "{raw}");
        }
    }

    #[test]
    fn district_alias_wins_over_fallback() {
        let r = resolve("Central-Western", Language::En);
        assert_eq!(r.scope(), Scope::District(DistrictKey::CentralAndWestern));
        assert_eq!(r.title(), "Central and Western Parking Information");
        assert_eq!(resolve("Central & Western", Language::En), r);
        assert_eq!(resolve("Central%20%26%20Western", Language::En), r);
    }

    #[test]
    fn unknown_input_passes_through() {
        let r = resolve("Unknown Place X", Language::En);
        assert!(r.is_passthrough());
        assert_eq!(r.canonical_names(), ["Unknown Place X"]);
        assert_eq!(r.title(), "Unknown Place X Parking Information");

        let r = resolve("tin-shui_wai", Language::Tc);
        assert_eq!(r.title(), "Tin Shui Wai停車場資訊");
    }

    #[test]
    fn titles_follow_language() {
        assert_eq!(resolve("kowloon", Language::Tc).title(), "九龍停車場資訊");
        assert_eq!(resolve("Sha Tin", Language::Sc).title(), "沙田区停车场信息");
        let bare = DistrictResolver::new(ResolveOptions { title_suffix: false });
        assert_eq!(bare.resolve("wan_chai", Language::En).title(), "Wan Chai");
    }

    #[test]
    fn blank_input_gets_suffix_only_title() {
        let r = resolve("  ", Language::En);
        assert!(r.is_passthrough());
        assert_eq!(r.title(), "Parking Information");
        assert!(!r.includes_district_name(""));
    }

    #[test]
    fn includes_matches_feed_spellings() {
        let island = resolve("hong kong island", Language::En);
        assert!(island.includes_district_name("Central & Western"));
        assert!(island.includes_district_name("灣仔區"));
        assert!(!island.includes_district_name("Sha Tin"));

        let odd = resolve("tsim-sha-tsui", Language::En);
        assert!(odd.includes_district_name("Tsim Sha Tsui"));
        assert!(!odd.includes_district_name("Yau Tsim Mong"));
    }
}
