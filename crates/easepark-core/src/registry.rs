// crates/easepark-core/src/registry.rs

//! # District Registry
//!
//! The single source of truth for Hong Kong's 3 regions and 18 districts.
//! Labels are stored once per district in all three languages; every other
//! spelling the client has to accept lives in the alias list next to it.
//!
//! **Structure:** `RegionKey` -> ordered `&[DistrictKey]`, and each
//! `DistrictKey` points back to exactly one `RegionKey`.

use crate::lang::{Language, Localized};
use crate::text::normalize_key;
use crate::traits::Localize;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One of the three top-level regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionKey {
    HongKongIsland,
    Kowloon,
    NewTerritories,
}

/// One of the 18 districts, in registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistrictKey {
    CentralAndWestern,
    WanChai,
    Eastern,
    Southern,
    YauTsimMong,
    ShamShuiPo,
    KowloonCity,
    WongTaiSin,
    KwunTong,
    KwaiTsing,
    TsuenWan,
    YuenLong,
    TuenMun,
    North,
    TaiPo,
    ShaTin,
    SaiKung,
    Islands,
}

struct RegionEntry {
    key: RegionKey,
    id: &'static str,
    labels: Localized<&'static str>,
    aliases: &'static [&'static str],
    districts: &'static [DistrictKey],
}

struct DistrictEntry {
    key: DistrictKey,
    region: RegionKey,
    labels: Localized<&'static str>,
    /// Extra spellings beyond the three labels (URL slugs, `&` forms,
    /// Chinese names without the trailing 區/区).
    aliases: &'static [&'static str],
}

use DistrictKey as D;

static REGIONS: [RegionEntry; 3] = [
    RegionEntry {
        key: RegionKey::HongKongIsland,
        id: "hong_kong_island",
        labels: Localized::new("Hong Kong Island", "港島", "港岛"),
        aliases: &["Hong Kong", "HK Island", "香港島", "香港岛"],
        districts: &[D::CentralAndWestern, D::WanChai, D::Eastern, D::Southern],
    },
    RegionEntry {
        key: RegionKey::Kowloon,
        id: "kowloon",
        labels: Localized::new("Kowloon", "九龍", "九龙"),
        aliases: &[],
        districts: &[
            D::YauTsimMong,
            D::ShamShuiPo,
            D::KowloonCity,
            D::WongTaiSin,
            D::KwunTong,
        ],
    },
    RegionEntry {
        key: RegionKey::NewTerritories,
        id: "new_territories",
        labels: Localized::new("New Territories", "新界", "新界"),
        aliases: &["NT"],
        districts: &[
            D::KwaiTsing,
            D::TsuenWan,
            D::YuenLong,
            D::TuenMun,
            D::North,
            D::TaiPo,
            D::ShaTin,
            D::SaiKung,
            D::Islands,
        ],
    },
];

// Indexed by `DistrictKey as usize`.
static DISTRICTS: [DistrictEntry; 18] = [
    DistrictEntry {
        key: D::CentralAndWestern,
        region: RegionKey::HongKongIsland,
        labels: Localized::new("Central and Western", "中西區", "中西区"),
        aliases: &["Central & Western", "Central-Western", "Central/Western", "中西"],
    },
    DistrictEntry {
        key: D::WanChai,
        region: RegionKey::HongKongIsland,
        labels: Localized::new("Wan Chai", "灣仔區", "湾仔区"),
        aliases: &["Wan-Chai", "Wanchai", "灣仔", "湾仔"],
    },
    DistrictEntry {
        key: D::Eastern,
        region: RegionKey::HongKongIsland,
        labels: Localized::new("Eastern", "東區", "东区"),
        aliases: &["East", "東", "东"],
    },
    DistrictEntry {
        key: D::Southern,
        region: RegionKey::HongKongIsland,
        labels: Localized::new("Southern", "南區", "南区"),
        aliases: &["South", "南"],
    },
    DistrictEntry {
        key: D::YauTsimMong,
        region: RegionKey::Kowloon,
        labels: Localized::new("Yau Tsim Mong", "油尖旺區", "油尖旺区"),
        aliases: &["Yau-Tsim-Mong", "油尖旺"],
    },
    DistrictEntry {
        key: D::ShamShuiPo,
        region: RegionKey::Kowloon,
        labels: Localized::new("Sham Shui Po", "深水埗區", "深水埗区"),
        aliases: &["Sham-Shui-Po", "深水埗"],
    },
    DistrictEntry {
        key: D::KowloonCity,
        region: RegionKey::Kowloon,
        labels: Localized::new("Kowloon City", "九龍城區", "九龙城区"),
        aliases: &["Kowloon-City", "九龍城", "九龙城"],
    },
    DistrictEntry {
        key: D::WongTaiSin,
        region: RegionKey::Kowloon,
        labels: Localized::new("Wong Tai Sin", "黃大仙區", "黄大仙区"),
        aliases: &["Wong-Tai-Sin", "黃大仙", "黄大仙"],
    },
    DistrictEntry {
        key: D::KwunTong,
        region: RegionKey::Kowloon,
        labels: Localized::new("Kwun Tong", "觀塘區", "观塘区"),
        aliases: &["Kwun-Tong", "觀塘", "观塘"],
    },
    DistrictEntry {
        key: D::KwaiTsing,
        region: RegionKey::NewTerritories,
        labels: Localized::new("Kwai Tsing", "葵青區", "葵青区"),
        aliases: &["Kwai-Tsing", "葵青"],
    },
    DistrictEntry {
        key: D::TsuenWan,
        region: RegionKey::NewTerritories,
        labels: Localized::new("Tsuen Wan", "荃灣區", "荃湾区"),
        aliases: &["Tsuen-Wan", "荃灣", "荃湾"],
    },
    DistrictEntry {
        key: D::YuenLong,
        region: RegionKey::NewTerritories,
        labels: Localized::new("Yuen Long", "元朗區", "元朗区"),
        aliases: &["Yuen-Long", "元朗"],
    },
    DistrictEntry {
        key: D::TuenMun,
        region: RegionKey::NewTerritories,
        labels: Localized::new("Tuen Mun", "屯門區", "屯门区"),
        aliases: &["Tuen-Mun", "屯門", "屯门"],
    },
    DistrictEntry {
        key: D::North,
        region: RegionKey::NewTerritories,
        labels: Localized::new("North", "北區", "北区"),
        aliases: &["Northern", "北"],
    },
    DistrictEntry {
        key: D::TaiPo,
        region: RegionKey::NewTerritories,
        labels: Localized::new("Tai Po", "大埔區", "大埔区"),
        aliases: &["Tai-Po", "大埔"],
    },
    DistrictEntry {
        key: D::ShaTin,
        region: RegionKey::NewTerritories,
        labels: Localized::new("Sha Tin", "沙田區", "沙田区"),
        aliases: &["Sha-Tin", "Shatin", "沙田"],
    },
    DistrictEntry {
        key: D::SaiKung,
        region: RegionKey::NewTerritories,
        labels: Localized::new("Sai Kung", "西貢區", "西贡区"),
        aliases: &["Sai-Kung", "西貢", "西贡"],
    },
    DistrictEntry {
        key: D::Islands,
        region: RegionKey::NewTerritories,
        labels: Localized::new("Islands", "離島區", "离岛区"),
        aliases: &["Outlying Islands", "離島", "离岛"],
    },
];

/// Normalized region spelling -> region.
static REGION_INDEX: Lazy<HashMap<String, RegionKey>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for entry in &REGIONS {
        let spellings = std::iter::once(entry.id)
            .chain(entry.labels.iter())
            .chain(entry.aliases.iter().copied());
        for spelling in spellings {
            index.insert(normalize_key(spelling), entry.key);
        }
    }
    index
});

/// Normalized district spelling -> district.
static DISTRICT_INDEX: Lazy<HashMap<String, DistrictKey>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for entry in &DISTRICTS {
        let spellings = entry.labels.iter().chain(entry.aliases.iter().copied());
        for spelling in spellings {
            let key = normalize_key(spelling);
            if REGION_INDEX.contains_key(&key) {
                log::warn!("district alias {spelling:?} shadows a region and is ignored");
                continue;
            }
            index.insert(key, entry.key);
        }
    }
    index
});

impl RegionKey {
    pub const ALL: [RegionKey; 3] = [
        RegionKey::HongKongIsland,
        RegionKey::Kowloon,
        RegionKey::NewTerritories,
    ];

    fn entry(self) -> &'static RegionEntry {
        &REGIONS[self as usize]
    }

    /// Canonical identifier, e.g. `hong_kong_island`.
    pub fn id(self) -> &'static str {
        self.entry().id
    }

    pub fn labels(self) -> &'static Localized<&'static str> {
        &self.entry().labels
    }

    /// Districts of the region in registry order.
    pub fn districts(self) -> &'static [DistrictKey] {
        self.entry().districts
    }

    /// Exact lookup of an already normalized key.
    pub fn from_normalized(key: &str) -> Option<Self> {
        REGION_INDEX.get(key).copied()
    }

    /// Lookup of any supported spelling.
    pub fn lookup(raw: &str) -> Option<Self> {
        Self::from_normalized(&normalize_key(raw))
    }
}

impl DistrictKey {
    pub const ALL: [DistrictKey; 18] = [
        D::CentralAndWestern,
        D::WanChai,
        D::Eastern,
        D::Southern,
        D::YauTsimMong,
        D::ShamShuiPo,
        D::KowloonCity,
        D::WongTaiSin,
        D::KwunTong,
        D::KwaiTsing,
        D::TsuenWan,
        D::YuenLong,
        D::TuenMun,
        D::North,
        D::TaiPo,
        D::ShaTin,
        D::SaiKung,
        D::Islands,
    ];

    fn entry(self) -> &'static DistrictEntry {
        &DISTRICTS[self as usize]
    }

    /// Canonical English name, e.g. `Central and Western`.
    pub fn canonical_name(self) -> &'static str {
        self.entry().labels.en
    }

    pub fn labels(self) -> &'static Localized<&'static str> {
        &self.entry().labels
    }

    pub fn region(self) -> RegionKey {
        self.entry().region
    }

    /// Registered spellings beyond the three labels.
    pub fn aliases(self) -> &'static [&'static str] {
        self.entry().aliases
    }

    /// Exact lookup of an already normalized key.
    pub fn from_normalized(key: &str) -> Option<Self> {
        DISTRICT_INDEX.get(key).copied()
    }

    /// Lookup of any supported spelling (labels, `&` and slug forms).
    ///
    /// ```rust
    /// use easepark_core::DistrictKey;
    ///
    /// assert_eq!(DistrictKey::lookup("Central-Western"), Some(DistrictKey::CentralAndWestern));
    /// assert_eq!(DistrictKey::lookup("灣仔區"), Some(DistrictKey::WanChai));
    /// assert_eq!(DistrictKey::lookup("Kowloon"), None); // a region, not a district
    /// ```
    pub fn lookup(raw: &str) -> Option<Self> {
        Self::from_normalized(&normalize_key(raw))
    }
}

impl Localize for RegionKey {
    fn localized(&self, lang: Language) -> &str {
        self.labels().get(lang)
    }
}

impl Localize for DistrictKey {
    fn localized(&self, lang: Language) -> &str {
        self.labels().get(lang)
    }
}

impl fmt::Display for RegionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl fmt::Display for DistrictKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}
