// crates/easepark-core/src/carpark.rs
use crate::lang::{Language, Localized};
use crate::traits::Localize;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Opening status as published in `basic_info_all.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OpeningStatus {
    Open,
    Closed,
    #[default]
    Unknown,
}

impl OpeningStatus {
    /// Lenient parse: anything other than `OPEN` / `CLOSED` is `Unknown`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "OPEN" => OpeningStatus::Open,
            "CLOSED" => OpeningStatus::Closed,
            _ => OpeningStatus::Unknown,
        }
    }

    /// Sort rank: open first, unknown last.
    pub fn rank(self) -> u8 {
        match self {
            OpeningStatus::Open => 0,
            OpeningStatus::Closed => 1,
            OpeningStatus::Unknown => 2,
        }
    }

    pub fn is_open(self) -> bool {
        self == OpeningStatus::Open
    }
}

impl Localize for OpeningStatus {
    fn localized(&self, lang: Language) -> &str {
        let labels: Localized<&'static str> = match self {
            OpeningStatus::Open => Localized::new("Open", "開放", "开放"),
            OpeningStatus::Closed => Localized::new("Closed", "關閉", "关闭"),
            OpeningStatus::Unknown => Localized::new("N/A", "不適用", "不适用"),
        };
        match lang {
            Language::En => labels.en,
            Language::Tc => labels.tc,
            Language::Sc => labels.sc,
        }
    }
}

/// Vacancy for one vehicle type.
///
/// `NoData` is the sentinel for "the feed did not say" and is distinct from
/// a genuine zero (`Spaces(0)`, i.e. full).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "count", rename_all = "snake_case")]
pub enum Vacancy {
    Spaces(u32),
    #[default]
    NoData,
}

/// Display classification used for colouring vacancy figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VacancyLevel {
    Available,
    Full,
    NoData,
}

impl Vacancy {
    /// Coerce a raw feed value. Negative numbers are how the feed spells
    /// "no data"; values beyond `u32` are clamped.
    pub fn from_raw(raw: i64) -> Self {
        if raw < 0 {
            Vacancy::NoData
        } else {
            Vacancy::Spaces(u32::try_from(raw).unwrap_or(u32::MAX))
        }
    }

    /// Ranking value: any positive count > no data (-1) > full (-2).
    pub fn rank(self) -> i64 {
        match self {
            Vacancy::NoData => -1,
            Vacancy::Spaces(0) => -2,
            Vacancy::Spaces(n) => i64::from(n),
        }
    }

    pub fn level(self) -> VacancyLevel {
        match self {
            Vacancy::NoData => VacancyLevel::NoData,
            Vacancy::Spaces(0) => VacancyLevel::Full,
            Vacancy::Spaces(_) => VacancyLevel::Available,
        }
    }

    pub fn count(self) -> Option<u32> {
        match self {
            Vacancy::Spaces(n) => Some(n),
            Vacancy::NoData => None,
        }
    }
}

impl fmt::Display for Vacancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vacancy::Spaces(n) => write!(f, "{n}"),
            Vacancy::NoData => f.write_str("N/A"),
        }
    }
}

/// Vehicle type codes used by `vacancy_all.json`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum VehicleType {
    #[default]
    PrivateCar,
    LargeGoods,
    HeavyGoods,
    MotorCycle,
    Coach,
    Other(String),
}

impl VehicleType {
    pub const KNOWN: [VehicleType; 5] = [
        VehicleType::PrivateCar,
        VehicleType::LargeGoods,
        VehicleType::HeavyGoods,
        VehicleType::MotorCycle,
        VehicleType::Coach,
    ];

    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "P" => VehicleType::PrivateCar,
            "L" => VehicleType::LargeGoods,
            "H" => VehicleType::HeavyGoods,
            "M" => VehicleType::MotorCycle,
            "C" => VehicleType::Coach,
            _ => VehicleType::Other(code.trim().to_owned()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            VehicleType::PrivateCar => "P",
            VehicleType::LargeGoods => "L",
            VehicleType::HeavyGoods => "H",
            VehicleType::MotorCycle => "M",
            VehicleType::Coach => "C",
            VehicleType::Other(code) => code,
        }
    }
}

impl Localize for VehicleType {
    fn localized(&self, lang: Language) -> &str {
        let labels: Localized<&'static str> = match self {
            VehicleType::PrivateCar => Localized::new("Private Car", "私家車", "私家车"),
            VehicleType::LargeGoods => Localized::new("Large Goods Vehicle", "大型貨車", "大型货车"),
            VehicleType::HeavyGoods => Localized::new("Heavy Goods Vehicle", "重型貨車", "重型货车"),
            VehicleType::MotorCycle => Localized::new("Motor Cycle", "電單車", "摩托车"),
            VehicleType::Coach => Localized::new("Coach", "旅遊巴", "旅游巴"),
            VehicleType::Other(code) => return code,
        };
        match lang {
            Language::En => labels.en,
            Language::Tc => labels.tc,
            Language::Sc => labels.sc,
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for VehicleType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for VehicleType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(VehicleType::from_code(&code))
    }
}

/// A display-ready car park: basic info joined with its HOURLY vacancies.
///
/// Built by [`crate::feed::join_feeds`]; the ranker only ever reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CarparkRecord {
    pub park_id: String,
    pub name: Localized<String>,
    pub address: Localized<String>,
    pub district: Localized<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub status: OpeningStatus,
    /// Vehicle-type code (`P`, `M`, ...) -> HOURLY vacancy.
    #[serde(default)]
    pub vacancies: BTreeMap<String, Vacancy>,

    #[serde(default)]
    pub contact_no: Option<String>,
    /// Height limit in metres.
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub remark: Localized<String>,
    #[serde(default)]
    pub website: Localized<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    /// Newest `lastupdate` among the HOURLY readings, as published.
    #[serde(default)]
    pub vacancy_updated: Option<String>,
}

impl CarparkRecord {
    /// Vacancy for a vehicle-type code (`p` and `P` are the same).
    /// Missing entries are `NoData`.
    pub fn vacancy(&self, vehicle_type: &str) -> Vacancy {
        self.vacancies
            .get(VehicleType::from_code(vehicle_type).code())
            .copied()
            .unwrap_or(Vacancy::NoData)
    }

    pub fn name(&self, lang: Language) -> &str {
        self.name.get(lang)
    }

    pub fn address(&self, lang: Language) -> &str {
        self.address.get(lang)
    }

    pub fn district(&self, lang: Language) -> &str {
        self.district.get(lang)
    }

    pub fn has_location(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

impl Localize for CarparkRecord {
    fn localized(&self, lang: Language) -> &str {
        self.name(lang)
    }
}
