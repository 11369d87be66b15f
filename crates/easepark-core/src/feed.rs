// crates/easepark-core/src/feed.rs

//! Raw Transport Department car-park feeds and their join.
//!
//! Two documents are published under
//! `https://resource.data.one.gov.hk/td/carpark/`:
//! - `basic_info_all.json`: identity, address, district, coordinates, status
//! - `vacancy_all.json`: per vehicle type, per service category vacancies
//!
//! Both wrap their rows in `{"car_park": [...]}`. Field types drift between
//! releases (numbers sometimes arrive as strings), so every numeric field is
//! read leniently and bad values become `None` rather than errors.

use crate::carpark::{CarparkRecord, OpeningStatus, Vacancy, VehicleType};
use crate::lang::Localized;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};

/// Service category whose figures the client displays.
pub const HOURLY: &str = "HOURLY";

/// A number that may be encoded as JSON number or string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Int(i64),
    Float(f64),
    Text(String),
    Other(serde_json::Value),
}

fn loose_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = Option::<LooseNumber>::deserialize(deserializer)?;
    Ok(match value {
        Some(LooseNumber::Int(i)) => Some(i as f64),
        Some(LooseNumber::Float(f)) => Some(f),
        Some(LooseNumber::Text(s)) => s.trim().parse::<f64>().ok(),
        Some(LooseNumber::Other(_)) | None => None,
    }
    .filter(|f| f.is_finite()))
}

fn loose_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let value = Option::<LooseNumber>::deserialize(deserializer)?;
    Ok(match value {
        Some(LooseNumber::Int(i)) => Some(i),
        Some(LooseNumber::Float(f)) if f.is_finite() => Some(f.trunc() as i64),
        Some(LooseNumber::Text(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    })
}

/// Row of `basic_info_all.json`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BasicInfoRaw {
    pub park_id: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub name_tc: String,
    #[serde(default)]
    pub name_sc: String,
    #[serde(default, rename = "displayAddress_en")]
    pub display_address_en: String,
    #[serde(default, rename = "displayAddress_tc")]
    pub display_address_tc: String,
    #[serde(default, rename = "displayAddress_sc")]
    pub display_address_sc: String,
    #[serde(default)]
    pub district_en: String,
    #[serde(default)]
    pub district_tc: String,
    #[serde(default)]
    pub district_sc: String,
    #[serde(default, deserialize_with = "loose_f64")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "loose_f64")]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub opening_status: Option<String>,
    #[serde(default, deserialize_with = "loose_f64")]
    pub height: Option<f64>,
    #[serde(default, rename = "contactNo")]
    pub contact_no: Option<String>,
    #[serde(default)]
    pub remark_en: String,
    #[serde(default)]
    pub remark_tc: String,
    #[serde(default)]
    pub remark_sc: String,
    #[serde(default)]
    pub website_en: String,
    #[serde(default)]
    pub website_tc: String,
    #[serde(default)]
    pub website_sc: String,
    #[serde(default)]
    pub carpark_photo: Option<String>,
}

/// One `service_category` entry.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServiceCategoryRaw {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub vacancy_type: Option<String>,
    #[serde(default, deserialize_with = "loose_i64")]
    pub vacancy: Option<i64>,
    #[serde(default)]
    pub lastupdate: Option<String>,
}

/// One `vehicle_type` entry.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VehicleTypeRaw {
    #[serde(rename = "type", default)]
    pub code: String,
    #[serde(default)]
    pub service_category: Vec<ServiceCategoryRaw>,
}

/// Row of `vacancy_all.json`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VacancyRaw {
    pub park_id: String,
    #[serde(default)]
    pub vehicle_type: Vec<VehicleTypeRaw>,
}

/// `{"car_park": [...]}` envelope shared by both feeds.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub car_park: Vec<T>,
}

impl<T> Default for FeedEnvelope<T> {
    fn default() -> Self {
        Self { car_park: Vec::new() }
    }
}

pub type BasicInfoFeed = FeedEnvelope<BasicInfoRaw>;
pub type VacancyFeed = FeedEnvelope<VacancyRaw>;

impl VacancyRaw {
    /// HOURLY vacancy per vehicle code plus the newest HOURLY timestamp.
    ///
    /// A vehicle type that lists HOURLY without a usable number is kept as
    /// `NoData`. Duplicate HOURLY rows keep the first one.
    pub fn hourly(&self) -> (BTreeMap<String, Vacancy>, Option<String>) {
        let mut vacancies = BTreeMap::new();
        let mut newest: Option<String> = None;
        for vt in &self.vehicle_type {
            let code = vt.code.trim();
            if code.is_empty() {
                continue;
            }
            let Some(hourly) = vt
                .service_category
                .iter()
                .find(|sc| sc.category.trim().eq_ignore_ascii_case(HOURLY))
            else {
                continue;
            };
            let vacancy = match hourly.vacancy {
                Some(raw) => Vacancy::from_raw(raw),
                None => {
                    log::debug!("{}: vacancy for {code} missing or malformed", self.park_id);
                    Vacancy::NoData
                }
            };
            let code = VehicleType::from_code(code).code().to_owned();
            let Entry::Vacant(slot) = vacancies.entry(code) else {
                continue;
            };
            slot.insert(vacancy);
            if let Some(ts) = hourly.lastupdate.as_deref().filter(|s| !s.is_empty()) {
                // Timestamps are `YYYY-MM-DD HH:MM:SS`, so string order is time order.
                if newest.as_deref().map_or(true, |cur| ts > cur) {
                    newest = Some(ts.to_owned());
                }
            }
        }
        (vacancies, newest)
    }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

impl BasicInfoRaw {
    /// Project into a display record with no vacancy data yet.
    pub fn into_record(self) -> CarparkRecord {
        CarparkRecord {
            park_id: self.park_id,
            name: Localized::new(self.name_en, self.name_tc, self.name_sc),
            address: Localized::new(
                self.display_address_en,
                self.display_address_tc,
                self.display_address_sc,
            ),
            district: Localized::new(self.district_en, self.district_tc, self.district_sc),
            latitude: self.latitude,
            longitude: self.longitude,
            status: self
                .opening_status
                .as_deref()
                .map(OpeningStatus::parse)
                .unwrap_or_default(),
            vacancies: BTreeMap::new(),
            contact_no: non_empty(self.contact_no),
            height: self.height.filter(|h| *h > 0.0),
            remark: Localized::new(self.remark_en, self.remark_tc, self.remark_sc),
            website: Localized::new(self.website_en, self.website_tc, self.website_sc),
            photo_url: non_empty(self.carpark_photo),
            vacancy_updated: None,
        }
    }
}

/// Join the two feeds on `park_id`, in basic-info order.
///
/// Car parks missing from the vacancy feed get an empty vacancy map (every
/// lookup yields `NoData`). Vacancy rows without basic info are dropped.
pub fn join_feeds(basic: BasicInfoFeed, vacancy: &VacancyFeed) -> Vec<CarparkRecord> {
    let by_id: HashMap<&str, &VacancyRaw> = vacancy
        .car_park
        .iter()
        .map(|v| (v.park_id.as_str(), v))
        .collect();

    let records: Vec<CarparkRecord> = basic
        .car_park
        .into_iter()
        .map(|info| {
            let mut record = info.into_record();
            if let Some(v) = by_id.get(record.park_id.as_str()) {
                let (vacancies, updated) = v.hourly();
                record.vacancies = vacancies;
                record.vacancy_updated = updated;
            }
            record
        })
        .collect();

    log::debug!(
        "joined {} car parks against {} vacancy rows",
        records.len(),
        vacancy.car_park.len()
    );
    records
}

/// Parse both feeds from JSON text and join them.
pub fn parse_feeds(basic_json: &str, vacancy_json: &str) -> crate::Result<Vec<CarparkRecord>> {
    let basic: BasicInfoFeed = serde_json::from_str(basic_json)?;
    let vacancy: VacancyFeed = serde_json::from_str(vacancy_json)?;
    Ok(join_feeds(basic, &vacancy))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASIC: &str = r#"{"car_park":[
        {"park_id":"tdc1p1","name_en":"Rumsey Street Car Park","name_tc":"林士街停車場","name_sc":"林士街停车场",
         "displayAddress_en":"2 Rumsey Street, Sheung Wan","district_en":"Central & Western","district_tc":"中西區",
         "district_sc":"中西区","latitude":22.2857,"longitude":"114.1540","opening_status":"OPEN","height":2.0,
         "contactNo":" 2854 9870 "},
        {"park_id":"tdc2p1","name_en":"City Hall","opening_status":"CLOSED","latitude":"n/a"},
        {"park_id":"tdc3p1","name_en":"Mystery","opening_status":"RENOVATION"}
    ]}"#;

    const VACANCY: &str = r#"{"car_park":[
        {"park_id":"tdc1p1","vehicle_type":[
            {"type":"P","service_category":[
                {"category":"DAILY","vacancy_type":"A","vacancy":999,"lastupdate":"2024-05-01 10:00:00"},
                {"category":"HOURLY","vacancy_type":"A","vacancy":35,"lastupdate":"2024-05-01 10:05:00"}]},
            {"type":"M","service_category":[
                {"category":"HOURLY","vacancy_type":"A","vacancy":-1,"lastupdate":"2024-05-01 10:06:00"}]},
            {"type":"L","service_category":[
                {"category":"HOURLY","vacancy":"oops"}]}
        ]},
        {"park_id":"tdc2p1","vehicle_type":[
            {"type":"P","service_category":[{"category":"HOURLY","vacancy":"0"}]}]},
        {"park_id":"orphan","vehicle_type":[]}
    ]}"#;

    #[test]
    fn join_keeps_hourly_only() {
        let records = parse_feeds(BASIC, VACANCY).unwrap();
        assert_eq!(records.len(), 3);

        let rumsey = &records[0];
        assert_eq!(rumsey.vacancy("P"), Vacancy::Spaces(35));
        assert_eq!(rumsey.vacancy("M"), Vacancy::NoData);
        assert_eq!(rumsey.vacancy("L"), Vacancy::NoData);
        assert_eq!(rumsey.vacancy_updated.as_deref(), Some("2024-05-01 10:06:00"));
        assert_eq!(rumsey.longitude, Some(114.1540));
        assert_eq!(rumsey.contact_no.as_deref(), Some("2854 9870"));
        assert_eq!(rumsey.status, OpeningStatus::Open);
    }

    #[test]
    fn lenient_fields_degrade_to_sentinels() {
        let records = parse_feeds(BASIC, VACANCY).unwrap();
        let city_hall = &records[1];
        assert_eq!(city_hall.latitude, None);
        assert_eq!(city_hall.vacancy("P"), Vacancy::Spaces(0));
        assert_eq!(city_hall.status, OpeningStatus::Closed);

        let mystery = &records[2];
        assert_eq!(mystery.status, OpeningStatus::Unknown);
        assert!(mystery.vacancies.is_empty());
    }

    #[test]
    fn duplicate_hourly_rows_keep_first_reading_and_its_time() {
        let basic = r#"{"car_park":[{"park_id":"dup","name_en":"Dup","opening_status":"OPEN"}]}"#;
        let vacancy = r#"{"car_park":[{"park_id":"dup","vehicle_type":[
            {"type":"p","service_category":[
                {"category":"HOURLY","vacancy":12,"lastupdate":"2024-05-01 09:00:00"}]},
            {"type":"P","service_category":[
                {"category":"HOURLY","vacancy":80,"lastupdate":"2024-05-01 11:00:00"}]}
        ]}]}"#;
        let records = parse_feeds(basic, vacancy).unwrap();
        let dup = &records[0];
        assert_eq!(dup.vacancies.len(), 1);
        assert_eq!(dup.vacancy("P"), Vacancy::Spaces(12));
        assert_eq!(dup.vacancy_updated.as_deref(), Some("2024-05-01 09:00:00"));
    }

    #[test]
    fn missing_envelope_is_empty() {
        let records = parse_feeds("{}", "{}").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_feeds("{", "{}").is_err());
    }
}
