//! easepark-wasm: WebAssembly bindings for easepark-core
//!
//! The browser fetches `basic_info_all.json` and `vacancy_all.json` itself
//! and hands the text to this module; everything after that (join, district
//! resolution, filtering, ranking) runs here.
//!
//! What it provides
//! ----------------
//! - Panic hook installation on module load (via `#[wasm_bindgen(start)]`)
//! - `parse_feeds(basicJson, vacancyJson)`: joined car-park records
//! - `resolve_district(param, lang)`: scope, districts and page title
//! - `rank_carparks(records, options)`: filtered and ordered display rows
//! - `vehicle_type_label(code, lang)`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { parse_feeds, rank_carparks, resolve_district } from 'easepark-wasm';
//!
//! async function main() {
//!   await init();
//!   const [basic, vacancy] = await Promise.all([
//!     fetch(BASE + 'basic_info_all.json').then(r => r.text()),
//!     fetch(BASE + 'vacancy_all.json').then(r => r.text()),
//!   ]);
//!   const records = parse_feeds(basic, vacancy);
//!   document.title = resolve_district('hong-kong-island', 'tc').title;
//!   const rows = rank_carparks(records, {
//!     vehicleType: 'P', lang: 'tc', district: 'hong-kong-island', openOnly: true,
//!   });
//!   console.log(rows);
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - Language tags are lenient: `tc`, `zh-HK`, `zh-TW` map to Traditional
//!   Chinese, `sc`, `zh-CN` to Simplified; anything else is English.
//! - Functions that can fail return a rejected value carrying the message
//!   instead of panicking.
use easepark_core::{
    resolve, CarparkFilter, CarparkRanker, CarparkRecord, Language, Localize, SortColumn,
    SortDirection, VacancyLevel, VehicleType,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing EaseParkHK WASM module...".into());
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Maps become plain objects, not `Map`s.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    Ok(value.serialize(&Serializer::json_compatible())?)
}

/* --------------------------------------------------------------------------
   Options and views
-------------------------------------------------------------------------- */

/// Ranking options as passed from JavaScript. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RankOptions {
    pub vehicle_type: Option<String>,
    pub lang: Option<String>,
    pub search: Option<String>,
    pub open_only: bool,
    /// Route parameter to restrict by (region, district or free text).
    pub district: Option<String>,
    pub sort: Option<SortColumn>,
    pub direction: Option<SortDirection>,
}

impl RankOptions {
    fn language(&self) -> Language {
        self.lang.as_deref().map(Language::from_tag).unwrap_or_default()
    }

    fn vehicle_type(&self) -> &str {
        self.vehicle_type.as_deref().unwrap_or("P")
    }

    fn ranker(&self) -> CarparkRanker {
        let lang = self.language();
        let mut filter = CarparkFilter::new().open_only(self.open_only);
        if let Some(query) = &self.search {
            filter = filter.search(query.clone());
        }
        if let Some(param) = &self.district {
            filter = filter.districts(resolve(param, lang));
        }
        CarparkRanker::new(self.vehicle_type())
            .lang(lang)
            .sort_by(self.sort.unwrap_or_default(), self.direction.unwrap_or_default())
            .filter(filter)
    }
}

/// One list row, already localized for display.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CarparkView<'a> {
    pub park_id: &'a str,
    pub name: &'a str,
    pub address: &'a str,
    pub district: &'a str,
    pub status: &'a str,
    pub is_open: bool,
    /// `None` when the feed has no reading for the vehicle type.
    pub vacancy: Option<u32>,
    pub vacancy_level: VacancyLevel,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Both coordinates present, so the row can go on a map.
    pub has_location: bool,
    pub updated: Option<&'a str>,
}

impl<'a> CarparkView<'a> {
    pub fn new(record: &'a CarparkRecord, vehicle_type: &str, lang: Language) -> Self {
        let vacancy = record.vacancy(vehicle_type);
        Self {
            park_id: &record.park_id,
            name: record.name(lang),
            address: record.address(lang),
            district: record.district(lang),
            status: record.status.localized(lang),
            is_open: record.status.is_open(),
            vacancy: vacancy.count(),
            vacancy_level: vacancy.level(),
            latitude: record.latitude,
            longitude: record.longitude,
            has_location: record.has_location(),
            updated: record.vacancy_updated.as_deref(),
        }
    }
}

/// Rank `records` and project them into display rows.
pub fn rank_views<'a>(records: &'a [CarparkRecord], options: &RankOptions) -> Vec<CarparkView<'a>> {
    let lang = options.language();
    options
        .ranker()
        .rank(records)
        .into_iter()
        .map(|record| CarparkView::new(record, options.vehicle_type(), lang))
        .collect()
}

/* --------------------------------------------------------------------------
   Feeds
-------------------------------------------------------------------------- */

/// Join the two feed documents into car-park records.
#[wasm_bindgen]
pub fn parse_feeds(basic_json: &str, vacancy_json: &str) -> Result<JsValue, JsValue> {
    let records = easepark_core::parse_feeds(basic_json, vacancy_json).map_err(js_error)?;
    to_js(&records)
}

/* --------------------------------------------------------------------------
   Districts
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn resolve_district(param: &str, lang: &str) -> Result<JsValue, JsValue> {
    let lang = Language::from_tag(lang);
    let resolution = resolve(param, lang);
    let districts: Vec<_> = resolution
        .districts()
        .iter()
        .map(|d| json!({ "key": d.canonical_name(), "label": d.localized(lang) }))
        .collect();
    let out = json!({
        "scope": resolution.scope(),
        "passthrough": resolution.is_passthrough(),
        "title": resolution.title(),
        "districts": districts,
    });
    to_js(&out)
}

/* --------------------------------------------------------------------------
   Ranking
-------------------------------------------------------------------------- */

/// `records` is what [`parse_feeds`] returned; `options` may be `undefined`.
#[wasm_bindgen]
pub fn rank_carparks(records: JsValue, options: JsValue) -> Result<JsValue, JsValue> {
    let records: Vec<CarparkRecord> = from_value(records)?;
    let options: RankOptions = if options.is_undefined() || options.is_null() {
        RankOptions::default()
    } else {
        from_value(options)?
    };
    let rows = rank_views(&records, &options);

    let array = js_sys::Array::new();
    for row in &rows {
        array.push(&to_js(row)?);
    }
    Ok(array.into())
}

#[wasm_bindgen]
pub fn vehicle_type_label(code: &str, lang: &str) -> String {
    VehicleType::from_code(code)
        .localized(Language::from_tag(lang))
        .to_owned()
}
