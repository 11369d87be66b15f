// crates/easepark-core/src/lib.rs

//! easepark-core
//! =============
//!
//! District resolution and car-park ranking for the Hong Kong Transport
//! Department car-park feeds.
//!
//! - [`resolve`] / [`DistrictResolver`]: route text such as
//!   `hong-kong-island`, `Central-Western` or `灣仔區` to canonical districts
//!   and a localized page title.
//! - [`rank`] / [`CarparkRanker`]: open first, then most vacancies for the
//!   selected vehicle type, with search / open-only / district filters.
//! - [`feed`] and [`loader`] (feature `json`): parse and join
//!   `basic_info_all.json` with `vacancy_all.json`.
//!
//! ```rust
//! use easepark_core::{rank, resolve, CarparkFilter, CarparkRanker, Language};
//!
//! let resolution = resolve("hong kong island", Language::En);
//! assert_eq!(resolution.title(), "Hong Kong Island Parking Information");
//!
//! let records = Vec::new(); // usually `FeedSnapshot::load_from_dir(..)?.into_records()`
//! let ranker = CarparkRanker::new("P").filter(CarparkFilter::new().districts(resolution));
//! assert!(ranker.rank(&records).is_empty());
//! assert!(rank(&records, "P").is_empty());
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod carpark;
pub mod config;
pub mod error;
#[cfg(feature = "json")]
pub mod feed;
pub mod lang;
#[cfg(feature = "json")]
pub mod loader;
pub mod ranker;
pub mod registry;
pub mod resolver;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::carpark::{CarparkRecord, OpeningStatus, Vacancy, VacancyLevel, VehicleType};
pub use crate::config::{Settings, Theme};
pub use crate::error::{EaseParkError, Result};
#[cfg(feature = "json")]
pub use crate::feed::{join_feeds, parse_feeds};
pub use crate::lang::{Language, Localized};
#[cfg(feature = "json")]
pub use crate::loader::FeedSnapshot;
pub use crate::ranker::{
    compare, rank, CarparkFilter, CarparkRanker, RankKey, SortColumn, SortDirection,
};
pub use crate::registry::{DistrictKey, RegionKey};
pub use crate::resolver::{
    resolve, DistrictResolver, Resolution, ResolveOptions, ResolvedDistrict, Scope,
};
pub use crate::traits::Localize;

pub mod prelude {
    //! Common types and traits for demos and front ends.
    #![allow(unused_imports)]

    pub use crate::carpark::{CarparkRecord, OpeningStatus, Vacancy, VacancyLevel, VehicleType};
    pub use crate::config::{Settings, Theme};
    pub use crate::error::{EaseParkError, Result};
    #[cfg(feature = "json")]
    pub use crate::loader::FeedSnapshot;
    pub use crate::lang::{Language, Localized};
    pub use crate::ranker::{rank, CarparkFilter, CarparkRanker, SortColumn, SortDirection};
    pub use crate::registry::{DistrictKey, RegionKey};
    pub use crate::resolver::{resolve, DistrictResolver, Resolution, ResolvedDistrict, Scope};
    pub use crate::traits::Localize;
}
