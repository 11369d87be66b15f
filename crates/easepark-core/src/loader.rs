// crates/easepark-core/src/loader.rs

//! # Feed Loader
//!
//! Handles the physical layer (files, gzip, HTTP) and delegates parsing to
//! [`crate::feed`].

use crate::carpark::CarparkRecord;
use crate::error::{EaseParkError, Result};
use crate::feed::{join_feeds, BasicInfoFeed, VacancyFeed};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

pub const FEED_BASE_URL: &str = "https://resource.data.one.gov.hk/td/carpark/";
pub const BASIC_INFO_FILE: &str = "basic_info_all.json";
pub const VACANCY_FILE: &str = "vacancy_all.json";

/// Both feeds, parsed but not yet joined.
#[derive(Debug, Clone, Default)]
pub struct FeedSnapshot {
    pub basic: BasicInfoFeed,
    pub vacancy: VacancyFeed,
}

impl FeedSnapshot {
    /// Load the two feed files. Paths ending in `.gz` are decompressed when
    /// the `compact` feature is enabled.
    pub fn load_from_paths(basic: impl AsRef<Path>, vacancy: impl AsRef<Path>) -> Result<Self> {
        let basic: BasicInfoFeed = read_json(basic.as_ref())?;
        let vacancy: VacancyFeed = read_json(vacancy.as_ref())?;
        log::info!(
            "loaded feed snapshot: {} car parks, {} vacancy rows",
            basic.car_park.len(),
            vacancy.car_park.len()
        );
        Ok(Self { basic, vacancy })
    }

    /// Load `basic_info_all.json` and `vacancy_all.json` (or their `.gz`
    /// variants) from one directory.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let basic = locate(dir, BASIC_INFO_FILE)?;
        let vacancy = locate(dir, VACANCY_FILE)?;
        Self::load_from_paths(basic, vacancy)
    }

    /// Join into display records.
    pub fn into_records(self) -> Vec<CarparkRecord> {
        join_feeds(self.basic, &self.vacancy)
    }

    /// Download both feeds from the Transport Department.
    #[cfg(feature = "fetch")]
    pub fn fetch_live() -> Result<Self> {
        let basic: BasicInfoFeed = fetch_json(&format!("{FEED_BASE_URL}{BASIC_INFO_FILE}"))?;
        let vacancy: VacancyFeed = fetch_json(&format!("{FEED_BASE_URL}{VACANCY_FILE}"))?;
        Ok(Self { basic, vacancy })
    }
}

/// Download a feed and write the raw bytes to `out_dir/<file>`.
#[cfg(feature = "fetch")]
pub fn download_feed(file: &str, out_dir: &Path) -> Result<PathBuf> {
    let url = format!("{FEED_BASE_URL}{file}");
    log::info!("downloading {url}");
    let bytes = reqwest::blocking::get(&url)?.error_for_status()?.bytes()?;
    std::fs::create_dir_all(out_dir)?;
    let path = out_dir.join(file);
    std::fs::write(&path, &bytes)?;
    Ok(path)
}

#[cfg(feature = "fetch")]
fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    log::info!("fetching {url}");
    let body = reqwest::blocking::get(url)?.error_for_status()?.text()?;
    Ok(serde_json::from_str(&body)?)
}

fn locate(dir: &Path, file: &str) -> Result<PathBuf> {
    let plain = dir.join(file);
    if plain.is_file() {
        return Ok(plain);
    }
    let gz = dir.join(format!("{file}.gz"));
    if gz.is_file() {
        return Ok(gz);
    }
    Err(EaseParkError::NotFound(format!(
        "{file} not found in {}",
        dir.display()
    )))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let reader = open_stream(path)?;
    Ok(serde_json::from_reader(reader)?)
}

/// Opens a file, buffers it, and wraps it in a gzip decoder when the name
/// ends in `.gz`. Returns a generic reader so callers don't care about the
/// compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        EaseParkError::NotFound(format!("Feed not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);
    let gzipped = path.extension().is_some_and(|ext| ext == "gz");

    if !gzipped {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(EaseParkError::InvalidData(format!(
            "{} is gzip compressed but the 'compact' feature is disabled",
            path.display()
        )))
    }
}
