// crates/easepark-core/src/ranker.rs

//! # Car-park Ranker
//!
//! Orders car parks for display: open before closed before unknown, then
//! by vacancy for the selected vehicle type (positive counts descending,
//! then "no data", then "full"). A column sort swaps the vacancy key for a
//! name/address/district comparison while keeping status first.
//!
//! The ranker never mutates its input and never fails; it hands back a new
//! `Vec` of references in display order.

use crate::carpark::{CarparkRecord, VehicleType};
use crate::lang::Language;
use crate::resolver::Resolution;
use crate::text::{contains_ignore_case, fold_key};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Secondary sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    #[default]
    Vacancy,
    Name,
    Address,
    District,
}

impl std::str::FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vacancy" => Ok(SortColumn::Vacancy),
            "name" => Ok(SortColumn::Name),
            "address" => Ok(SortColumn::Address),
            "district" => Ok(SortColumn::District),
            other => Err(format!("unknown sort column: {other}")),
        }
    }
}

/// Direction of the secondary key. Status always sorts open-first.
///
/// `Natural` means "most vacancies first" for [`SortColumn::Vacancy`] and
/// A→Z for the text columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Natural,
    Reversed,
}

/// Ephemeral per-record ranking values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RankKey {
    /// OPEN=0, CLOSED=1, UNKNOWN=2.
    pub status_rank: u8,
    /// Vacancy count; no data = -1, full = -2.
    pub vacancy_rank: i64,
}

impl RankKey {
    pub fn of(record: &CarparkRecord, vehicle_type: &str) -> Self {
        Self {
            status_rank: record.status.rank(),
            vacancy_rank: record.vacancy(vehicle_type).rank(),
        }
    }
}

/// Inclusion predicate applied before ranking.
#[derive(Debug, Clone, Default)]
pub struct CarparkFilter {
    search: Option<String>,
    open_only: bool,
    districts: Option<Resolution>,
}

impl CarparkFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep records whose name or address contains `query` (case
    /// insensitive, in the language passed to [`CarparkFilter::matches`]).
    /// A blank query clears the search.
    pub fn search(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        self.search = if query.trim().is_empty() { None } else { Some(query) };
        self
    }

    pub fn open_only(mut self, open_only: bool) -> Self {
        self.open_only = open_only;
        self
    }

    /// Restrict to the districts of a resolved route parameter.
    pub fn districts(mut self, resolution: Resolution) -> Self {
        self.districts = Some(resolution);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none() && !self.open_only && self.districts.is_none()
    }

    pub fn matches(&self, record: &CarparkRecord, lang: Language) -> bool {
        if self.open_only && !record.status.is_open() {
            return false;
        }
        if let Some(query) = &self.search {
            if !contains_ignore_case(record.name(lang), query)
                && !contains_ignore_case(record.address(lang), query)
            {
                return false;
            }
        }
        match &self.districts {
            Some(resolution) => resolution.includes(record),
            None => true,
        }
    }

    /// Records passing the filter, input order preserved.
    pub fn apply<'a>(&self, records: &'a [CarparkRecord], lang: Language) -> Vec<&'a CarparkRecord> {
        records.iter().filter(|r| self.matches(r, lang)).collect()
    }
}

/// Display ordering over car parks for one vehicle type.
#[derive(Debug, Clone)]
pub struct CarparkRanker {
    vehicle_type: String,
    lang: Language,
    column: SortColumn,
    direction: SortDirection,
    filter: CarparkFilter,
}

impl CarparkRanker {
    /// `vehicle_type` is a feed code; case and surrounding space are ignored.
    pub fn new(vehicle_type: impl Into<String>) -> Self {
        let vehicle_type: String = vehicle_type.into();
        Self {
            vehicle_type: VehicleType::from_code(&vehicle_type).code().to_owned(),
            lang: Language::default(),
            column: SortColumn::default(),
            direction: SortDirection::default(),
            filter: CarparkFilter::default(),
        }
    }

    /// Language used for column sorting and search.
    pub fn lang(mut self, lang: Language) -> Self {
        self.lang = lang;
        self
    }

    pub fn sort_by(mut self, column: SortColumn, direction: SortDirection) -> Self {
        self.column = column;
        self.direction = direction;
        self
    }

    pub fn filter(mut self, filter: CarparkFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn vehicle_type(&self) -> &str {
        &self.vehicle_type
    }

    /// Filter, then order. Input is untouched.
    pub fn rank<'a>(&self, records: &'a [CarparkRecord]) -> Vec<&'a CarparkRecord> {
        let selected = if self.filter.is_empty() {
            records.iter().collect()
        } else {
            self.filter.apply(records, self.lang)
        };
        self.order(selected)
    }

    /// Order an already selected set of records.
    pub fn order<'a>(&self, records: Vec<&'a CarparkRecord>) -> Vec<&'a CarparkRecord> {
        let mut keyed: Vec<(RankKey, Option<(String, &'a str)>, &'a CarparkRecord)> = records
            .into_iter()
            .map(|r| {
                let column = self.column_text(r).map(|text| (fold_key(text), text));
                (RankKey::of(r, &self.vehicle_type), column, r)
            })
            .collect();

        // `sort_by` is stable: equal keys keep input order.
        keyed.sort_by(|(ka, ca, _), (kb, cb, _)| {
            let secondary = match (ca, cb) {
                (Some((fa, ra)), Some((fb, rb))) => fa.cmp(fb).then_with(|| ra.cmp(rb)),
                _ => kb.vacancy_rank.cmp(&ka.vacancy_rank),
            };
            let secondary = match self.direction {
                SortDirection::Natural => secondary,
                SortDirection::Reversed => secondary.reverse(),
            };
            ka.status_rank.cmp(&kb.status_rank).then(secondary)
        });

        keyed.into_iter().map(|(_, _, r)| r).collect()
    }

    fn column_text<'a>(&self, record: &'a CarparkRecord) -> Option<&'a str> {
        match self.column {
            SortColumn::Vacancy => None,
            SortColumn::Name => Some(record.name(self.lang)),
            SortColumn::Address => Some(record.address(self.lang)),
            SortColumn::District => Some(record.district(self.lang)),
        }
    }
}

/// Rank by status then vacancy for `vehicle_type`, no filtering.
pub fn rank<'a>(records: &'a [CarparkRecord], vehicle_type: &str) -> Vec<&'a CarparkRecord> {
    CarparkRanker::new(vehicle_type).rank(records)
}

/// Compare two records the way [`rank`] would. Useful for callers that keep
/// their own collections sorted.
pub fn compare(a: &CarparkRecord, b: &CarparkRecord, vehicle_type: &str) -> Ordering {
    let ka = RankKey::of(a, vehicle_type);
    let kb = RankKey::of(b, vehicle_type);
    ka.status_rank
        .cmp(&kb.status_rank)
        .then(kb.vacancy_rank.cmp(&ka.vacancy_rank))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carpark::{OpeningStatus, Vacancy};
    use crate::lang::Localized;

    fn park(id: &str, status: OpeningStatus, p: Option<u32>) -> CarparkRecord {
        let mut record = CarparkRecord {
            park_id: id.to_owned(),
            name: Localized::new(format!("{id} Car Park"), format!("{id}停車場"), String::new()),
            status,
            ..Default::default()
        };
        if let Some(n) = p {
            record.vacancies.insert("P".into(), Vacancy::Spaces(n));
        }
        record
    }

    fn ids(records: &[&CarparkRecord]) -> Vec<String> {
        records.iter().map(|r| r.park_id.clone()).collect()
    }

    #[test]
    fn status_dominates_vacancy() {
        let records = vec![
            park("a", OpeningStatus::Open, Some(5)),
            park("b", OpeningStatus::Closed, Some(10)),
            park("c", OpeningStatus::Open, None),
        ];
        assert_eq!(ids(&rank(&records, "P")), ["a", "c", "b"]);
    }

    #[test]
    fn full_ranks_below_no_data() {
        let records = vec![
            park("full", OpeningStatus::Open, Some(0)),
            park("none", OpeningStatus::Open, None),
            park("one", OpeningStatus::Open, Some(1)),
        ];
        assert_eq!(ids(&rank(&records, "P")), ["one", "none", "full"]);
    }

    #[test]
    fn unknown_status_sorts_last() {
        let records = vec![
            park("u", OpeningStatus::Unknown, Some(99)),
            park("c", OpeningStatus::Closed, None),
            park("o", OpeningStatus::Open, Some(0)),
        ];
        assert_eq!(ids(&rank(&records, "P")), ["o", "c", "u"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let records = vec![
            park("x", OpeningStatus::Open, Some(3)),
            park("y", OpeningStatus::Open, Some(3)),
            park("z", OpeningStatus::Open, Some(3)),
        ];
        assert_eq!(ids(&rank(&records, "P")), ["x", "y", "z"]);
    }

    #[test]
    fn other_vehicle_type_reads_its_own_column() {
        let mut m = park("m", OpeningStatus::Open, None);
        m.vacancies.insert("M".into(), Vacancy::Spaces(4));
        let records = vec![park("p", OpeningStatus::Open, Some(50)), m];
        assert_eq!(ids(&rank(&records, "M")), ["m", "p"]);
    }

    #[test]
    fn column_sort_keeps_status_primary() {
        let records = vec![
            park("Bravo", OpeningStatus::Open, Some(1)),
            park("Delta", OpeningStatus::Closed, Some(1)),
            park("alpha", OpeningStatus::Open, Some(100)),
            park("Charlie", OpeningStatus::Closed, Some(1)),
        ];
        let ranker = CarparkRanker::new("P").sort_by(SortColumn::Name, SortDirection::Natural);
        assert_eq!(ids(&ranker.rank(&records)), ["alpha", "Bravo", "Charlie", "Delta"]);

        let ranker = ranker.sort_by(SortColumn::Name, SortDirection::Reversed);
        assert_eq!(ids(&ranker.rank(&records)), ["Bravo", "alpha", "Delta", "Charlie"]);
    }

    #[test]
    fn vehicle_code_case_does_not_matter() {
        let records = vec![
            park("a", OpeningStatus::Open, Some(0)),
            park("b", OpeningStatus::Open, Some(50)),
        ];
        assert_eq!(ids(&rank(&records, "p")), ids(&rank(&records, "P")));
        assert_eq!(ids(&rank(&records, "p")), ["b", "a"]);
        assert_eq!(CarparkRanker::new(" m ").vehicle_type(), "M");
    }

    #[test]
    fn empty_input_is_fine() {
        assert!(rank(&[], "P").is_empty());
    }

    #[test]
    fn compare_agrees_with_rank() {
        let a = park("a", OpeningStatus::Open, Some(2));
        let b = park("b", OpeningStatus::Open, None);
        assert_eq!(compare(&a, &b, "P"), Ordering::Less);
        assert_eq!(compare(&b, &b, "P"), Ordering::Equal);
    }
}
