use easepark_core::prelude::*;
use std::fmt::Write;

/// Regions with their districts, one district per indented line.
pub fn district_table(lang: Language) -> String {
    let mut out = String::new();
    for region in RegionKey::ALL {
        let _ = writeln!(out, "{} ({})", region.localized(lang), region.id());
        for district in region.districts() {
            let _ = writeln!(out, "  {:<24} {}", district.canonical_name(), district.localized(lang));
        }
    }
    out
}

pub fn resolution(resolution: &Resolution, lang: Language) -> String {
    let scope = match resolution.scope() {
        Scope::Region(region) => format!("region {}", region.id()),
        Scope::District(district) => format!("district {}", district.canonical_name()),
        Scope::Passthrough => "passthrough".to_owned(),
    };
    let mut out = String::new();
    let _ = writeln!(out, "scope:     {scope}");
    let _ = writeln!(out, "title:     {}", resolution.title());
    for district in resolution.districts() {
        let _ = writeln!(
            out,
            "district:  {} / {}",
            district.canonical_name(),
            district.localized(lang)
        );
    }
    out
}

/// Tab-separated rows: id, status, vacancy, district, name.
pub fn carpark_rows(records: &[&CarparkRecord], vehicle_type: &str, lang: Language) -> String {
    let mut out = String::new();
    for record in records {
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}",
            record.park_id,
            record.status.localized(lang),
            record.vacancy(vehicle_type),
            record.district(lang),
            record.name(lang),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn district_table_lists_every_district_once() {
        let table = district_table(Language::En);
        assert_eq!(table.lines().count(), 3 + 18);
        assert!(table.contains("Central and Western"));
        assert!(table.starts_with("Hong Kong Island"));
    }

    #[test]
    fn resolution_shows_scope_and_title() {
        let text = resolution(&resolve("wan-chai", Language::Tc), Language::Tc);
        assert!(text.contains("district Wan Chai"));
        assert!(text.contains("停車場資訊"));

        let text = resolution(&resolve("tin shui wai", Language::En), Language::En);
        assert!(text.contains("passthrough"));
        assert!(text.contains("Tin Shui Wai Parking Information"));
    }

    #[test]
    fn rows_show_no_data_for_missing_vehicle_type() {
        let record = CarparkRecord {
            park_id: "x1".into(),
            name: Localized::new("Alpha".into(), "甲".into(), "甲".into()),
            status: OpeningStatus::Open,
            ..Default::default()
        };
        let rows = carpark_rows(&[&record], "P", Language::En);
        assert_eq!(rows, "x1\tOpen\tN/A\t\tAlpha\n");
    }
}
