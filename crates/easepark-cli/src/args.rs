use clap::{Parser, Subcommand};
use easepark_core::{Language, SortColumn};
use std::path::PathBuf;

/// CLI arguments for easepark
#[derive(Debug, Parser)]
#[command(
    name = "easepark",
    version,
    about = "Resolve Hong Kong districts and rank car parks by vacancy"
)]
pub struct CliArgs {
    /// Settings file (TOML). Flags below override its values.
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Display language: en, tc or sc
    #[arg(short = 'l', long = "lang", global = true)]
    pub lang: Option<Language>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List regions and their districts
    Districts,

    /// Resolve a route parameter (region, district, or anything else)
    Resolve {
        /// e.g. hong_kong_island, Central-Western, 灣仔區
        param: String,

        /// Print the title without the "Parking Information" suffix
        #[arg(long)]
        bare: bool,
    },

    /// Rank car parks from a feed snapshot
    Rank {
        /// Directory holding basic_info_all.json and vacancy_all.json (.gz allowed)
        #[arg(short = 'd', long = "data", conflicts_with_all = ["basic", "vacancy"])]
        data_dir: Option<PathBuf>,

        /// Path to basic_info_all.json
        #[arg(long, requires = "vacancy")]
        basic: Option<PathBuf>,

        /// Path to vacancy_all.json
        #[arg(long, requires = "basic")]
        vacancy: Option<PathBuf>,

        /// Restrict to a region or district (any supported spelling)
        #[arg(long)]
        district: Option<String>,

        /// Vehicle type code: P, L, H, M or C
        #[arg(short = 'v', long = "vehicle")]
        vehicle: Option<String>,

        /// Case-insensitive substring of name or address
        #[arg(short = 's', long)]
        search: Option<String>,

        /// Only list car parks that are open
        #[arg(long)]
        open_only: bool,

        /// Secondary sort column: vacancy, name, address or district
        #[arg(long)]
        sort: Option<SortColumn>,

        /// Reverse the secondary sort
        #[arg(long)]
        desc: bool,

        /// Print at most N rows
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Download the live feeds into a directory
    #[cfg(feature = "fetch")]
    Fetch {
        /// Output directory
        #[arg(short = 'o', long = "out", default_value = ".")]
        out: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rank_with_flags() {
        let args = CliArgs::try_parse_from([
            "easepark", "--lang", "tc", "rank", "--data", "snap", "--district", "kowloon",
            "-v", "M", "--open-only", "--sort", "name", "--desc", "-n", "5",
        ])
        .unwrap();
        assert_eq!(args.lang, Some(Language::Tc));
        match args.command {
            Commands::Rank { data_dir, district, vehicle, open_only, sort, desc, limit, .. } => {
                assert_eq!(data_dir, Some(PathBuf::from("snap")));
                assert_eq!(district.as_deref(), Some("kowloon"));
                assert_eq!(vehicle.as_deref(), Some("M"));
                assert!(open_only && desc);
                assert_eq!(sort, Some(SortColumn::Name));
                assert_eq!(limit, Some(5));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn basic_requires_vacancy() {
        assert!(CliArgs::try_parse_from(["easepark", "rank", "--basic", "a.json"]).is_err());
    }

    #[test]
    fn rejects_unknown_language() {
        assert!(CliArgs::try_parse_from(["easepark", "-l", "fr", "districts"]).is_err());
    }
}
