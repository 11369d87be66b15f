//! easepark: command-line front end for easepark-core
//!
//! Usage examples
//! --------------
//!
//! - List regions and districts
//!   $ easepark districts --lang tc
//!
//! - Resolve a route parameter
//!   $ easepark resolve hong-kong-island
//!   $ easepark resolve "Central & Western" --bare
//!
//! - Rank car parks from a downloaded snapshot
//!   $ easepark rank --data ./snapshot --district kowloon --vehicle P --open-only
//!   $ easepark rank --basic basic_info_all.json --vacancy vacancy_all.json --sort name
//!
//! - Download the live feeds (feature `fetch`)
//!   $ easepark fetch --out ./snapshot
//!
//! Settings
//! --------
//!
//! `--config settings.toml` supplies defaults (`lang`, `vehicle_type`,
//! `open_only`, `sort`, ...); flags override them. Logging goes through
//! `env_logger` at `info` by default; set `RUST_LOG=debug` to see fallback
//! resolutions and coerced feed values.
mod args;
mod render;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use easepark_core::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = CliArgs::parse();

    let mut settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("reading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(lang) = args.lang {
        settings.lang = lang;
    }

    match args.command {
        Commands::Districts => {
            print!("{}", render::district_table(settings.lang));
        }

        Commands::Resolve { param, bare } => {
            if bare {
                settings.title_suffix = false;
            }
            let resolution = settings.resolver().resolve(&param, settings.lang);
            print!("{}", render::resolution(&resolution, settings.lang));
        }

        Commands::Rank {
            data_dir,
            basic,
            vacancy,
            district,
            vehicle,
            search,
            open_only,
            sort,
            desc,
            limit,
        } => {
            let snapshot = match (data_dir, basic, vacancy) {
                (_, Some(basic), Some(vacancy)) => FeedSnapshot::load_from_paths(&basic, &vacancy)
                    .with_context(|| format!("loading {} / {}", basic.display(), vacancy.display()))?,
                (Some(dir), _, _) => FeedSnapshot::load_from_dir(&dir)
                    .with_context(|| format!("loading snapshot from {}", dir.display()))?,
                (None, _, _) => FeedSnapshot::load_from_dir(".")
                    .context("no --data or --basic/--vacancy given and none in the current directory")?,
            };
            let records = snapshot.into_records();

            if let Some(vehicle) = vehicle {
                settings.vehicle_type = vehicle;
            }
            if let Some(sort) = sort {
                settings.sort = sort;
            }
            if desc {
                settings.direction = SortDirection::Reversed;
            }
            settings.open_only |= open_only;

            let mut filter = CarparkFilter::new().open_only(settings.open_only);
            if let Some(query) = search {
                filter = filter.search(query);
            }
            let title = match district {
                Some(param) => {
                    let resolution = settings.resolver().resolve(&param, settings.lang);
                    let title = resolution.title().to_owned();
                    filter = filter.districts(resolution);
                    title
                }
                None => String::new(),
            };

            let ranked = settings.ranker().filter(filter).rank(&records);
            log::info!("{} of {} car parks selected", ranked.len(), records.len());

            if !title.is_empty() {
                println!("{title}");
            }
            let shown = limit.map_or(ranked.len(), |n| n.min(ranked.len()));
            print!(
                "{}",
                render::carpark_rows(&ranked[..shown], &settings.vehicle_type, settings.lang)
            );
        }

        #[cfg(feature = "fetch")]
        Commands::Fetch { out } => {
            for file in [
                easepark_core::loader::BASIC_INFO_FILE,
                easepark_core::loader::VACANCY_FILE,
            ] {
                let path = easepark_core::loader::download_feed(file, &out)
                    .with_context(|| format!("downloading {file}"))?;
                println!("saved {}", path.display());
            }
        }
    }

    Ok(())
}
