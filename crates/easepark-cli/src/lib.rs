//! easepark-cli
//! ============
//!
//! Command-line front end for [`easepark-core`]: list districts, resolve
//! route parameters and rank car parks from a feed snapshot.
//!
//! The binary (`easepark`) is the deliverable; this library target only
//! carries the overview page.
//!
//! ```text
//! easepark --help
//! easepark districts --lang sc
//! easepark resolve "Central & Western"
//! easepark rank --data ./snapshot --district kowloon --open-only -n 20
//! ```
//!
//! Enable feature `fetch` for `easepark fetch --out DIR`, which downloads
//! `basic_info_all.json` and `vacancy_all.json` from the Transport
//! Department.
#![cfg_attr(docsrs, feature(doc_cfg))]
