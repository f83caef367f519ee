//! demodash-server
//! ===============
//!
//! Web host for the demographic migration dashboard built on
//! [`demodash-core`].
//!
//! This crate primarily provides a binary (`demodash`). We include a small
//! library target so that the documentation renders this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! demodash --help
//! demodash -i data/migration.csv stats
//! demodash -i data/migration.csv serve --port 8050
//! ```
//!
//! Endpoints
//! ---------
//!
//! - `GET /`             the dashboard page
//! - `GET /api/options`  dropdown and checklist options
//! - `GET /api/figures`  both figures; `countries` and `origins` repeat per value
//!   (`?countries=Korea%2C%20South&countries=Mexico&origins=Mexico`)
//! - `POST /api/update`  `{ "state": ..., "changed": "city", "seq": 3 }`, returns only
//!   affected figures and echoes `seq`
//! - `GET /api/cities`   metro area search, `?q=omaha`
//! - `GET /healthz`      liveness and row count
//!
//! For programmatic access to filtering and chart building, use the
//! [`demodash-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
