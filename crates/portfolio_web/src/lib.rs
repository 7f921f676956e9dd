//! Web layer of the portfolio site.
//!
//! Static pages (home, about, resume, contact, thank-you) plus a projects
//! showcase backed by [`portfolio_core::ProjectStore`]. Startup runs
//! [`bootstrap::prepare_store`] before the listener is bound, so the first
//! request always sees an initialized schema.
//!
//! # Environment
//!
//! | Key | Default |
//! |---|---|
//! | `PORTFOLIO_HOST` | `0.0.0.0` |
//! | `PORT` | `5000` |
//! | `PORTFOLIO_DEBUG` | `0` |
//! | `PORTFOLIO_DB_PATH` | `projects.db` |
//! | `PORTFOLIO_STATIC_DIR` | `static` |
//! | `PORTFOLIO_IMAGES_DIR` | `static/images` |
//! | `PORTFOLIO_LOG_DIR` | unset (stderr) |
//! | `PORTFOLIO_SEED_DEMO` | `1` |

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod form;
pub mod legacy;
pub mod routes;
pub mod server;
pub mod state;
pub mod templates;

pub use bootstrap::{prepare_store, StartupError};
pub use config::{ConfigError, WebConfig};
pub use server::{build_router, serve};
pub use state::AppState;
