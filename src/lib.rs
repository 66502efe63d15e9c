//! Genetic search for dining-philosophers configurations.
//!
//! Two contention models share one evolution engine:
//!
//! - **ordering**: each philosopher picks which fork to grab first; fitness
//!   is the mean number of diners over random wake-up orders.
//! - **schedule**: each philosopher gets an arrival delay; fitness is the
//!   number of diners when meals occupy forks for a fixed duration.
//!
//! ```no_run
//! use dining_search::{config::AppConfig, search::run_genetic_search, types::Variant};
//!
//! let config = AppConfig { seed: Some(7), ..Default::default() };
//! let report = run_genetic_search(Variant::Schedule, &config, ()).unwrap();
//! println!("{}", report);
//! ```

pub mod config;
pub mod engines;
pub mod error;
pub mod search;
pub mod types;

pub use error::{DiningError, Result};
