pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use domain::model::DepartureRules;
pub use self::core::{engine::AugmentEngine, pipeline::DeparturePipeline};
pub use utils::error::{AugmentError, Result};
