pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::random::{FixedRandom, SeededRandom, ThreadRandom};
pub use adapters::store::{JsonFileStore, MemoryStore, NullStore};
pub use config::toml_config::TomlConfig;
pub use crate::core::compatibility::score;
pub use crate::core::engine::{EngineOptions, ReadingEngine};
pub use crate::core::sign_resolver::resolve;
pub use domain::model::{BirthDate, CompatibilityResult, HoroscopeReading, Person};
pub use domain::zodiac::{Element, ZodiacSign};
pub use utils::error::{ReadingError, Result};
