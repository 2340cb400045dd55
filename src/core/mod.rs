pub mod compatibility;
pub mod engine;
pub mod horoscope;
pub mod narrative;
pub mod sign_resolver;

pub use crate::domain::model::{BirthDate, CompatibilityResult, HoroscopeReading};
pub use crate::domain::ports::{ConfigProvider, RandomSource, ReadingStore};
pub use crate::domain::zodiac::{Element, ZodiacSign};
pub use crate::utils::error::Result;
