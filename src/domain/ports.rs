use crate::domain::model::{CompatibilityRecord, HoroscopeRecord, Profile};
use crate::utils::error::Result;

/// 隨機擾動來源，讓測試可以固定分數
pub trait RandomSource {
    /// 回傳 `[low, high]` 內的整數（含兩端）
    fn next_in_range(&mut self, low: i32, high: i32) -> i32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_in_range(&mut self, low: i32, high: i32) -> i32 {
        (**self).next_in_range(low, high)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_in_range(&mut self, low: i32, high: i32) -> i32 {
        (**self).next_in_range(low, high)
    }
}

/// 讀數歷史的儲存介面，對應後端的三張表
pub trait ReadingStore: Send + Sync {
    fn insert_horoscope(&self, record: HoroscopeRecord) -> Result<()>;
    fn insert_compatibility(&self, record: CompatibilityRecord) -> Result<()>;
    /// 依 created_at 由新到舊
    fn list_horoscopes(&self, user_id: &str) -> Result<Vec<HoroscopeRecord>>;
    /// 依 created_at 由新到舊
    fn list_compatibilities(&self, user_id: &str) -> Result<Vec<CompatibilityRecord>>;
    fn upsert_profile(&self, profile: Profile) -> Result<()>;
    fn profile(&self, user_id: &str) -> Result<Option<Profile>>;
}

pub trait ConfigProvider: Send + Sync {
    fn seed(&self) -> Option<u64>;
    fn strict_dates(&self) -> bool;
    fn history_enabled(&self) -> bool;
    fn history_path(&self) -> &str;
    fn user_id(&self) -> &str;
    fn output_format(&self) -> &str;
}

impl<S: ReadingStore + ?Sized> ReadingStore for Box<S> {
    fn insert_horoscope(&self, record: HoroscopeRecord) -> Result<()> {
        (**self).insert_horoscope(record)
    }

    fn insert_compatibility(&self, record: CompatibilityRecord) -> Result<()> {
        (**self).insert_compatibility(record)
    }

    fn list_horoscopes(&self, user_id: &str) -> Result<Vec<HoroscopeRecord>> {
        (**self).list_horoscopes(user_id)
    }

    fn list_compatibilities(&self, user_id: &str) -> Result<Vec<CompatibilityRecord>> {
        (**self).list_compatibilities(user_id)
    }

    fn upsert_profile(&self, profile: Profile) -> Result<()> {
        (**self).upsert_profile(profile)
    }

    fn profile(&self, user_id: &str) -> Result<Option<Profile>> {
        (**self).profile(user_id)
    }
}
