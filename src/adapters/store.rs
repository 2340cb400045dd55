use crate::domain::model::{CompatibilityRecord, HoroscopeRecord, Profile};
use crate::domain::ports::ReadingStore;
use crate::utils::error::{ReadingError, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// 整份歷史資料，JSON 檔案就是這個結構
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(default)]
    pub horoscope_readings: Vec<HoroscopeRecord>,
    #[serde(default)]
    pub compatibility_readings: Vec<CompatibilityRecord>,
    #[serde(default)]
    pub profiles: Vec<Profile>,
}

impl StoreDocument {
    fn horoscopes_for(&self, user_id: &str) -> Vec<HoroscopeRecord> {
        // 先反轉插入順序，同時間的紀錄以後寫入的排前面
        let mut records: Vec<HoroscopeRecord> = self
            .horoscope_readings
            .iter()
            .rev()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records
    }

    fn compatibilities_for(&self, user_id: &str) -> Vec<CompatibilityRecord> {
        let mut records: Vec<CompatibilityRecord> = self
            .compatibility_readings
            .iter()
            .rev()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records
    }

    fn upsert_profile(&mut self, mut profile: Profile) {
        let now = Utc::now();
        profile.updated_at = Some(now);
        match self.profiles.iter_mut().find(|p| p.id == profile.id) {
            Some(existing) => {
                profile.created_at = existing.created_at.or(Some(now));
                *existing = profile;
            }
            None => {
                profile.created_at = profile.created_at.or(Some(now));
                self.profiles.push(profile);
            }
        }
    }

    fn profile(&self, user_id: &str) -> Option<Profile> {
        self.profiles.iter().find(|p| p.id == user_id).cloned()
    }
}

fn lock_error<T>(_: std::sync::PoisonError<T>) -> ReadingError {
    ReadingError::StorageError {
        message: "store lock poisoned".to_string(),
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    document: Mutex<StoreDocument>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn document(&self) -> Result<MutexGuard<'_, StoreDocument>> {
        self.document.lock().map_err(lock_error)
    }
}

impl ReadingStore for MemoryStore {
    fn insert_horoscope(&self, record: HoroscopeRecord) -> Result<()> {
        self.document()?.horoscope_readings.push(record);
        Ok(())
    }

    fn insert_compatibility(&self, record: CompatibilityRecord) -> Result<()> {
        self.document()?.compatibility_readings.push(record);
        Ok(())
    }

    fn list_horoscopes(&self, user_id: &str) -> Result<Vec<HoroscopeRecord>> {
        Ok(self.document()?.horoscopes_for(user_id))
    }

    fn list_compatibilities(&self, user_id: &str) -> Result<Vec<CompatibilityRecord>> {
        Ok(self.document()?.compatibilities_for(user_id))
    }

    fn upsert_profile(&self, profile: Profile) -> Result<()> {
        self.document()?.upsert_profile(profile);
        Ok(())
    }

    fn profile(&self, user_id: &str) -> Result<Option<Profile>> {
        Ok(self.document()?.profile(user_id))
    }
}

/// 以單一 JSON 檔保存歷史。每次寫入先寫暫存檔再 rename。
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    guard: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            guard: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<StoreDocument> {
        if !self.path.exists() {
            tracing::debug!("History file {} not found, starting empty", self.path.display());
            return Ok(StoreDocument::default());
        }
        let data = fs::read(&self.path)?;
        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(StoreDocument::default());
        }
        Ok(serde_json::from_slice(&data)?)
    }

    fn save(&self, document: &StoreDocument) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, serde_json::to_vec_pretty(document)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn modify<F>(&self, change: F) -> Result<()>
    where
        F: FnOnce(&mut StoreDocument),
    {
        let _guard = self.guard.lock().map_err(lock_error)?;
        let mut document = self.load()?;
        change(&mut document);
        self.save(&document)
    }

    fn read<T, F>(&self, query: F) -> Result<T>
    where
        F: FnOnce(&StoreDocument) -> T,
    {
        let _guard = self.guard.lock().map_err(lock_error)?;
        let document = self.load()?;
        Ok(query(&document))
    }
}

impl ReadingStore for JsonFileStore {
    fn insert_horoscope(&self, record: HoroscopeRecord) -> Result<()> {
        self.modify(|doc| doc.horoscope_readings.push(record))
    }

    fn insert_compatibility(&self, record: CompatibilityRecord) -> Result<()> {
        self.modify(|doc| doc.compatibility_readings.push(record))
    }

    fn list_horoscopes(&self, user_id: &str) -> Result<Vec<HoroscopeRecord>> {
        self.read(|doc| doc.horoscopes_for(user_id))
    }

    fn list_compatibilities(&self, user_id: &str) -> Result<Vec<CompatibilityRecord>> {
        self.read(|doc| doc.compatibilities_for(user_id))
    }

    fn upsert_profile(&self, profile: Profile) -> Result<()> {
        self.modify(|doc| doc.upsert_profile(profile))
    }

    fn profile(&self, user_id: &str) -> Result<Option<Profile>> {
        self.read(|doc| doc.profile(user_id))
    }
}

/// 歷史功能關閉時使用；寫入直接丟棄
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStore;

impl ReadingStore for NullStore {
    fn insert_horoscope(&self, _record: HoroscopeRecord) -> Result<()> {
        Ok(())
    }

    fn insert_compatibility(&self, _record: CompatibilityRecord) -> Result<()> {
        Ok(())
    }

    fn list_horoscopes(&self, _user_id: &str) -> Result<Vec<HoroscopeRecord>> {
        Ok(Vec::new())
    }

    fn list_compatibilities(&self, _user_id: &str) -> Result<Vec<CompatibilityRecord>> {
        Ok(Vec::new())
    }

    fn upsert_profile(&self, _profile: Profile) -> Result<()> {
        Ok(())
    }

    fn profile(&self, _user_id: &str) -> Result<Option<Profile>> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::HOROSCOPE_READING_TYPE;
    use chrono::{Duration, Utc};
    use tempfile::TempDir;
    use uuid::Uuid;

    fn horoscope(user_id: &str, minutes_ago: i64, content: &str) -> HoroscopeRecord {
        HoroscopeRecord {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            reading_type: HOROSCOPE_READING_TYPE.to_string(),
            content: content.to_string(),
            created_at: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    #[test]
    fn test_memory_store_orders_newest_first() {
        let store = MemoryStore::new();
        store.insert_horoscope(horoscope("u1", 10, "old")).unwrap();
        store.insert_horoscope(horoscope("u1", 0, "new")).unwrap();
        store.insert_horoscope(horoscope("u2", 5, "other")).unwrap();

        let records = store.list_horoscopes("u1").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].content, "new");
        assert_eq!(records[1].content, "old");
    }

    #[test]
    fn test_json_store_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("readings.json");

        let store = JsonFileStore::new(&path);
        store.insert_horoscope(horoscope("u1", 1, "first")).unwrap();
        drop(store);

        let reopened = JsonFileStore::new(&path);
        let records = reopened.list_horoscopes("u1").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].content, "first");
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_json_store_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("none.json"));
        assert!(store.list_compatibilities("u1").unwrap().is_empty());
        assert!(store.profile("u1").unwrap().is_none());
    }

    #[test]
    fn test_json_store_rejects_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::new(&path);
        let err = store.list_horoscopes("u1").unwrap_err();
        assert!(matches!(err, ReadingError::SerializationError(_)));
    }

    #[test]
    fn test_profile_upsert_keeps_created_at() {
        let store = MemoryStore::new();
        let profile = Profile {
            id: "u1".to_string(),
            full_name: Some("Ada".to_string()),
            ..Profile::default()
        };
        store.upsert_profile(profile.clone()).unwrap();
        let first = store.profile("u1").unwrap().unwrap();

        store
            .upsert_profile(Profile {
                full_name: Some("Ada L.".to_string()),
                ..profile
            })
            .unwrap();
        let second = store.profile("u1").unwrap().unwrap();

        assert_eq!(second.full_name.as_deref(), Some("Ada L."));
        assert_eq!(second.created_at, first.created_at);
        assert!(second.updated_at >= first.updated_at);
    }

    #[test]
    fn test_null_store_discards() {
        let store = NullStore;
        store.insert_horoscope(horoscope("u1", 0, "x")).unwrap();
        assert!(store.list_horoscopes("u1").unwrap().is_empty());
    }
}
