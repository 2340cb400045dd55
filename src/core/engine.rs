use crate::adapters::random::{self, DynRandom};
use crate::adapters::store::{JsonFileStore, NullStore};
use crate::core::{compatibility, horoscope, narrative, sign_resolver};
use crate::domain::model::{
    BirthDate, CompatibilityRecord, CompatibilityReport, HoroscopeRecord, HoroscopeReport, Person,
    PersonSummary, Profile, ReadingHistory, HOROSCOPE_READING_TYPE,
};
use crate::domain::ports::{ConfigProvider, RandomSource, ReadingStore};
use crate::utils::error::{ReadingError, Result};
use crate::utils::validation::{validate_calendar_date, validate_min_chars, validate_non_empty_string};
use chrono::Utc;
use uuid::Uuid;

pub const MIN_NAME_CHARS: usize = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct EngineOptions {
    /// 拒絕不存在的日期（核心本身不檢查）
    pub strict_dates: bool,
}

pub struct ReadingEngine<R: RandomSource, S: ReadingStore> {
    rng: R,
    store: S,
    options: EngineOptions,
}

pub type DynReadingEngine = ReadingEngine<DynRandom, Box<dyn ReadingStore>>;

impl<R: RandomSource, S: ReadingStore> ReadingEngine<R, S> {
    pub fn new(rng: R, store: S) -> Self {
        Self::with_options(rng, store, EngineOptions::default())
    }

    pub fn with_options(rng: R, store: S, options: EngineOptions) -> Self {
        Self { rng, store, options }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn validate_date(&self, field: &str, date: &BirthDate) -> Result<()> {
        if self.options.strict_dates {
            validate_calendar_date(field, date.year, date.month, date.day)?;
        }
        Ok(())
    }

    fn validate_person(&self, field: &str, person: &Person) -> Result<()> {
        validate_min_chars(&format!("{}.name", field), &person.name, MIN_NAME_CHARS)?;
        self.validate_date(&format!("{}.date_of_birth", field), &person.date_of_birth)
    }

    fn summarize(person: &Person) -> PersonSummary {
        let sign = sign_resolver::resolve_date(&person.date_of_birth);
        PersonSummary {
            person: person.clone(),
            zodiac_sign: sign,
            traits: narrative::traits(sign).iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn horoscope(&self, person: &Person) -> Result<HoroscopeReport> {
        self.validate_person("person", person)?;

        let reading = horoscope::generate_for_date(&person.date_of_birth);
        tracing::info!(
            "🔮 Horoscope for {} ({}): {}",
            person.name,
            person.date_of_birth,
            reading.zodiac_sign
        );

        Ok(HoroscopeReport {
            person: person.clone(),
            reading,
        })
    }

    pub fn compatibility(&mut self, first: &Person, second: &Person) -> Result<CompatibilityReport> {
        self.validate_person("person1", first)?;
        self.validate_person("person2", second)?;

        let person1 = Self::summarize(first);
        let person2 = Self::summarize(second);
        let result = compatibility::score(person1.zodiac_sign, person2.zodiac_sign, &mut self.rng);

        tracing::info!(
            "💞 Compatibility {} ({}) & {} ({}): score {} grade {}",
            first.name,
            person1.zodiac_sign,
            second.name,
            person2.zodiac_sign,
            result.score,
            result.grade()
        );
        tracing::debug!(
            "Base score before random adjustment: {}",
            compatibility::base_score(person1.zodiac_sign, person2.zodiac_sign)
        );

        Ok(CompatibilityReport {
            person1,
            person2,
            compatibility: result,
        })
    }

    pub fn save_horoscope(&self, user_id: &str, report: &HoroscopeReport) -> Result<HoroscopeRecord> {
        validate_non_empty_string("user_id", user_id)?;

        let record = HoroscopeRecord {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            reading_type: HOROSCOPE_READING_TYPE.to_string(),
            content: serde_json::to_string(report)?,
            created_at: Utc::now(),
        };
        self.store.insert_horoscope(record.clone())?;
        tracing::debug!("Saved horoscope reading {} for {}", record.id, user_id);
        Ok(record)
    }

    pub fn save_compatibility(
        &self,
        user_id: &str,
        report: &CompatibilityReport,
    ) -> Result<CompatibilityRecord> {
        validate_non_empty_string("user_id", user_id)?;

        let record = CompatibilityRecord {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            person1_name: report.person1.person.name.clone(),
            person1_birthdate: report.person1.person.date_of_birth.to_string(),
            person2_name: report.person2.person.name.clone(),
            person2_birthdate: report.person2.person.date_of_birth.to_string(),
            compatibility_score: Some(report.compatibility.score),
            reading_content: serde_json::to_string(&report.compatibility)?,
            created_at: Utc::now(),
        };
        self.store.insert_compatibility(record.clone())?;
        tracing::debug!("Saved compatibility reading {} for {}", record.id, user_id);
        Ok(record)
    }

    pub fn history(&self, user_id: &str) -> Result<ReadingHistory> {
        Ok(ReadingHistory {
            horoscopes: self.store.list_horoscopes(user_id)?,
            compatibilities: self.store.list_compatibilities(user_id)?,
        })
    }

    /// 儲存個人資料；有生日時重新計算 zodiac_sign
    pub fn upsert_profile(&self, mut profile: Profile) -> Result<Profile> {
        validate_non_empty_string("profile.id", &profile.id)?;

        if let Some(raw) = profile.birth_date.as_deref() {
            let date: BirthDate = raw.parse()?;
            self.validate_date("profile.birth_date", &date)?;
            profile.zodiac_sign = Some(sign_resolver::resolve_date(&date).to_string());
        }

        self.store.upsert_profile(profile.clone())?;
        self.store
            .profile(&profile.id)?
            .ok_or_else(|| ReadingError::StorageError {
                message: format!("profile {} was not persisted", profile.id),
            })
    }

    pub fn profile(&self, user_id: &str) -> Result<Option<Profile>> {
        self.store.profile(user_id)
    }
}

impl DynReadingEngine {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        let store: Box<dyn ReadingStore> = if config.history_enabled() {
            tracing::debug!("Reading history stored at {}", config.history_path());
            Box::new(JsonFileStore::new(config.history_path()))
        } else {
            Box::new(NullStore)
        };

        ReadingEngine::with_options(
            random::from_seed(config.seed()),
            store,
            EngineOptions {
                strict_dates: config.strict_dates(),
            },
        )
    }
}
