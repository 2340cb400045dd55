use crate::domain::zodiac::ZodiacSign;
use crate::utils::error::{ReadingError, Result};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 出生日期。月/日不做曆法檢查，2 月 30 日照樣交給星座判斷
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDate {
    pub month: u32,
    pub day: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl BirthDate {
    pub fn new(month: u32, day: u32) -> Self {
        Self {
            month,
            day,
            year: None,
        }
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
            year: Some(date.year()),
        }
    }
}

impl FromStr for BirthDate {
    type Err = ReadingError;

    /// 接受 `YYYY-MM-DD`（由 chrono 檢查）或 `MM-DD`（只檢查是數字）
    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim();
        let parse_error = || ReadingError::ParseError {
            input: s.to_string(),
            expected: "birth date (YYYY-MM-DD or MM-DD)".to_string(),
        };

        match input.split('-').count() {
            3 => NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .map(BirthDate::from_naive)
                .map_err(|_| parse_error()),
            2 => {
                let (month, day) = input.split_once('-').ok_or_else(parse_error)?;
                let month = month.parse::<u32>().map_err(|_| parse_error())?;
                let day = day.parse::<u32>().map_err(|_| parse_error())?;
                Ok(BirthDate::new(month, day))
            }
            _ => Err(parse_error()),
        }
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.year {
            Some(year) => write!(f, "{:04}-{:02}-{:02}", year, self.month, self.day),
            None => write!(f, "{:02}-{:02}", self.month, self.day),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub name: String,
    pub date_of_birth: BirthDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Person {
    pub fn new(name: impl Into<String>, date_of_birth: BirthDate) -> Self {
        Self {
            name: name.into(),
            date_of_birth,
            time_of_birth: None,
            location: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResult {
    pub score: i32,
    pub romantic_potential: String,
    pub communication_style: String,
    pub challenges: String,
    pub love_energy: String,
}

impl CompatibilityResult {
    pub fn grade(&self) -> ScoreGrade {
        ScoreGrade::from_score(self.score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreGrade {
    A,
    B,
    C,
    D,
    F,
}

impl ScoreGrade {
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 80 => ScoreGrade::A,
            s if s >= 65 => ScoreGrade::B,
            s if s >= 50 => ScoreGrade::C,
            s if s >= 35 => ScoreGrade::D,
            _ => ScoreGrade::F,
        }
    }
}

impl fmt::Display for ScoreGrade {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let letter = match self {
            ScoreGrade::A => "A",
            ScoreGrade::B => "B",
            ScoreGrade::C => "C",
            ScoreGrade::D => "D",
            ScoreGrade::F => "F",
        };
        write!(f, "{}", letter)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoroscopeReading {
    /// 未知星座名稱時保留原始字串
    pub zodiac_sign: String,
    pub traits: Vec<String>,
    pub horoscope: String,
    pub forecast: String,
    pub career_forecast: String,
    pub love_forecast: String,
    pub family_forecast: String,
    pub finance_forecast: String,
    pub lucky_cycle: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoroscopeReport {
    #[serde(flatten)]
    pub person: Person,
    #[serde(flatten)]
    pub reading: HoroscopeReading,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSummary {
    #[serde(flatten)]
    pub person: Person,
    pub zodiac_sign: ZodiacSign,
    pub traits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityReport {
    pub person1: PersonSummary,
    pub person2: PersonSummary,
    pub compatibility: CompatibilityResult,
}

pub const HOROSCOPE_READING_TYPE: &str = "horoscope";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoroscopeRecord {
    pub id: Uuid,
    pub user_id: String,
    pub reading_type: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityRecord {
    pub id: Uuid,
    pub user_id: String,
    pub person1_name: String,
    pub person1_birthdate: String,
    pub person2_name: String,
    pub person2_birthdate: String,
    pub compatibility_score: Option<i32>,
    pub reading_content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub birth_date: Option<String>,
    pub birth_time: Option<String>,
    pub birth_location: Option<String>,
    /// 後端欄位是自由文字
    pub zodiac_sign: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadingHistory {
    pub horoscopes: Vec<HoroscopeRecord>,
    pub compatibilities: Vec<CompatibilityRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_date() {
        let date: BirthDate = "1990-03-21".parse().unwrap();
        assert_eq!(date, BirthDate { month: 3, day: 21, year: Some(1990) });
        assert_eq!(date.to_string(), "1990-03-21");
    }

    #[test]
    fn test_parse_month_day_without_calendar_check() {
        let date: BirthDate = "02-30".parse().unwrap();
        assert_eq!(date, BirthDate::new(2, 30));
        assert_eq!(date.to_string(), "02-30");
    }

    #[test]
    fn test_parse_rejects_impossible_full_date() {
        assert!("2023-02-30".parse::<BirthDate>().is_err());
        assert!("March 21".parse::<BirthDate>().is_err());
        assert!("aa-bb".parse::<BirthDate>().is_err());
    }

    #[test]
    fn test_score_grades() {
        assert_eq!(ScoreGrade::from_score(98), ScoreGrade::A);
        assert_eq!(ScoreGrade::from_score(80), ScoreGrade::A);
        assert_eq!(ScoreGrade::from_score(79), ScoreGrade::B);
        assert_eq!(ScoreGrade::from_score(65), ScoreGrade::B);
        assert_eq!(ScoreGrade::from_score(50), ScoreGrade::C);
        assert_eq!(ScoreGrade::from_score(45), ScoreGrade::D);
        assert_eq!(ScoreGrade::from_score(34), ScoreGrade::F);
    }

    #[test]
    fn test_compatibility_result_uses_camel_case() {
        let result = CompatibilityResult {
            score: 70,
            romantic_potential: "r".into(),
            communication_style: "c".into(),
            challenges: "x".into(),
            love_energy: "l".into(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("romanticPotential").is_some());
        assert!(json.get("loveEnergy").is_some());
    }
}
