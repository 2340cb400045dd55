use crate::domain::model::BirthDate;
use crate::domain::zodiac::ZodiacSign;

/// (sign, 起始月, 起始日, 結束月, 結束日)，依序比對
const SIGN_RANGES: [(ZodiacSign, u32, u32, u32, u32); 11] = [
    (ZodiacSign::Aries, 3, 21, 4, 19),
    (ZodiacSign::Taurus, 4, 20, 5, 20),
    (ZodiacSign::Gemini, 5, 21, 6, 20),
    (ZodiacSign::Cancer, 6, 21, 7, 22),
    (ZodiacSign::Leo, 7, 23, 8, 22),
    (ZodiacSign::Virgo, 8, 23, 9, 22),
    (ZodiacSign::Libra, 9, 23, 10, 22),
    (ZodiacSign::Scorpio, 10, 23, 11, 21),
    (ZodiacSign::Sagittarius, 11, 22, 12, 21),
    (ZodiacSign::Capricorn, 12, 22, 1, 19),
    (ZodiacSign::Aquarius, 1, 20, 2, 18),
];

/// 由月/日判斷星座。沒有任何區間符合時回傳 Pisces，
/// 所以不合法的日期也一定有結果。
pub fn resolve(month: u32, day: u32) -> ZodiacSign {
    SIGN_RANGES
        .iter()
        .find(|&&(_, start_month, start_day, end_month, end_day)| {
            (month == start_month && day >= start_day) || (month == end_month && day <= end_day)
        })
        .map(|&(sign, ..)| sign)
        .unwrap_or(ZodiacSign::Pisces)
}

pub fn resolve_date(date: &BirthDate) -> ZodiacSign {
    resolve(date.month, date.day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(resolve(3, 21), ZodiacSign::Aries);
        assert_eq!(resolve(3, 20), ZodiacSign::Pisces);
        assert_eq!(resolve(4, 19), ZodiacSign::Aries);
        assert_eq!(resolve(4, 20), ZodiacSign::Taurus);
        assert_eq!(resolve(1, 19), ZodiacSign::Capricorn);
        assert_eq!(resolve(1, 20), ZodiacSign::Aquarius);
    }

    #[test]
    fn test_year_wraparound() {
        assert_eq!(resolve(12, 21), ZodiacSign::Sagittarius);
        assert_eq!(resolve(12, 22), ZodiacSign::Capricorn);
        assert_eq!(resolve(12, 31), ZodiacSign::Capricorn);
        assert_eq!(resolve(1, 1), ZodiacSign::Capricorn);
    }

    #[test]
    fn test_pisces_is_the_fallback() {
        assert_eq!(resolve(2, 18), ZodiacSign::Aquarius);
        assert_eq!(resolve(2, 19), ZodiacSign::Pisces);
        assert_eq!(resolve(3, 1), ZodiacSign::Pisces);
        // 不存在的日期與月份也會落到 Pisces 或區間判斷
        assert_eq!(resolve(2, 30), ZodiacSign::Pisces);
        assert_eq!(resolve(13, 5), ZodiacSign::Pisces);
        assert_eq!(resolve(0, 0), ZodiacSign::Pisces);
    }

    #[test]
    fn test_out_of_range_day_follows_predicate_chain() {
        // 4 月 31 日仍符合 Taurus 的起始條件
        assert_eq!(resolve(4, 31), ZodiacSign::Taurus);
        assert_eq!(resolve(6, 31), ZodiacSign::Cancer);
    }

    #[test]
    fn test_resolve_date() {
        let date: BirthDate = "1988-08-23".parse().unwrap();
        assert_eq!(resolve_date(&date), ZodiacSign::Virgo);
    }
}
