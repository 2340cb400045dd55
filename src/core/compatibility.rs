use crate::core::narrative::{self, ElementPairing};
use crate::domain::model::CompatibilityResult;
use crate::domain::ports::RandomSource;
use crate::domain::zodiac::{Element, ZodiacSign};

pub const BASE_SCORE: i32 = 60;
pub const SAME_SIGN_BONUS: i32 = 15;
pub const COMPLEMENTARY_ELEMENT_BONUS: i32 = 20;
pub const SAME_ELEMENT_BONUS: i32 = 15;
pub const OPPOSITE_PAIR_BONUS: i32 = 15;
pub const SEXTILE_PAIR_BONUS: i32 = 12;
pub const RANDOM_SPREAD: i32 = 5;
pub const MIN_SCORE: i32 = 45;
pub const MAX_SCORE: i32 = 98;

const OPPOSITE_PAIRS: [(ZodiacSign, ZodiacSign); 6] = [
    (ZodiacSign::Aries, ZodiacSign::Libra),
    (ZodiacSign::Taurus, ZodiacSign::Scorpio),
    (ZodiacSign::Gemini, ZodiacSign::Sagittarius),
    (ZodiacSign::Cancer, ZodiacSign::Capricorn),
    (ZodiacSign::Leo, ZodiacSign::Aquarius),
    (ZodiacSign::Virgo, ZodiacSign::Pisces),
];

const SEXTILE_PAIRS: [(ZodiacSign, ZodiacSign); 8] = [
    (ZodiacSign::Aries, ZodiacSign::Leo),
    (ZodiacSign::Taurus, ZodiacSign::Virgo),
    (ZodiacSign::Gemini, ZodiacSign::Libra),
    (ZodiacSign::Cancer, ZodiacSign::Scorpio),
    (ZodiacSign::Leo, ZodiacSign::Sagittarius),
    (ZodiacSign::Virgo, ZodiacSign::Capricorn),
    (ZodiacSign::Libra, ZodiacSign::Aquarius),
    (ZodiacSign::Scorpio, ZodiacSign::Pisces),
];

fn pair_listed(pairs: &[(ZodiacSign, ZodiacSign)], a: ZodiacSign, b: ZodiacSign) -> bool {
    pairs
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

/// 特定星座組合的加分，A-B 與 B-A 相同
pub fn pair_bonus(a: ZodiacSign, b: ZodiacSign) -> i32 {
    if pair_listed(&OPPOSITE_PAIRS, a, b) {
        OPPOSITE_PAIR_BONUS
    } else if pair_listed(&SEXTILE_PAIRS, a, b) {
        SEXTILE_PAIR_BONUS
    } else {
        0
    }
}

/// 互補元素 +20，否則同元素 +15。與同星座加分各自獨立。
pub fn element_bonus(a: Element, b: Element) -> i32 {
    if a.is_complementary(b) {
        COMPLEMENTARY_ELEMENT_BONUS
    } else if a == b {
        SAME_ELEMENT_BONUS
    } else {
        0
    }
}

/// 加入隨機擾動前的分數
pub fn base_score(a: ZodiacSign, b: ZodiacSign) -> i32 {
    let mut score = BASE_SCORE;
    if a == b {
        score += SAME_SIGN_BONUS;
    }
    score += element_bonus(a.element(), b.element());
    score += pair_bonus(a, b);
    score
}

pub fn clamp_score(raw: i32) -> i32 {
    raw.clamp(MIN_SCORE, MAX_SCORE)
}

fn perturbation<R: RandomSource>(rng: &mut R) -> i32 {
    rng.next_in_range(-RANDOM_SPREAD, RANDOM_SPREAD)
}

pub fn compatibility_score<R: RandomSource>(a: ZodiacSign, b: ZodiacSign, rng: &mut R) -> i32 {
    clamp_score(base_score(a, b) + perturbation(rng))
}

pub fn score<R: RandomSource>(a: ZodiacSign, b: ZodiacSign, rng: &mut R) -> CompatibilityResult {
    let pairing = ElementPairing::classify(Some(a.element()), Some(b.element()));

    CompatibilityResult {
        score: compatibility_score(a, b, rng),
        romantic_potential: narrative::romantic_potential(pairing),
        communication_style: narrative::communication_style(a, b),
        challenges: narrative::challenges(pairing),
        love_energy: narrative::love_energy(a.name(), b.name()).to_string(),
    }
}

/// 以名稱計算；任一名稱無法辨識時改用沒有元素的通用結果
pub fn score_names<R: RandomSource>(name_a: &str, name_b: &str, rng: &mut R) -> CompatibilityResult {
    match (name_a.parse::<ZodiacSign>(), name_b.parse::<ZodiacSign>()) {
        (Ok(a), Ok(b)) => score(a, b, rng),
        (a, b) => {
            let mut raw = BASE_SCORE;
            if name_a.trim() == name_b.trim() {
                raw += SAME_SIGN_BONUS;
            }
            let pairing = ElementPairing::classify(
                a.ok().map(ZodiacSign::element),
                b.ok().map(ZodiacSign::element),
            );

            CompatibilityResult {
                score: clamp_score(raw + perturbation(rng)),
                romantic_potential: narrative::romantic_potential(pairing),
                communication_style: narrative::GENERIC_COMMUNICATION_STYLE.to_string(),
                challenges: narrative::challenges(pairing),
                love_energy: narrative::love_energy(name_a.trim(), name_b.trim()).to_string(),
            }
        }
    }
}
