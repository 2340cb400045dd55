use crate::domain::zodiac::{Element, ZodiacSign};

pub const GENERIC_TRAITS: [&str; 3] = ["Mysterious", "Complex", "Unpredictable"];

pub fn traits(sign: ZodiacSign) -> &'static [&'static str] {
    match sign {
        ZodiacSign::Aries => &["Courageous", "Determined", "Passionate", "Confident", "Enthusiastic"],
        ZodiacSign::Taurus => &["Reliable", "Patient", "Practical", "Devoted", "Responsible"],
        ZodiacSign::Gemini => &["Gentle", "Affectionate", "Curious", "Adaptable", "Quick-witted"],
        ZodiacSign::Cancer => &["Tenacious", "Highly Imaginative", "Loyal", "Emotional", "Sympathetic"],
        ZodiacSign::Leo => &["Creative", "Passionate", "Generous", "Warm-hearted", "Cheerful"],
        ZodiacSign::Virgo => &["Loyal", "Analytical", "Kind", "Hardworking", "Practical"],
        ZodiacSign::Libra => &["Cooperative", "Diplomatic", "Gracious", "Fair-minded", "Social"],
        ZodiacSign::Scorpio => &["Resourceful", "Powerful", "Brave", "Passionate", "Stubborn"],
        ZodiacSign::Sagittarius => &[
            "Generous",
            "Idealistic",
            "Great sense of humor",
            "Enthusiastic",
            "Freedom-loving",
        ],
        ZodiacSign::Capricorn => &["Responsible", "Disciplined", "Self-control", "Good managers", "Ambitious"],
        ZodiacSign::Aquarius => &["Progressive", "Original", "Independent", "Humanitarian", "Intellectual"],
        ZodiacSign::Pisces => &["Compassionate", "Artistic", "Intuitive", "Gentle", "Wise"],
    }
}

/// 自由文字的星座名稱；無法辨識時回傳通用特質
pub fn traits_for_name(name: &str) -> &'static [&'static str] {
    match name.parse::<ZodiacSign>() {
        Ok(sign) => traits(sign),
        Err(_) => &GENERIC_TRAITS,
    }
}

pub fn communication_adjectives(sign: ZodiacSign) -> &'static str {
    match sign {
        ZodiacSign::Aries => "direct and passionate",
        ZodiacSign::Taurus => "deliberate and practical",
        ZodiacSign::Gemini => "quick and versatile",
        ZodiacSign::Cancer => "emotionally nuanced and indirect",
        ZodiacSign::Leo => "expressive and warm",
        ZodiacSign::Virgo => "precise and analytical",
        ZodiacSign::Libra => "diplomatic and balanced",
        ZodiacSign::Scorpio => "intense and strategic",
        ZodiacSign::Sagittarius => "enthusiastic and philosophical",
        ZodiacSign::Capricorn => "structured and purposeful",
        ZodiacSign::Aquarius => "innovative and detached",
        ZodiacSign::Pisces => "intuitive and compassionate",
    }
}

pub fn communication_style(a: ZodiacSign, b: ZodiacSign) -> String {
    format!(
        "{}'s {} communication style meets {}'s {} approach, creating a dynamic where you'll need to consciously adapt to each other's ways of expressing and receiving information. When you understand these different approaches as complementary rather than opposing, your conversations become more effective and satisfying. Listen for the intent behind each other's words rather than focusing only on communication style.",
        a,
        communication_adjectives(a),
        b,
        communication_adjectives(b)
    )
}

pub const GENERIC_COMMUNICATION_STYLE: &str = "Your communication styles draw on very different cosmic influences, creating a dynamic where you'll need to consciously adapt to each other's ways of expressing and receiving information. Listen for the intent behind each other's words rather than focusing only on how they are said.";

/// 兩個元素的組合分類，決定浪漫與挑戰文字
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ElementPairing {
    Same(Element),
    FireAir,
    EarthWater,
    FireEarth,
    WaterAir,
    FireWater,
    EarthAir,
    Other,
}

impl ElementPairing {
    pub fn classify(a: Option<Element>, b: Option<Element>) -> Self {
        use Element::*;
        match (a, b) {
            (Some(x), Some(y)) if x == y => ElementPairing::Same(x),
            (Some(Fire), Some(Air)) | (Some(Air), Some(Fire)) => ElementPairing::FireAir,
            (Some(Earth), Some(Water)) | (Some(Water), Some(Earth)) => ElementPairing::EarthWater,
            (Some(Fire), Some(Earth)) | (Some(Earth), Some(Fire)) => ElementPairing::FireEarth,
            (Some(Water), Some(Air)) | (Some(Air), Some(Water)) => ElementPairing::WaterAir,
            (Some(Fire), Some(Water)) | (Some(Water), Some(Fire)) => ElementPairing::FireWater,
            (Some(Earth), Some(Air)) | (Some(Air), Some(Earth)) => ElementPairing::EarthAir,
            _ => ElementPairing::Other,
        }
    }
}

pub fn romantic_potential(pairing: ElementPairing) -> String {
    let text = match pairing {
        ElementPairing::Same(element) => {
            return format!(
                "As two {} signs, your romantic connection has natural understanding and similar approaches to expressing love. You instinctively understand each other's emotional needs, though you may occasionally amplify each other's less balanced tendencies. Your shared element creates a foundation of compatibility that helps you weather relationship challenges.",
                element
            );
        }
        ElementPairing::FireAir => "The Fire and Air combination creates a relationship filled with inspiration, movement, and intellectual stimulation. You naturally fuel each other's passions and ideas, creating a dynamic and exciting partnership. Fire brings enthusiasm and direct action, while Air contributes mental clarity and communication skills. Together, you create a relationship that stays vibrant through continual growth and exploration.",
        ElementPairing::EarthWater => "The Earth and Water combination creates a nurturing, productive relationship grounded in emotional depth. Earth provides stability and practical support that helps Water feel secure in expressing their deep emotional nature. Water, in turn, helps Earth connect with their feelings and intuition, softening their practical approach to life. Together, you create a relationship that balances security with emotional intimacy.",
        ElementPairing::FireEarth => "The Fire and Earth combination creates an intriguing blend of action and stability. Fire brings passion, spontaneity and inspiration to the relationship, while Earth contributes practicality, reliability and sensual grounding. When balanced, you complement each other beautifully, with Fire inspiring Earth to take risks and Earth helping Fire manifest their visions. The challenge comes in respecting your different paces and approaches to life.",
        ElementPairing::WaterAir => "The Water and Air combination creates a relationship that blends emotion with intellect. Water brings emotional depth, intuition and nurturing qualities, while Air contributes intellectual clarity, communication skills and fresh perspectives. The challenge lies in translating between your different languages: emotional for Water, mental for Air. When you bridge this gap, you create a partnership that satisfies both heart and mind.",
        ElementPairing::FireWater => "The Fire and Water combination creates a relationship of intense passion and emotional depth. Your elements are fundamentally different, as Fire expresses energy outward while Water draws energy inward, creating both attraction and challenge. Fire brings enthusiasm, courage and inspiration to the relationship, while Water contributes emotional awareness, intuition and nurturing. Learning to balance these opposing tendencies creates a relationship that's both exciting and emotionally fulfilling.",
        ElementPairing::EarthAir => "The Earth and Air combination creates a relationship that balances practicality with innovation. Earth brings stability, sensuality and practical wisdom, while Air contributes intellectual excitement, social connections and fresh perspectives. The challenge lies in valuing each other's fundamentally different approaches: Earth's material focus and Air's conceptual orientation. When you appreciate these differences as complementary rather than opposing, you create a partnership that's both stable and intellectually stimulating.",
        ElementPairing::Other => "Your romantic connection draws on the unique qualities of both your signs, creating a blend of energies that can be both complementary and challenging. The cosmic forces bring you together to learn from your differences while celebrating your shared values. Through conscious communication and appreciation of each other's unique gifts, you can create a relationship that supports both individual growth and deep connection.",
    };
    text.to_string()
}

pub fn challenges(pairing: ElementPairing) -> String {
    let text = match pairing {
        ElementPairing::Same(element) => {
            return format!(
                "As two {} signs, you share similar approaches to life, which creates natural understanding but can also amplify each other's blindspots. Your challenge is to appreciate your similarities while developing complementary strengths to balance your shared tendencies. Recognize when your similar approaches create limitations and consciously expand beyond your comfort zones together.",
                element
            );
        }
        ElementPairing::FireWater => "Fire and Water create a challenging elemental combination, as Fire's direct, action-oriented approach can feel overwhelming to Water's sensitive, receptive nature. Conversely, Water's emotional depth and indirect communication can frustrate Fire's desire for clarity and forward movement. Your challenge is learning to temper and translate between these fundamentally different approaches to processing experience.",
        ElementPairing::EarthAir => "Earth and Air create a challenging elemental combination, as Earth's practical, material focus can feel limiting to Air's conceptual, variety-seeking nature. Conversely, Air's abstract thinking and changeable attention can seem unreliable to Earth's need for stability and tangible results. Your challenge is learning to value these different perspectives as complementary rather than opposing approaches to life.",
        ElementPairing::FireEarth => "Fire and Earth create a relationship with different paces and priorities. Fire's spontaneous, fast-moving energy can feel destabilizing to Earth's methodical, security-focused approach. Conversely, Earth's caution and practical concerns can dampen Fire's enthusiasm and inspiration. Your challenge is learning to respect these different rhythms while finding a shared pace that honors both approaches.",
        ElementPairing::WaterAir => "Water and Air create a relationship with different languages and processing styles. Water's emotional, intuitive approach can feel overwhelming to Air's rational, detached perspective. Conversely, Air's intellectual analysis can seem cold or disconnected to Water's feeling-centered experience. Your challenge is developing translation skills that bridge these fundamentally different ways of understanding life.",
        ElementPairing::FireAir => "While Fire and Air generally complement each other well, challenges arise around grounding your shared enthusiasm and ideas. You may inspire each other to start many projects without developing the follow-through to complete them. Fire may occasionally overwhelm Air with intensity, while Air might intellectualize experiences Fire wants to engage with more directly. Finding balance between inspiration and practicality strengthens your connection.",
        ElementPairing::EarthWater => "While Earth and Water generally complement each other well, challenges arise around balancing practicality with emotional needs. Earth may sometimes seem insensitive to Water's emotional fluctuations, while Water might appear unnecessarily complicated to Earth's straightforward approach. Earth can become too focused on material concerns while Water may drift into emotional realms disconnected from practical realities. Finding balance strengthens your connection.",
        ElementPairing::Other => "Every relationship faces challenges that offer opportunities for growth. Your different perspectives and approaches to life will occasionally create friction, but these differences also provide balance and completeness when understood as complementary rather than opposing. The key is developing respect for each other's unique gifts and learning to communicate across your different styles and priorities.",
    };
    text.to_string()
}

pub const LOVE_ENERGY: [&str; 5] = [
    "Your connection vibrates with a magnetic intensity that draws you together even during challenging times. The cosmic energy between you creates both harmony and dynamic tension, a combination that keeps your relationship evolving through various seasons and cycles. There's a sense of familiarity between you, as if your souls recognized each other from a previous time.",
    "The energy between you flows like a gentle river, creating a sense of peaceful connection that deepens over time. Your bond has a natural rhythm that allows both closeness and independence, creating space for individual growth within the relationship. There's a feeling of coming home when you're together, a comfortable recognition that soothes both your spirits.",
    "Sparks fly when you're together, creating an exciting and unpredictable energy that keeps your connection fresh and engaging. The astrological currents between your signs generate a continuous flow of creative tension that can be channeled into passion, inspiration, and growth. Your relationship has a living quality that requires attention but rewards you with continuous discovery.",
    "Your connection resonates with a harmonious frequency that supports both individual expression and shared experience. The cosmic energy between you creates a sense of balance, where strengths and challenges complement each other in a natural dance. There's a feeling of rightness in your partnership, as if the stars themselves conspired to bring your unique energies together.",
    "The bond between you has a transformative quality, challenging each of you to grow beyond comfortable patterns into more authentic expressions of yourselves. This sometimes creates intensity as old structures fall away, making space for new ways of relating. The cosmic blueprint of your connection contains potential for profound healing and evolution when you embrace its transformative nature.",
];

/// floor(((len_a + len_b) % 10) / 10 * 5)，用整數算避免浮點誤差
pub fn love_energy_index(name_a: &str, name_b: &str) -> usize {
    let seed = name_a.chars().count() + name_b.chars().count();
    (seed % 10) * LOVE_ENERGY.len() / 10
}

pub fn love_energy(name_a: &str, name_b: &str) -> &'static str {
    LOVE_ENERGY[love_energy_index(name_a, name_b)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_sign_has_five_traits() {
        for sign in ZodiacSign::ALL {
            assert_eq!(traits(sign).len(), 5, "{}", sign);
        }
    }

    #[test]
    fn test_unknown_name_gets_generic_traits() {
        assert_eq!(traits_for_name("Ophiuchus"), &GENERIC_TRAITS);
        assert_eq!(traits_for_name("leo")[0], "Creative");
    }

    #[test]
    fn test_love_energy_index() {
        // "Leo" + "Leo": seed 6 → 0.6 → index 3
        assert_eq!(love_energy_index("Leo", "Leo"), 3);
        // "Sagittarius" + "Capricorn": 11 + 9 = 20 → 0.0 → index 0
        assert_eq!(love_energy_index("Sagittarius", "Capricorn"), 0);
        // "Aries" + "Pisces": 11 → 0.1 → floor(0.5) = 0
        assert_eq!(love_energy_index("Aries", "Pisces"), 0);
        // "Gemini" + "Cancer": 12 → 0.2 → index 1
        assert_eq!(love_energy_index("Gemini", "Cancer"), 1);
        // "Aquarius" + "Aries": 13 → 0.3 → floor(1.5) = 1
        assert_eq!(love_energy_index("Aquarius", "Aries"), 1);
        // "Leo" + "Scorpio": 10 → index 0
        assert_eq!(love_energy_index("Leo", "Scorpio"), 0);
        // "Leo" + "Taurus": 9 → 0.9 → floor(4.5) = 4
        assert_eq!(love_energy_index("Leo", "Taurus"), 4);
    }

    #[test]
    fn test_love_energy_is_deterministic() {
        assert_eq!(love_energy("Leo", "Leo"), love_energy("Leo", "Leo"));
        assert_eq!(love_energy("Leo", "Leo"), LOVE_ENERGY[3]);
    }

    #[test]
    fn test_classify_covers_all_known_pairs() {
        for a in ZodiacSign::ALL {
            for b in ZodiacSign::ALL {
                let pairing = ElementPairing::classify(Some(a.element()), Some(b.element()));
                assert_ne!(pairing, ElementPairing::Other, "{} / {}", a, b);
            }
        }
        assert_eq!(
            ElementPairing::classify(None, Some(Element::Fire)),
            ElementPairing::Other
        );
    }

    #[test]
    fn test_same_element_text_names_the_element() {
        let text = romantic_potential(ElementPairing::Same(Element::Water));
        assert!(text.starts_with("As two Water signs"));
        let text = challenges(ElementPairing::Same(Element::Earth));
        assert!(text.starts_with("As two Earth signs"));
    }

    #[test]
    fn test_communication_style_names_both_signs() {
        let text = communication_style(ZodiacSign::Aries, ZodiacSign::Pisces);
        assert!(text.starts_with("Aries's direct and passionate communication style meets Pisces's intuitive and compassionate approach"));
    }
}
