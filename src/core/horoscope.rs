use crate::core::narrative;
use crate::core::sign_resolver;
use crate::domain::model::{BirthDate, HoroscopeReading};
use crate::domain::zodiac::ZodiacSign;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LuckyCycle {
    Upward,
    Consolidation,
    SeedPlanting,
}

impl LuckyCycle {
    /// (月 + 日) % 3
    pub fn for_date(date: &BirthDate) -> Self {
        match (date.month + date.day) % 3 {
            0 => LuckyCycle::Upward,
            1 => LuckyCycle::Consolidation,
            _ => LuckyCycle::SeedPlanting,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            LuckyCycle::Upward => "You're currently in an upward cycle for luck and opportunity. The next 3-4 months show particular promise for advancement in areas requiring confidence and visibility.",
            LuckyCycle::Consolidation => "You're in a consolidation phase of your luck cycle. The next 2-3 months favor strengthening foundations and completing existing projects rather than beginning new ventures.",
            LuckyCycle::SeedPlanting => "You're entering a seed-planting phase of your luck cycle. Efforts initiated now may not show immediate results but establish important foundations for future growth.",
        }
    }
}

pub fn generate(sign: ZodiacSign, date: &BirthDate) -> HoroscopeReading {
    HoroscopeReading {
        zodiac_sign: sign.to_string(),
        traits: narrative::traits(sign).iter().map(|t| t.to_string()).collect(),
        horoscope: life_path(sign).to_string(),
        forecast: general_forecast(sign).to_string(),
        career_forecast: career_forecast(sign).to_string(),
        love_forecast: love_forecast(sign).to_string(),
        family_forecast: family_forecast(sign).to_string(),
        finance_forecast: finance_forecast(sign).to_string(),
        lucky_cycle: LuckyCycle::for_date(date).description().to_string(),
    }
}

pub fn generate_for_date(date: &BirthDate) -> HoroscopeReading {
    generate(sign_resolver::resolve_date(date), date)
}

/// 以自由文字的星座名稱產生讀數，無法辨識時每一段都用通用文字
pub fn generate_for_name(name: &str, date: &BirthDate) -> HoroscopeReading {
    if let Ok(sign) = name.parse::<ZodiacSign>() {
        return generate(sign, date);
    }

    HoroscopeReading {
        zodiac_sign: name.trim().to_string(),
        traits: narrative::GENERIC_TRAITS.iter().map(|t| t.to_string()).collect(),
        horoscope: LIFE_PATH_FALLBACK.to_string(),
        forecast: GENERAL_FORECAST_FALLBACK.to_string(),
        career_forecast: CAREER_FORECAST_FALLBACK.to_string(),
        love_forecast: LOVE_FORECAST_FALLBACK.to_string(),
        family_forecast: FAMILY_FORECAST_FALLBACK.to_string(),
        finance_forecast: FINANCE_FORECAST_FALLBACK.to_string(),
        lucky_cycle: LuckyCycle::for_date(date).description().to_string(),
    }
}

/// 人生方向
pub fn life_path(sign: ZodiacSign) -> &'static str {
    match sign {
        ZodiacSign::Aries => "Your bold and courageous nature puts you at the forefront of new ventures. As a natural leader, you thrive when taking initiative. Your life path is defined by your courage in facing challenges head-on and your ability to inspire others with your enthusiasm.",
        ZodiacSign::Taurus => "Your grounded nature and appreciation for life's pleasures make you a stabilizing force. You value security and comfort, building your life on solid foundations. Your path is characterized by unwavering determination and the ability to create lasting beauty around you.",
        ZodiacSign::Gemini => "Your curious and adaptable mind gives you a versatile approach to life. Communication is your strength, allowing you to connect diverse ideas and people. Your journey involves continuous learning and sharing knowledge with others.",
        ZodiacSign::Cancer => "Your deep emotional intuition connects you to the feelings of others and your ancestral past. Family and home are central to your life path. Your journey involves creating emotional security for yourself and those you love.",
        ZodiacSign::Leo => "Your natural charisma and generous spirit draw others to your warmth. Creativity and self-expression are essential to your fulfillment. Your path involves discovering authentic ways to shine your light and inspire those around you.",
        ZodiacSign::Virgo => "Your analytical mind and attention to detail allow you to improve everything you touch. Service and practical problem-solving define your approach to life. Your journey involves finding ways to be of use while maintaining inner harmony.",
        ZodiacSign::Libra => "Your sense of balance and fairness guides your interactions. Relationships and harmony are central to your life's meaning. Your path involves creating beauty and justice in your world through diplomacy and cooperation.",
        ZodiacSign::Scorpio => "Your intensity and perceptiveness give you profound emotional and psychological insight. Transformation is a constant theme in your life. Your journey involves embracing change and uncovering deeper truths beneath the surface.",
        ZodiacSign::Sagittarius => "Your optimistic outlook and love of freedom propel you toward new horizons. Exploration and philosophical growth define your path. Your journey involves expanding your understanding of life through diverse experiences and beliefs.",
        ZodiacSign::Capricorn => "Your disciplined nature and ambition drive you toward achievement and mastery. Structure and responsibility give meaning to your life. Your path involves building lasting legacies through patient, persistent effort.",
        ZodiacSign::Aquarius => "Your innovative thinking and humanitarian values position you ahead of your time. Community and idealism are central to your purpose. Your journey involves bringing progressive change to benefit the collective.",
        ZodiacSign::Pisces => "Your compassionate nature and spiritual sensitivity connect you to realms beyond the ordinary. Imagination and empathy define your approach to life. Your path involves bridging worlds and bringing dreams into reality.",
    }
}

pub const LIFE_PATH_FALLBACK: &str = "Your cosmic energy is currently evolving in mysterious ways. The stars suggest a period of transformation and discovery ahead.";

pub fn general_forecast(sign: ZodiacSign) -> &'static str {
    match sign {
        ZodiacSign::Aries => "The coming days bring opportunities for bold new beginnings. Your energy is particularly high, making this an excellent time to start projects that require courage and initiative. Watch for moments of impatience; taking a breath before acting will lead to better outcomes.",
        ZodiacSign::Taurus => "Stability and comfort are highlighted in your immediate future. Financial matters may improve, especially if you've been building solid foundations. Your persistence in practical matters will be rewarded. Take time to enjoy sensory pleasures that ground you.",
        ZodiacSign::Gemini => "Your mental agility is especially sharp in the coming period. Communications flow easily, making this an excellent time for important conversations and learning new information. Social connections bring unexpected opportunities. Stay flexible as plans may change rapidly.",
        ZodiacSign::Cancer => "Emotional insights bring clarity to personal relationships. Home and family matters take center stage, possibly requiring your nurturing attention. Your intuition is heightened, offering guidance if you take time to listen. Self-care routines establish better emotional boundaries.",
        ZodiacSign::Leo => "Creative energy surrounds you in the days ahead. Your natural leadership abilities are recognized, bringing opportunities for recognition. Romantic possibilities brighten for both single and attached Leos. Express yourself authentically and watch how others respond positively.",
        ZodiacSign::Virgo => "Practical matters fall into place as your organizational skills are in high demand. Health routines established now have lasting benefits. Your attention to detail solves a problem others have missed. Allow yourself to receive help rather than trying to manage everything alone.",
        ZodiacSign::Libra => "Harmonious energy surrounds your relationships, making this an ideal time to resolve conflicts and strengthen bonds. Aesthetic choices made now bring lasting satisfaction. Legal matters trend in your favor. Finding balance between giving and receiving creates more sustainable connections.",
        ZodiacSign::Scorpio => "Transformative experiences deepen your understanding of long-held patterns. Financial matters may require your investigative skills to uncover hidden opportunities. Intimate relationships intensify, bringing both challenges and rewards. Trust your instincts about who deserves your confidence.",
        ZodiacSign::Sagittarius => "Expansive opportunities for travel, education, or spiritual growth appear on your horizon. Optimism attracts fortunate circumstances, especially in areas where you've been feeling restricted. Legal matters trend positively. Philosophical conversations open new ways of understanding your life path.",
        ZodiacSign::Capricorn => "Professional recognition for past efforts creates new opportunities for advancement. Financial planning now lays groundwork for future security. Family responsibilities may require restructuring your approach. Patience with slow-moving projects pays off with substantial results.",
        ZodiacSign::Aquarius => "Innovative ideas attract like-minded collaborators. Friendship networks expand, bringing people who appreciate your unique perspective. Technological solutions solve persistent problems. Humanitarian efforts you support make meaningful progress. Balance your visionary thinking with practical steps.",
        ZodiacSign::Pisces => "Intuitive insights guide you through complex emotional waters. Creative inspiration flows easily when you make space for solitude and reflection. Spiritual practices deepen your connection to inner wisdom. Compassionate actions toward others return to you in unexpected forms of support.",
    }
}

pub const GENERAL_FORECAST_FALLBACK: &str = "The cosmos aligns to bring unexpected developments in the days ahead. Stay open to new perspectives and be ready to adapt to changing circumstances.";

pub fn career_forecast(sign: ZodiacSign) -> &'static str {
    match sign {
        ZodiacSign::Aries => "Your career path accelerates as your leadership qualities catch the attention of decision-makers. Consider taking calculated risks that showcase your innovative thinking. A competitive situation turns in your favor when you focus on authentic strengths rather than comparing yourself to others.",
        ZodiacSign::Taurus => "Steady progress in professional matters brings financial stability. Your reliability earns trust from superiors, potentially leading to increased responsibility. A creative approach to practical problems displays your value to the organization. Patience with bureaucratic processes pays off.",
        ZodiacSign::Gemini => "Communication skills become your greatest professional asset. Opportunities involving writing, speaking, or negotiating bring favorable attention. Your adaptability helps navigate workplace changes that unsettle colleagues. Consider developing expertise in multiple complementary areas rather than a single specialization.",
        ZodiacSign::Cancer => "Nurturing leadership creates loyalty in your professional circle. Your intuitive understanding of others' needs strengthens team dynamics. Home-based business opportunities show particular promise. Creating emotional security in your work environment enhances productivity.",
        ZodiacSign::Leo => "Your natural charisma attracts career opportunities requiring public engagement. Creative leadership allows you to delegate effectively while maintaining quality. Recognition for past contributions opens doors to advancement. Teaching or mentoring roles highlight your talents.",
        ZodiacSign::Virgo => "Analytical skills solve problems that have stymied others, raising your professional profile. Attention to procedural improvements increases efficiency in your workplace. Health-related or service-oriented fields offer particular fulfillment. Organizing systems that enhance productivity impresses decision-makers.",
        ZodiacSign::Libra => "Diplomatic handling of workplace relationships creates harmony that benefits all. Aesthetic judgment enhances projects requiring design elements. Partnership opportunities offer balance between independence and collaboration. Fair negotiations produce agreements that honor everyone's needs.",
        ZodiacSign::Scorpio => "Strategic thinking uncovers opportunities hidden from less perceptive colleagues. Research abilities reveal valuable information that influences important decisions. Financial management skills improve resource allocation. Transformation of outdated systems demonstrates your value to the organization.",
        ZodiacSign::Sagittarius => "Expansive vision attracts projects with international connections. Educational opportunities enhance your expertise in meaningful ways. Publishing, teaching, or marketing your ideas brings professional recognition. Ethical leadership inspirers others to exceed expectations.",
        ZodiacSign::Capricorn => "Structured approach to long-term goals yields substantial results. Administrative abilities bring order to chaotic situations. Mentorship from experienced professionals accelerates your progress. Patience with hierarchical systems while demonstrating competence ensures steady advancement.",
        ZodiacSign::Aquarius => "Innovative solutions to organizational challenges showcase your unique perspective. Technological expertise becomes increasingly valuable to your team. Collaborative projects with like-minded colleagues create breakthrough results. Humanitarian elements incorporated into your work increase personal satisfaction.",
        ZodiacSign::Pisces => "Creative visualization helps manifest career opportunities aligned with deeper values. Intuitive understanding of market trends guides prescient decisions. Artistic or healing abilities differentiate your contributions. Compassionate leadership creates loyalty among colleagues and clients.",
    }
}

pub const CAREER_FORECAST_FALLBACK: &str = "Your professional path is entering a period of meaningful evolution. Pay attention to opportunities that align with your authentic strengths rather than conventional expectations.";

pub fn love_forecast(sign: ZodiacSign) -> &'static str {
    match sign {
        ZodiacSign::Aries => "Romantic passion ignites when you express your authentic desires. For attached Aries, initiating new shared activities revitalizes your connection. Single Aries attract attention through confident self-expression. Balancing independence with vulnerability creates relationships that honor your need for both freedom and connection.",
        ZodiacSign::Taurus => "Sensual connections deepen as you create beautiful experiences with loved ones. Relationship stability comes through patient nurturing. For unattached Taurus, potential partners appreciate your reliability and warm presence. Expressing needs directly rather than expecting others to intuit them strengthens bonds.",
        ZodiacSign::Gemini => "Intellectual rapport forms the foundation of your most satisfying relationships. Curiosity about your partner's changing thoughts keeps long-term connections fresh. Single Geminis attract interest through witty conversation and genuine questions. Communication patterns established now set important relationship precedents.",
        ZodiacSign::Cancer => "Emotional intimacy deepens when you share vulnerabilities with trusted others. Creating safe space for loved ones to express feelings strengthens bonds. Unattached Cancers attract nurturing partners by demonstrating both strength and sensitivity. Family approval becomes less important as you trust your own emotional wisdom.",
        ZodiacSign::Leo => "Romantic generosity and playfulness bring joy to your relationships. Expressing appreciation for your partner's unique qualities strengthens your connection. Single Leos attract admirers through authentic self-expression and warm-hearted engagement. Creative date ideas showcase your special approach to romance.",
        ZodiacSign::Virgo => "Practical acts of service communicate your love more clearly than grand gestures. Attention to your partner's preferences shows your deep care. Unattached Virgos attract grounded connections when focusing on mutual growth rather than perfection. Healing past relationship patterns creates space for healthier bonds.",
        ZodiacSign::Libra => "Harmonious relationships develop through balanced giving and receiving. Aesthetic experiences shared with partners create beautiful memories. For single Libras, clarity about relationship values attracts compatible connections. Addressing conflicts directly rather than avoiding discomfort creates stronger bonds.",
        ZodiacSign::Scorpio => "Intimate connections transform as you allow genuine vulnerability. Trust develops when you share deeper truths gradually. Unattached Scorpios attract intensity when they reveal themselves authentically rather than testing others. Releasing control creates space for truly equal partnerships.",
        ZodiacSign::Sagittarius => "Relationships thrive when incorporating adventure and philosophical exploration. Sharing your broader vision with partners expands your connection. Single Sagittarians attract kindred spirits through enthusiasm and optimism. Balancing freedom with commitment creates relationships that enhance rather than restrict.",
        ZodiacSign::Capricorn => "Relationship foundations strengthen through consistent, reliable presence. Long-term planning with partners creates shared purpose. Unattached Capricorns attract stable connections when revealing their deeper sensitivity beneath practical exteriors. Family patterns transform through conscious relationship choices.",
        ZodiacSign::Aquarius => "Unconventional relationships honor your need for both connection and independence. Intellectual compatibility forms the basis of your strongest bonds. Single Aquarians attract intriguing partners through authentic expression of unique perspectives. Friendships that evolve into romance show particular promise.",
        ZodiacSign::Pisces => "Soul-level connections develop through shared creative or spiritual interests. Empathetic understanding creates safe space for emotional expression. Unattached Pisces attract loving partners when establishing healthy boundaries. Releasing idealized romantic fantasies opens space for authentic connections.",
    }
}

pub const LOVE_FORECAST_FALLBACK: &str = "Your heart opens to new possibilities as you align with your authentic relationship needs. Understanding patterns from past connections helps you create more fulfilling bonds in the present.";

pub fn family_forecast(sign: ZodiacSign) -> &'static str {
    match sign {
        ZodiacSign::Aries => "Family dynamics shift as you express needs more directly. Taking initiative in resolving old conflicts creates new understanding. For parents, encouraging children's independence while providing clear boundaries creates respect. Honoring ancestral strengths while releasing unhelpful patterns transforms your family legacy.",
        ZodiacSign::Taurus => "Creating beautiful, comfortable home environments strengthens family bonds. Establishing meaningful traditions gives children security and connection. Financial planning for family needs demonstrates your deep care. Patience with different communication styles improves cross-generational relationships.",
        ZodiacSign::Gemini => "Curious questions open new conversations with family members. Sharing knowledge and stories creates bridges across generations. For parents, explaining 'why' behind expectations helps children develop understanding. Flexibility with family plans reduces unnecessary stress and creates space for spontaneous connection.",
        ZodiacSign::Cancer => "Intuitive understanding of family members' emotional needs strengthens bonds. Creating safe space for authentic expression fosters trust. Family history research reveals meaningful patterns and connections. Establishing healthy emotional boundaries prevents caretaking from becoming overwhelming.",
        ZodiacSign::Leo => "Generous appreciation for each family member's unique gifts creates harmony. Organizing celebrations that honor important milestones strengthens family culture. For parents, encouraging children's self-expression builds confidence. Creative family activities establish warm memories that last generations.",
        ZodiacSign::Virgo => "Practical support shows your love for family members. Organizing household systems creates more space for quality time together. For parents, teaching useful skills builds children's confidence. Releasing perfectionism allows more authentic family connections and reduces unnecessary tension.",
        ZodiacSign::Libra => "Diplomatic approaches to family differences create harmonious solutions. Creating beautiful home environments enhances everyone's well-being. Establishing fair household responsibilities teaches children important values. Balancing couple time with family activities strengthens the foundation of the home.",
        ZodiacSign::Scorpio => "Deep emotional understanding helps transform family patterns. Trust builds as you share appropriate vulnerabilities with older children. Investigating family history reveals illuminating connections. Creating safe space for discussing difficult subjects prevents destructive secrets from forming.",
        ZodiacSign::Sagittarius => "Sharing your broader worldview expands family perspectives. Travel or educational experiences create meaningful family memories. For parents, encouraging children's curiosity develops their natural intelligence. Philosophical discussions about values establish important family foundations.",
        ZodiacSign::Capricorn => "Structured family traditions create security across generations. Working together on home improvements builds practical skills and connection. For parents, balancing discipline with warmth earns children's respect. Family responsibilities managed well create space for genuine relaxation together.",
        ZodiacSign::Aquarius => "Unconventional family structures or traditions honor your unique perspective. Technological connections keep extended family engaged across distances. For parents, encouraging children's individuality builds confidence. Creating family systems that respect everyone's independence reduces unnecessary conflict.",
        ZodiacSign::Pisces => "Intuitive understanding of unspoken family dynamics brings healing. Creative expression shared with family members deepens connections. For parents, spiritual or imaginative activities with children develop their inner resources. Establishing gentle boundaries prevents emotional overwhelm in family relationships.",
    }
}

pub const FAMILY_FORECAST_FALLBACK: &str = "Family connections enter a phase of meaningful evolution. Honoring the past while creating new traditions brings balance to your home life. Understanding generational patterns helps you make conscious choices about the legacy you're creating.";

pub fn finance_forecast(sign: ZodiacSign) -> &'static str {
    match sign {
        ZodiacSign::Aries => "Financial initiatives taken now show promising results. Entrepreneurial ventures highlight your natural leadership. Impulsive purchases decrease as you align spending with authentic values. Competitive financial situations turn in your favor when you focus on your unique strengths rather than others' achievements.",
        ZodiacSign::Taurus => "Steady financial planning establishes long-term security. Natural resource management skills improve investment outcomes. Balancing practical savings with quality-of-life expenditures creates sustainable prosperity. Patience with slow-growing investments yields substantial returns.",
        ZodiacSign::Gemini => "Diverse income streams match your varied interests and abilities. Communication skills create valuable professional opportunities. Gathering information before financial decisions prevents costly mistakes. Adaptability helps you navigate economic changes that challenge those with more rigid approaches.",
        ZodiacSign::Cancer => "Intuitive financial decisions often outperform purely analytical approaches. Home-related investments show particular promise. Creating emotional security through prudent financial management reduces stress. Family financial history influences your approach to money in ways worth examining.",
        ZodiacSign::Leo => "Generous financial energy creates abundance that flows back to you. Creative ventures show increasing income potential. Leadership roles open doors to improved financial opportunities. Balancing current enjoyment with future security creates sustainable prosperity.",
        ZodiacSign::Virgo => "Analytical approach to finances maximizes available resources. Attention to details others miss prevents unnecessary losses. Health investments pay dividends through reduced expenses later. Service-oriented income sources align with your natural abilities and values.",
        ZodiacSign::Libra => "Balanced approach to spending and saving creates financial harmony. Partnership opportunities improve your financial picture. Aesthetic judgment creates value in creative or design-oriented ventures. Fair negotiations ensure arrangements that benefit all parties.",
        ZodiacSign::Scorpio => "Strategic financial thinking uncovers opportunities others miss. Research abilities improve investment outcomes. Joint financial arrangements require clear agreements to prevent complications. Transforming your relationship with power and control around money increases prosperity.",
        ZodiacSign::Sagittarius => "Expansive financial vision attracts abundance from unexpected sources. International connections improve your financial picture. Educational investments yield valuable returns. Optimistic approach to money matters attracts positive circumstances while requiring practical grounding.",
        ZodiacSign::Capricorn => "Disciplined financial management creates impressive long-term results. Administrative abilities convert chaos to profitable order. Status purchases become less important as you define success on your own terms. Patience with wealth-building processes ensures substantial outcomes.",
        ZodiacSign::Aquarius => "Innovative financial approaches yield unconventional but effective results. Technological expertise creates valuable professional opportunities. Collaborative ventures pool resources for mutual benefit. Financial decisions aligned with humanitarian values create both prosperity and meaning.",
        ZodiacSign::Pisces => "Intuitive financial insights guide surprisingly effective decisions. Creative abilities translate into increasing prosperity when practically applied. Compassionate use of resources creates positive energetic returns. Establishing clear boundaries prevents financial drains through unbalanced relationships.",
    }
}

pub const FINANCE_FORECAST_FALLBACK: &str = "Your financial landscape enters a period of meaningful evolution. Aligning money management with authentic values creates prosperity with purpose. Patterns established now will influence your material well-being for cycles to come.";
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lucky_cycle_branches() {
        // 3 + 21 = 24
        assert_eq!(LuckyCycle::for_date(&BirthDate::new(3, 21)), LuckyCycle::Upward);
        // 1 + 1 = 2
        assert_eq!(LuckyCycle::for_date(&BirthDate::new(1, 1)), LuckyCycle::SeedPlanting);
        // 12 + 31 = 43
        assert_eq!(LuckyCycle::for_date(&BirthDate::new(12, 31)), LuckyCycle::Consolidation);
    }

    #[test]
    fn test_generate_for_date_resolves_sign() {
        let date: BirthDate = "1990-07-23".parse().unwrap();
        let reading = generate_for_date(&date);
        assert_eq!(reading.zodiac_sign, "Leo");
        assert_eq!(reading.traits.len(), 5);
        assert_eq!(reading.horoscope, life_path(ZodiacSign::Leo));
        assert_eq!(reading.finance_forecast, finance_forecast(ZodiacSign::Leo));
        // 7 + 23 = 30
        assert_eq!(reading.lucky_cycle, LuckyCycle::Upward.description());
    }

    #[test]
    fn test_every_sign_has_distinct_texts() {
        for sign in ZodiacSign::ALL {
            let reading = generate(sign, &BirthDate::new(1, 1));
            assert_ne!(reading.horoscope, LIFE_PATH_FALLBACK);
            assert_ne!(reading.forecast, reading.career_forecast);
            assert_ne!(reading.love_forecast, reading.family_forecast);
        }
    }

    #[test]
    fn test_unknown_name_uses_fallbacks() {
        let reading = generate_for_name("Ophiuchus", &BirthDate::new(1, 2));
        assert_eq!(reading.zodiac_sign, "Ophiuchus");
        assert_eq!(reading.traits, vec!["Mysterious", "Complex", "Unpredictable"]);
        assert_eq!(reading.horoscope, LIFE_PATH_FALLBACK);
        assert_eq!(reading.family_forecast, FAMILY_FORECAST_FALLBACK);
        assert_eq!(reading.lucky_cycle, LuckyCycle::Upward.description());
    }
}
