//! Read-only interpretive text keyed by sign, house, element and aspect.

use chrono::Weekday;

use crate::aspects::AspectKind;
use crate::{CelestialBody, Element, House, ZodiacSign};

use crate::ZodiacSign::*;

pub fn sun_reading(sign: ZodiacSign) -> &'static str {
    match sign {
        Aries => "Natural leadership, a pioneering streak, dynamic energy and initiative",
        Taurus => "Stability, determination, an appreciation of beauty and comfort",
        Gemini => "Versatile communication, intellectual curiosity, adaptability",
        Cancer => "Emotional sensitivity, intuition, care for family",
        Leo => "Creativity, generosity, a need for recognition",
        Virgo => "Perfectionism, careful analysis, service to others",
        Libra => "A search for harmony, diplomacy, a refined aesthetic sense",
        Scorpio => "Emotional intensity, transformation, personal magnetism",
        Sagittarius => "Optimism, a hunger for knowledge, love of freedom",
        Capricorn => "Ambition, responsibility, building solid structures",
        Aquarius => "Originality, humanitarianism, a futuristic outlook",
        Pisces => "Intuition, compassion, spiritual connection",
    }
}

pub fn moon_reading(sign: ZodiacSign) -> &'static str {
    match sign {
        Aries => "Quick emotional reactions, emotional independence",
        Taurus => "A need for material security, emotional steadiness",
        Gemini => "Emotional curiosity, frequent changes of mood",
        Cancer => "Powerful intuition, a need to protect the family",
        Leo => "Dramatic emotional expression, a need for admiration",
        Virgo => "Analysing feelings, a need for inner order",
        Libra => "A search for emotional balance and harmony in relationships",
        Scorpio => "Deep emotional intensity, constant transformation",
        Sagittarius => "Emotional optimism, a hunger for wider experience",
        Capricorn => "Emotional control, responsibility in matters of the heart",
        Aquarius => "Emotional detachment, a need for freedom",
        Pisces => "Extreme sensitivity, natural empathy",
    }
}

pub fn house_meaning(house: House) -> &'static str {
    match house {
        House::First => "Personality, physical appearance, first impressions",
        House::Second => "Personal values, material resources, self-esteem",
        House::Third => "Communication, siblings, the immediate surroundings",
        House::Fourth => "Home, family, roots, emotional foundation",
        House::Fifth => "Creativity, romance, children, self-expression",
        House::Sixth => "Work, health, routine, service",
        House::Seventh => "Relationships, partnerships, marriage",
        House::Eighth => "Transformation, intimacy, shared resources",
        House::Ninth => "Philosophy, higher learning, travel",
        House::Tenth => "Career, reputation, public achievement",
        House::Eleventh => "Friendships, groups, hopes and goals",
        House::Twelfth => "Spirituality, the subconscious, limitations",
    }
}

pub fn compatible_signs(sign: ZodiacSign) -> [ZodiacSign; 4] {
    match sign {
        Aries => [Leo, Sagittarius, Gemini, Aquarius],
        Taurus => [Virgo, Capricorn, Cancer, Pisces],
        Gemini => [Libra, Aquarius, Aries, Leo],
        Cancer => [Scorpio, Pisces, Taurus, Virgo],
        Leo => [Aries, Sagittarius, Gemini, Libra],
        Virgo => [Taurus, Capricorn, Cancer, Scorpio],
        Libra => [Gemini, Aquarius, Leo, Sagittarius],
        Scorpio => [Cancer, Pisces, Virgo, Capricorn],
        Sagittarius => [Aries, Leo, Libra, Aquarius],
        Capricorn => [Taurus, Virgo, Scorpio, Pisces],
        Aquarius => [Gemini, Libra, Aries, Sagittarius],
        Pisces => [Cancer, Scorpio, Taurus, Capricorn],
    }
}

pub fn colors(sign: ZodiacSign) -> [&'static str; 2] {
    match sign {
        Aries => ["Red", "Orange"],
        Taurus => ["Green", "Pink"],
        Gemini => ["Yellow", "Light blue"],
        Cancer => ["White", "Silver"],
        Leo => ["Gold", "Orange"],
        Virgo => ["Navy blue", "Grey"],
        Libra => ["Pink", "Pastel blue"],
        Scorpio => ["Dark red", "Black"],
        Sagittarius => ["Purple", "Turquoise"],
        Capricorn => ["Brown", "Black"],
        Aquarius => ["Electric blue", "Silver"],
        Pisces => ["Sea green", "Lilac"],
    }
}

pub fn stones(sign: ZodiacSign) -> [&'static str; 2] {
    match sign {
        Aries => ["Ruby", "Red jasper"],
        Taurus => ["Emerald", "Rose quartz"],
        Gemini => ["Agate", "Citrine"],
        Cancer => ["Moonstone", "Pearl"],
        Leo => ["Diamond", "Topaz"],
        Virgo => ["Sapphire", "Carnelian"],
        Libra => ["Opal", "Rose quartz"],
        Scorpio => ["Topaz", "Obsidian"],
        Sagittarius => ["Turquoise", "Lapis lazuli"],
        Capricorn => ["Garnet", "Onyx"],
        Aquarius => ["Amethyst", "Blue quartz"],
        Pisces => ["Aquamarine", "Amethyst"],
    }
}

pub fn daily_forecast(sign: ZodiacSign) -> &'static str {
    match sign {
        Aries => "A good day to start new projects. Your energy runs high.",
        Taurus => "An ideal moment to focus on finances and look after your wellbeing.",
        Gemini => "Communication takes the spotlight. A good day for networking.",
        Cancer => "A day to care for family and home. Your intuition is sharp.",
        Leo => "Your creativity runs high. Time to express yourself.",
        Virgo => "Focus on organisation and detail. Productivity rises.",
        Libra => "Relationships take the spotlight. Look for balance.",
        Scorpio => "A day of transformation. Trust your intuition.",
        Sagittarius => "Chances to learn. Stay optimistic.",
        Capricorn => "Focus on professional goals. Persistence will pay off.",
        Aquarius => "A day for innovation and social connection. Be original.",
        Pisces => "Sensitivity runs high. Trust your intuition.",
    }
}

pub fn suggested_names(sign: ZodiacSign) -> [&'static str; 3] {
    match sign {
        Aries => ["Aurora", "Mars", "Ember"],
        Taurus => ["Terra", "Venus", "Stella"],
        Gemini => ["Gemma", "Mercury", "Castor"],
        Cancer => ["Luna", "Marina", "Selene"],
        Leo => ["Sol", "Goldie", "Regina"],
        Virgo => ["Ceres", "Verity", "Astraea"],
        Libra => ["Justice", "Harmony", "Concord"],
        Scorpio => ["Pluto", "Mystery", "Phoenix"],
        Sagittarius => ["Archer", "Jupiter", "Journey"],
        Capricorn => ["Summit", "Saturn", "Constance"],
        Aquarius => ["Nova", "Uranus", "Iris"],
        Pisces => ["Ocean", "Neptune", "Coral"],
    }
}

pub fn profile(sign: ZodiacSign) -> &'static str {
    match sign {
        Aries => "You have a fiery, pioneering soul, always ready to launch new ventures with courage and determination.",
        Taurus => "Your essence is steady and determined, seeking security and pleasure in the simple things of life.",
        Gemini => "You are versatile and communicative, with a nimble mind forever chasing new information and connections.",
        Cancer => "Your soul is intuitive and protective, guided by feeling and deeply tied to family and home.",
        Leo => "You have a magnetic, creative personality, born to shine and to lead with generosity.",
        Virgo => "Your essence is practical and analytical, always refining and serving others with dedication.",
        Libra => "You are harmonious and diplomatic, always searching for balance and beauty in every situation.",
        Scorpio => "Your soul is intense and transformative, with an emotional depth that allows great renewal.",
        Sagittarius => "You are adventurous and philosophical, always looking for new horizons and higher knowledge.",
        Capricorn => "Your essence is ambitious and responsible, building success through discipline and perseverance.",
        Aquarius => "You are original and humanitarian, with a forward-looking vision and a wish to contribute to the world.",
        Pisces => "Your soul is sensitive and compassionate, connected to the spiritual world and to the feelings of others.",
    }
}

pub fn career(sign: ZodiacSign) -> &'static str {
    match sign {
        Aries => "Work that calls for leadership and initiative, such as entrepreneurship, sport or the armed forces.",
        Taurus => "Careers in the arts, cooking, architecture or any field that combines creation with stability.",
        Gemini => "Communication, journalism, teaching, sales or any profession that rewards versatility.",
        Cancer => "Childcare, psychology, nutrition, hospitality or other caring professions.",
        Leo => "Performing arts, entertainment, education or any stage where you can shine.",
        Virgo => "Health, data analysis, organisation, accounting or fields that demand precision.",
        Libra => "Law, diplomacy, art, design or any field built on balance and harmony.",
        Scorpio => "Psychology, investigation, medicine, the occult or fields of deep transformation.",
        Sagittarius => "Higher education, philosophy, travel, extreme sports or international work.",
        Capricorn => "Management, politics, construction or any field that needs structure.",
        Aquarius => "Technology, social science, humanitarian causes or innovation.",
        Pisces => "Visual arts, music, spirituality, therapy or work that draws on intuition.",
    }
}

pub fn love(sign: ZodiacSign) -> &'static str {
    match sign {
        Aries => "Passionate and direct in love. Look for partners who admire your energy and independence.",
        Taurus => "You seek stability and sensuality. Value lasting bonds and show affection through concrete gestures.",
        Gemini => "You need mental stimulation in a relationship. Conversation and variety are essential.",
        Cancer => "Protective and tender. Look for partners who value emotional intimacy and home life.",
        Leo => "Generous and dramatic in love. Look for partners who recognise your warmth and share special moments.",
        Virgo => "You show love through practical care. Value partners who appreciate your dedication and attention to detail.",
        Libra => "You seek harmony and beauty together. Look for partners who share your aesthetic and social values.",
        Scorpio => "Intense and deep in love. You need authentic, transformative bonds.",
        Sagittarius => "Adventurous in love. Look for partners who share your thirst for adventure and growth.",
        Capricorn => "Serious and committed. Value partners with similar goals and emotional maturity.",
        Aquarius => "Friendship matters in your relationships. Look for partners who respect your independence and ideals.",
        Pisces => "Romantic and intuitive. Look for partners who understand your sensitivity and inner world.",
    }
}

pub fn spirituality(sign: ZodiacSign) -> &'static str {
    match sign {
        Aries => "Your spirituality is dynamic. Try active meditation, martial arts or fire rituals.",
        Taurus => "Connect with nature. Gardening, long walks and practices that engage the senses feed your soul.",
        Gemini => "Explore different traditions. Reading, philosophical debate and varied practices enrich your path.",
        Cancer => "Your spirituality is intuitive. Lunar practices, water work and ancestral ties matter to you.",
        Leo => "Creative expression is your spiritual practice. Art, music and solar rituals lift your energy.",
        Virgo => "A practical spirituality of service. Volunteering, natural healing and ordered practice suit you.",
        Libra => "Seek spiritual balance. Harmonious practice, sacred art and group work nourish you.",
        Scorpio => "A transformative spirituality. Rebirth practices, shamanism and deep mysteries draw you in.",
        Sagittarius => "A spiritual explorer. Lofty philosophies, sacred journeys and teaching are your way.",
        Capricorn => "A structured spirituality. Old traditions, discipline and steady practice sustain you.",
        Aquarius => "A forward-looking spirituality. Innovative practice, group work and humanitarian ideals raise your awareness.",
        Pisces => "A fluid, compassionate spirituality. Meditation, devotional art and service to those in need are your path.",
    }
}

/// Tuesday and Sunday for fire signs, Friday and Saturday for the rest.
pub fn favorable_days(element: Element) -> [Weekday; 2] {
    match element {
        Element::Fire => [Weekday::Tue, Weekday::Sun],
        Element::Earth | Element::Air | Element::Water => [Weekday::Fri, Weekday::Sat],
    }
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Reading for a specific aspect between two bodies. Only the Sun/Moon
/// pair carries dedicated text.
pub fn aspect_reading(
    first: CelestialBody,
    second: CelestialBody,
    kind: AspectKind,
) -> &'static str {
    let luminaries = matches!(
        (first, second),
        (CelestialBody::Sun, CelestialBody::Moon) | (CelestialBody::Moon, CelestialBody::Sun)
    );
    match (luminaries, kind) {
        (true, AspectKind::Conjunction) => "Harmony between conscious will and emotion",
        (true, AspectKind::Trine) => "Ease in expressing feelings",
        (true, AspectKind::Square) => "Inner conflict between reason and emotion",
        _ => "An influence worth exploring",
    }
}
