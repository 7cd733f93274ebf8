//! Commodity catalog with localized display names
//!
//! The engine accepts any commodity string; this table only improves how
//! known commodities are displayed. Grains trade per quintal, everything
//! else per kg.

use crate::locale::Language;
use serde::{Deserialize, Serialize};

/// Broad commodity grouping, determines the trading unit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Vegetables,
    Grains,
}

impl Category {
    pub fn unit(&self) -> &'static str {
        match self {
            Category::Vegetables => "kg",
            Category::Grains => "quintal",
        }
    }
}

/// A commodity known to the catalog
#[derive(Clone, Copy, Debug)]
pub struct Commodity {
    pub id: &'static str,
    pub icon: &'static str,
    pub category: Category,
    names: [&'static str; 5],
}

impl Commodity {
    /// Display name in the given language (name order matches Language::ALL)
    pub fn name(&self, lang: Language) -> &'static str {
        match lang {
            Language::Hindi => self.names[0],
            Language::English => self.names[1],
            Language::Tamil => self.names[2],
            Language::Telugu => self.names[3],
            Language::Kannada => self.names[4],
        }
    }

    pub fn unit(&self) -> &'static str {
        self.category.unit()
    }
}

pub const COMMODITIES: [Commodity; 8] = [
    Commodity {
        id: "tomato",
        icon: "🍅",
        category: Category::Vegetables,
        names: ["टमाटर", "Tomato", "தக்காளி", "టమాటో", "ಟೊಮೇಟೊ"],
    },
    Commodity {
        id: "onion",
        icon: "🧅",
        category: Category::Vegetables,
        names: ["प्याज", "Onion", "வெங்காயம்", "ఉల్లిపాయ", "ಈರುಳ್ಳಿ"],
    },
    Commodity {
        id: "potato",
        icon: "🥔",
        category: Category::Vegetables,
        names: ["आलू", "Potato", "உருளைக்கிழங்கு", "బంగాళాదుంప", "ಆಲೂಗಡ್ಡೆ"],
    },
    Commodity {
        id: "wheat",
        icon: "🌾",
        category: Category::Grains,
        names: ["गेहूं", "Wheat", "கோதுமை", "గోధుమ", "ಗೋಧಿ"],
    },
    Commodity {
        id: "rice",
        icon: "🍚",
        category: Category::Grains,
        names: ["चावल", "Rice", "அரிசி", "బియ్యం", "ಅಕ್ಕಿ"],
    },
    Commodity {
        id: "carrot",
        icon: "🥕",
        category: Category::Vegetables,
        names: ["गाजर", "Carrot", "கேரட்", "క్యారెట్", "ಕ್ಯಾರೆಟ್"],
    },
    Commodity {
        id: "cabbage",
        icon: "🥬",
        category: Category::Vegetables,
        names: ["पत्ता गोभी", "Cabbage", "முட்டைகோஸ்", "కాబేజీ", "ಎಲೆಕೋಸು"],
    },
    Commodity {
        id: "cauliflower",
        icon: "🥦",
        category: Category::Vegetables,
        names: ["फूल गोभी", "Cauliflower", "காலிஃப்ளவர்", "కాలీఫ్లవర్", "ಹೂಕೋಸು"],
    },
];

/// Look up a commodity by id
pub fn find(id: &str) -> Option<&'static Commodity> {
    COMMODITIES.iter().find(|c| c.id == id)
}

/// Display name for any commodity string, localized when the id is known
pub fn display_name(id: &str, lang: Language) -> &str {
    match find(id) {
        Some(commodity) => commodity.name(lang),
        None => id,
    }
}
