//! Language selection and canned negotiation text
//!
//! Every message family is an exhaustive match over [`Language`], so adding
//! a language is a compile-time checklist rather than a runtime lookup miss.
//! Hindi is the fallback for unrecognized codes.

use crate::error::MandiError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported interface languages (ISO 639-1 codes)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    Hindi,
    English,
    Tamil,
    Telugu,
    Kannada,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::Hindi,
        Language::English,
        Language::Tamil,
        Language::Telugu,
        Language::Kannada,
    ];

    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Hindi => "hi",
            Language::English => "en",
            Language::Tamil => "ta",
            Language::Telugu => "te",
            Language::Kannada => "kn",
        }
    }

    /// Name of the language in the language itself
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Hindi => "हिंदी",
            Language::English => "English",
            Language::Tamil => "தமிழ்",
            Language::Telugu => "తెలుగు",
            Language::Kannada => "ಕನ್ನಡ",
        }
    }

    /// Parse a language code, falling back to Hindi for anything unknown
    pub fn from_code(code: &str) -> Self {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .unwrap_or(Language::Hindi)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = MandiError;

    /// Strict parse for CLI arguments; `from_code` is the lenient variant
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == s)
            .ok_or_else(|| MandiError::UnknownLanguage(s.to_string()))
    }
}

/// Render a price in whole rupees
fn rupees(price: f64) -> i64 {
    price.round() as i64
}

/// Opening bid text: the buyer introduces itself 15% under market
pub fn opening_offer(lang: Language, commodity: &str, market_price: f64, ai_price: f64) -> String {
    let market = rupees(market_price);
    let offer = rupees(ai_price);
    match lang {
        Language::Hindi => format!(
            "नमस्ते! मुझे {commodity} चाहिए। मार्केट रेट ₹{market} है, लेकिन मैं ₹{offer} दे सकता हूं।"
        ),
        Language::English => format!(
            "Hello! I need {commodity}. Market rate is ₹{market}, but I can pay ₹{offer}."
        ),
        Language::Tamil => format!(
            "வணக்கம்! எனக்கு {commodity} வேண்டும். சந்தை விலை ₹{market}, ஆனால் நான் ₹{offer} கொடுக்க முடியும்."
        ),
        Language::Telugu => format!(
            "నమస్కారం! నాకు {commodity} కావాలి. మార్కెట్ రేట్ ₹{market}, కానీ నేను ₹{offer} ఇవ్వగలను."
        ),
        Language::Kannada => format!(
            "ನಮಸ್ಕಾರ! ನನಗೆ {commodity} ಬೇಕು. ಮಾರುಕಟ್ಟೆ ದರ ₹{market}, ಆದರೆ ನಾನು ₹{offer} ಕೊಡಬಹುದು."
        ),
    }
}

/// Deal accepted at the quoted price
pub fn acceptance(lang: Language, price: f64) -> String {
    let price = rupees(price);
    match lang {
        Language::Hindi => format!("ठीक है! ₹{price} में डील फाइनल। धन्यवाद!"),
        Language::English => format!("Alright! Deal finalized at ₹{price}. Thank you!"),
        Language::Tamil => format!("சரி! ₹{price} க்கு ஒப்பந்தம் முடிந்தது. நன்றி!"),
        Language::Telugu => format!("సరే! ₹{price} కు డీల్ ఫైనల్. ధన్యవాదాలు!"),
        Language::Kannada => format!("ಸರಿ! ₹{price} ಗೆ ಒಪ್ಪಂದ ಮುಗಿದಿದೆ. ಧನ್ಯವಾದಗಳು!"),
    }
}

/// Split-the-difference counter
pub fn counter_offer(lang: Language, price: f64) -> String {
    let price = rupees(price);
    match lang {
        Language::Hindi => format!("₹{price} कैसा रहेगा? यह अच्छा रेट है।"),
        Language::English => format!("How about ₹{price}? This is a good rate."),
        Language::Tamil => format!("₹{price} எப்படி? இது நல்ல விலை."),
        Language::Telugu => format!("₹{price} ఎలా ఉంటుంది? ఇది మంచి రేట్."),
        Language::Kannada => format!("₹{price} ಹೇಗೆ? ಇದು ಒಳ್ಳೆಯ ದರ."),
    }
}

/// Rebuke for an ask above the market ceiling
pub fn too_high(lang: Language, new_price: f64, market_price: f64) -> String {
    let price = rupees(new_price);
    let market = rupees(market_price);
    match lang {
        Language::Hindi => format!(
            "यह तो बहुत ज्यादा है! मार्केट रेट ₹{market} है। मैं ₹{price} से ज्यादा नहीं दे सकता।"
        ),
        Language::English => format!(
            "That's too much! Market rate is ₹{market}. I can't pay more than ₹{price}."
        ),
        Language::Tamil => format!(
            "அது அதிகம்! சந்தை விலை ₹{market}. நான் ₹{price} க்கு மேல் கொடுக்க முடியாது."
        ),
        Language::Telugu => format!(
            "అది చాలా ఎక్కువ! మార్కెట్ రేట్ ₹{market}. నేను ₹{price} కంటే ఎక్కువ ఇవ్వలేను."
        ),
        Language::Kannada => format!(
            "ಅದು ತುಂಬಾ ಹೆಚ್ಚು! ಮಾರುಕಟ್ಟೆ ದರ ₹{market}. ನಾನು ₹{price} ಕ್ಕಿಂತ ಹೆಚ್ಚು ಕೊಡಲಾರೆ."
        ),
    }
}

/// Canned remark for quality questions
pub fn quality_remark(lang: Language) -> &'static str {
    match lang {
        Language::Hindi => "गुणवत्ता बहुत अच्छी है। फ्रेश माल है।",
        Language::English => "Quality is very good. Fresh stock.",
        Language::Tamil => "தரம் மிகவும் நல்லது. புதிய பொருள்.",
        Language::Telugu => "నాణ్యత చాలా బాగుంది. తాజా స్టాక్.",
        Language::Kannada => "ಗುಣಮಟ್ಟ ತುಂಬಾ ಚೆನ್ನಾಗಿದೆ. ತಾಜಾ ಸ್ಟಾಕ್.",
    }
}

/// Generic prompt asking the seller to name a number
pub fn chat_prompt(lang: Language) -> &'static str {
    match lang {
        Language::Hindi => "हां, बताइए। क्या रेट लगेगा?",
        Language::English => "Yes, tell me. What rate will you give?",
        Language::Tamil => "ஆம், சொல்லுங்கள். என்ன விலை கொடுப்பீர்கள்?",
        Language::Telugu => "అవును, చెప్పండి. ఎంత రేట్ ఇస్తారు?",
        Language::Kannada => "ಹೌದು, ಹೇಳಿ. ಎಷ್ಟು ದರ ಕೊಡುತ್ತೀರಿ?",
    }
}

/// Quality keywords per language. The English word is accepted everywhere
/// since sellers mix it into every language.
fn quality_keywords(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::Hindi => &["quality", "गुणवत्ता", "क्वालिटी", "माल"],
        Language::English => &["quality", "fresh", "grade"],
        Language::Tamil => &["quality", "தரம்"],
        Language::Telugu => &["quality", "నాణ్యత"],
        Language::Kannada => &["quality", "ಗುಣಮಟ್ಟ"],
    }
}

/// Case-insensitive check whether free text is asking about quality
pub fn is_quality_query(lang: Language, text: &str) -> bool {
    let lowered = text.to_lowercase();
    quality_keywords(lang)
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

/// WhatsApp summary of a deal, ready to paste into a chat
pub fn whatsapp_summary(lang: Language, commodity: &str, final_price: f64, date: &str) -> String {
    let price = rupees(final_price);
    match lang {
        Language::Hindi => format!(
            "🛒 *मंडी डील*\n\n📦 वस्तु: {commodity}\n💰 फाइनल रेट: ₹{price}\n📅 दिनांक: {date}\n\n✅ डील कन्फर्म करने के लिए रिप्लाई करें।\n\n_मल्टीलिंगुअल मंडी ऐप से भेजा गया_"
        ),
        Language::English => format!(
            "🛒 *Mandi Deal*\n\n📦 Item: {commodity}\n💰 Final Rate: ₹{price}\n📅 Date: {date}\n\n✅ Reply to confirm the deal.\n\n_Sent from Multilingual Mandi App_"
        ),
        Language::Tamil => format!(
            "🛒 *மண்டி ஒப்பந்தம்*\n\n📦 பொருள்: {commodity}\n💰 இறுதி விலை: ₹{price}\n📅 தேதி: {date}\n\n✅ ஒப்பந்தத்தை உறுதிப்படுத்த பதிலளிக்கவும்.\n\n_பன்மொழி மண்டி ஆப்பிலிருந்து அனுப்பப்பட்டது_"
        ),
        Language::Telugu => format!(
            "🛒 *మండి ఒప్పందం*\n\n📦 వస్తువు: {commodity}\n💰 చివరి రేటు: ₹{price}\n📅 తేదీ: {date}\n\n✅ ఒప్పందాన్ని నిర్ధారించడానికి రిప్లై చేయండి.\n\n_మల్టీలింగ్వల్ మండి యాప్ నుండి పంపబడింది_"
        ),
        Language::Kannada => format!(
            "🛒 *ಮಂಡಿ ಒಪ್ಪಂದ*\n\n📦 ವಸ್ತು: {commodity}\n💰 ಅಂತಿಮ ದರ: ₹{price}\n📅 ದಿನಾಂಕ: {date}\n\n✅ ಒಪ್ಪಂದವನ್ನು ದೃಢೀಕರಿಸಲು ಉತ್ತರಿಸಿ.\n\n_ಬಹುಭಾಷಾ ಮಂಡಿ ಆ್ಯಪ್‌ನಿಂದ ಕಳುಹಿಸಲಾಗಿದೆ_"
        ),
    }
}
