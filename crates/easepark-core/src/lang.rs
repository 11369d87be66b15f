// crates/easepark-core/src/lang.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display language tag used by the EaseParkHK client.
///
/// `tc` is Traditional Chinese and `sc` Simplified Chinese, following the
/// suffixes used by the Transport Department feeds (`name_tc`, `name_sc`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Tc,
    Sc,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Tc, Language::Sc];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Tc => "tc",
            Language::Sc => "sc",
        }
    }

    /// Lenient parse used for route and storage values. Unknown tags fall
    /// back to English, which is what the client does on first launch.
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en_us" | "en-us" => Ok(Language::En),
            "tc" | "zh_tw" | "zh-tw" | "zh-hk" | "zh_hk" => Ok(Language::Tc),
            "sc" | "zh_cn" | "zh-cn" => Ok(Language::Sc),
            other => Err(format!("unsupported language tag: {other}")),
        }
    }
}

/// A label in the three display languages.
///
/// The static registry stores `Localized<&'static str>`; records built from
/// the feeds store `Localized<String>`. Lookups fall back to English when the
/// requested translation is empty, matching how the feeds leave gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<S = String> {
    pub en: S,
    pub tc: S,
    pub sc: S,
}

impl<S: AsRef<str>> Localized<S> {
    pub const fn new(en: S, tc: S, sc: S) -> Self {
        Self { en, tc, sc }
    }

    /// The label for `lang`, or the English label if that one is blank.
    pub fn get(&self, lang: Language) -> &str {
        let value = match lang {
            Language::En => self.en.as_ref(),
            Language::Tc => self.tc.as_ref(),
            Language::Sc => self.sc.as_ref(),
        };
        if value.trim().is_empty() {
            self.en.as_ref()
        } else {
            value
        }
    }

    /// All non-empty labels, English first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [self.en.as_ref(), self.tc.as_ref(), self.sc.as_ref()]
            .into_iter()
            .filter(|s| !s.trim().is_empty())
    }

    pub fn to_owned_strings(&self) -> Localized<String> {
        Localized {
            en: self.en.as_ref().to_owned(),
            tc: self.tc.as_ref().to_owned(),
            sc: self.sc.as_ref().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_client_tags() {
        assert_eq!("TC".parse::<Language>(), Ok(Language::Tc));
        assert_eq!("zh-CN".parse::<Language>(), Ok(Language::Sc));
        assert_eq!(Language::from_tag("fr"), Language::En);
    }

    #[test]
    fn blank_translation_falls_back_to_english() {
        let label = Localized::new("Wan Chai", "", "湾仔区");
        assert_eq!(label.get(Language::Tc), "Wan Chai");
        assert_eq!(label.get(Language::Sc), "湾仔区");
        assert_eq!(label.iter().count(), 2);
    }
}
