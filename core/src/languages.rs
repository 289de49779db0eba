//! Supported target languages
//!
//! Static catalog mapping upstream wire codes to display names and the BCP-47
//! tags the web UI uses to pick a speech-synthesis voice. The upstream accepts
//! exactly these codes; anything else is rejected before a request is built.

/// One supported target language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Upstream wire code, e.g. "DE" or "EN-GB"
    pub code: &'static str,
    /// Display name for the UI dropdown
    pub name: &'static str,
    /// BCP-47 tag used to match a browser speech-synthesis voice
    pub speech_tag: &'static str,
}

const CATALOG: &[Language] = &[
    Language { code: "BG", name: "Bulgarian", speech_tag: "bg-BG" },
    Language { code: "CS", name: "Czech", speech_tag: "cs-CZ" },
    Language { code: "DA", name: "Danish", speech_tag: "da-DK" },
    Language { code: "DE", name: "German", speech_tag: "de-DE" },
    Language { code: "EL", name: "Greek", speech_tag: "el-GR" },
    Language { code: "EN-GB", name: "English (British)", speech_tag: "en-GB" },
    Language { code: "EN-US", name: "English (American)", speech_tag: "en-US" },
    Language { code: "ES", name: "Spanish", speech_tag: "es-ES" },
    Language { code: "ET", name: "Estonian", speech_tag: "et-EE" },
    Language { code: "FI", name: "Finnish", speech_tag: "fi-FI" },
    Language { code: "FR", name: "French", speech_tag: "fr-FR" },
    Language { code: "HU", name: "Hungarian", speech_tag: "hu-HU" },
    Language { code: "ID", name: "Indonesian", speech_tag: "id-ID" },
    Language { code: "IT", name: "Italian", speech_tag: "it-IT" },
    Language { code: "JA", name: "Japanese", speech_tag: "ja-JP" },
    Language { code: "KO", name: "Korean", speech_tag: "ko-KR" },
    Language { code: "LT", name: "Lithuanian", speech_tag: "lt-LT" },
    Language { code: "LV", name: "Latvian", speech_tag: "lv-LV" },
    Language { code: "NB", name: "Norwegian (Bokmål)", speech_tag: "nb-NO" },
    Language { code: "NL", name: "Dutch", speech_tag: "nl-NL" },
    Language { code: "PL", name: "Polish", speech_tag: "pl-PL" },
    Language { code: "PT-BR", name: "Portuguese (Brazilian)", speech_tag: "pt-BR" },
    Language { code: "PT-PT", name: "Portuguese (European)", speech_tag: "pt-PT" },
    Language { code: "RO", name: "Romanian", speech_tag: "ro-RO" },
    Language { code: "RU", name: "Russian", speech_tag: "ru-RU" },
    Language { code: "SK", name: "Slovak", speech_tag: "sk-SK" },
    Language { code: "SL", name: "Slovenian", speech_tag: "sl-SI" },
    Language { code: "SV", name: "Swedish", speech_tag: "sv-SE" },
    Language { code: "TR", name: "Turkish", speech_tag: "tr-TR" },
    Language { code: "UK", name: "Ukrainian", speech_tag: "uk-UA" },
    Language { code: "ZH", name: "Chinese (simplified)", speech_tag: "zh-CN" },
];

/// All supported target languages, in catalog order
pub fn catalog() -> &'static [Language] {
    CATALOG
}

/// Look up a language by wire code, ignoring case and surrounding whitespace
pub fn lookup(code: &str) -> Option<&'static Language> {
    let code = code.trim();
    if code.is_empty() {
        return None;
    }
    CATALOG.iter().find(|l| l.code.eq_ignore_ascii_case(code))
}
