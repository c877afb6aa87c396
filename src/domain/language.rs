use std::fmt;

/// Language codes whisper.cpp accepts as a `--language` argument.
const SUPPORTED: &[&str] = &[
    "en", "zh", "de", "es", "ru", "ko", "fr", "ja", "pt", "tr", "pl", "ca", "nl", "ar", "sv",
    "it", "id", "hi", "fi", "vi", "iw", "uk", "el", "ms", "cs", "ro", "da", "hu", "ta", "no",
    "th", "ur", "hr", "bg", "lt", "la", "mi", "ml", "cy", "sk", "te", "fa", "lv", "bn", "sr",
    "az", "sl", "kn", "et", "mk", "br", "eu", "is", "hy", "ne", "mn", "bs", "kk", "sq", "sw",
    "gl", "mr", "pa", "si", "km", "sn", "yo", "so", "af", "oc", "ka", "be", "tg", "sd", "gu",
    "am", "yi", "lo", "uz", "fo", "ht", "ps", "tk", "nn", "mt", "sa", "lb", "my", "bo", "tl",
    "mg", "as", "tt", "haw", "ln", "ha", "ba", "jw", "su",
];

/// A caller-supplied language hint, restricted to the codes the engine
/// understands. Anything outside that set is coerced to [`LanguageHint::AUTO`]
/// at the protocol edge, so the rest of the pipeline only ever sees a valid
/// code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguageHint(&'static str);

impl LanguageHint {
    /// Sentinel meaning "let the engine detect the language".
    pub const AUTO: LanguageHint = LanguageHint("auto");

    /// Exact match against the supported set; `None` for anything else,
    /// including `"auto"` spelled with different casing.
    pub fn parse(raw: &str) -> Option<Self> {
        SUPPORTED
            .iter()
            .copied()
            .find(|code| *code == raw)
            .map(LanguageHint)
    }

    pub fn code(&self) -> &'static str {
        self.0
    }

    pub fn is_auto(&self) -> bool {
        self.0 == "auto"
    }
}

impl fmt::Display for LanguageHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
