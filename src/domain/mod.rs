mod cache_key;
mod language;

pub use cache_key::CacheKey;
pub use language::LanguageHint;
