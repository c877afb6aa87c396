mod health;
mod transcribe;

pub use health::health_handler;
pub use transcribe::{transcribe_handler, API_KEY_HEADER, LANG_HEADER};
