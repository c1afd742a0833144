pub mod converters;
pub mod logger;

pub use logger::JsLogger;
