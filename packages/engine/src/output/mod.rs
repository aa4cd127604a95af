//! Rendering of filtered token streams
//!
//! - `sink`: the `TokenSink` trait and `replay`
//! - `text`: space-separated scalar text
//! - `json`: compact JSON text
//! - `value`: `serde_json::Value` construction

pub mod json;
pub mod sink;
pub mod text;
pub mod value;

pub use json::JsonTextSink;
pub use sink::{TokenSink, replay};
pub use text::TextCollector;
pub use value::ValueSink;
