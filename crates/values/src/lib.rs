//! Katas Values
//!
//! Rectangle value object and JSON serialization helpers.

pub mod error;
pub mod json;
pub mod rectangle;

pub use error::{ValuesError, ValuesResult};
pub use json::{from_json, from_json_value, to_json};
pub use rectangle::Rectangle;
