//! Rectangle value object

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle described by its size
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width times height. Negative sizes are not rejected.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
