use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

use crate::bulb::ColorSink;

/// An RGB triple as received from the client. Channels are wide integers so
/// out-of-range values reach validation instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ColorRequest {
    #[validate(range(min = 0, max = 255, message = "red must be between 0 and 255"))]
    pub red: i64,
    #[validate(range(min = 0, max = 255, message = "green must be between 0 and 255"))]
    pub green: i64,
    #[validate(range(min = 0, max = 255, message = "blue must be between 0 and 255"))]
    pub blue: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ColorResponse {
    pub success: bool,
    pub message: String,
}

pub struct AppState {
    pub bulb: Arc<dyn ColorSink>,
}

impl AppState {
    pub fn new(bulb: Arc<dyn ColorSink>) -> Self {
        Self { bulb }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_channel_range() {
        for value in [0, 128, 255] {
            let request = ColorRequest {
                red: value,
                green: value,
                blue: value,
            };
            assert!(request.validate().is_ok(), "{} should be in range", value);
        }
    }

    #[test]
    fn rejects_channel_above_range() {
        let request = ColorRequest {
            red: 256,
            green: 0,
            blue: 0,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("red"));
    }

    #[test]
    fn rejects_negative_channel() {
        let request = ColorRequest {
            red: 0,
            green: -1,
            blue: 0,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("green"));
    }
}
