//! Normalized page geometry.

use serde::{Deserialize, Serialize};

/// A bounding box on a PDF page, in page-fraction coordinates.
///
/// `page` is 1-indexed. The remaining fields are fractions of the page
/// dimensions, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// 1-indexed page number.
    #[serde(default = "default_page")]
    pub page: u32,

    /// Left edge as a fraction of page width.
    #[serde(default)]
    pub left: f64,

    /// Top edge as a fraction of page height.
    #[serde(default)]
    pub top: f64,

    /// Width as a fraction of page width.
    #[serde(default)]
    pub width: f64,

    /// Height as a fraction of page height.
    #[serde(default)]
    pub height: f64,
}

fn default_page() -> u32 {
    1
}

impl BoundingBox {
    /// Round all coordinates to 6 decimal digits.
    ///
    /// Citation output must be deterministic, so coordinates are emitted
    /// at a fixed precision.
    pub fn rounded(&self) -> Self {
        Self {
            page: self.page,
            left: round6(self.left),
            top: round6(self.top),
            width: round6(self.width),
            height: round6(self.height),
        }
    }
}

fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_truncates_to_six_digits() {
        let bbox = BoundingBox {
            page: 3,
            left: 0.123_456_789,
            top: 0.987_654_321,
            width: 0.5,
            height: 0.062_5,
        };
        let rounded = bbox.rounded();
        assert_eq!(rounded.page, 3);
        assert_eq!(rounded.left, 0.123_457);
        assert_eq!(rounded.top, 0.987_654);
        assert_eq!(rounded.width, 0.5);
        assert_eq!(rounded.height, 0.062_5);
    }

    #[test]
    fn test_serde_round_trip_within_tolerance() {
        let bbox = BoundingBox {
            page: 1,
            left: 0.070_312,
            top: 0.164_551,
            width: 0.414_062,
            height: 0.011_23,
        }
        .rounded();

        let json = serde_json::to_string(&bbox).unwrap();
        let parsed: BoundingBox = serde_json::from_str(&json).unwrap();

        assert!((parsed.left - bbox.left).abs() < 1e-6);
        assert!((parsed.top - bbox.top).abs() < 1e-6);
        assert!((parsed.width - bbox.width).abs() < 1e-6);
        assert!((parsed.height - bbox.height).abs() < 1e-6);
        assert_eq!(parsed.page, bbox.page);
    }

    #[test]
    fn test_missing_page_defaults_to_one() {
        let parsed: BoundingBox =
            serde_json::from_str(r#"{"left":0.1,"top":0.2,"width":0.3,"height":0.4}"#).unwrap();
        assert_eq!(parsed.page, 1);
    }
}
