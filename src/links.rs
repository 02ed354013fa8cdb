use std::fmt;
use url::form_urlencoded;

use crate::installations::Coordinates;

pub const JUMP_BASE_URL: &str = "https://decentraland.org/jump/";

/// Rounds like JavaScript's `Math.round`: halves go toward positive infinity.
pub fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}

/// A parcel in the virtual world, as used by the jump-in deep link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JumpPosition {
    pub x: i64,
    pub y: i64,
}

impl JumpPosition {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn from_coordinates(coordinates: Coordinates) -> Self {
        Self {
            x: round_half_up(coordinates.lat),
            y: round_half_up(coordinates.lng),
        }
    }

    pub fn url(self) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("position", &format!("{},{}", self.x, self.y))
            .finish();
        format!("{JUMP_BASE_URL}?{query}")
    }
}

impl fmt::Display for JumpPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_matches_javascript_for_halves() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-55.4), -55);
        assert_eq!(round_half_up(-70.6), -71);
        assert_eq!(round_half_up(0.0), 0);
        assert_eq!(round_half_up(0.49999999999999994), 0);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(4_503_599_627_370_497.0), 4_503_599_627_370_497);
    }

    #[test]
    fn jump_url_percent_encodes_the_comma() {
        let position = JumpPosition::from_coordinates(Coordinates {
            lat: 10.0,
            lng: -20.0,
        });
        assert_eq!(
            position.url(),
            "https://decentraland.org/jump/?position=10%2C-20"
        );
    }

    #[test]
    fn festival_entrance_url_is_stable() {
        assert_eq!(
            JumpPosition::new(-62, -61).url(),
            "https://decentraland.org/jump/?position=-62%2C-61"
        );
    }

    #[test]
    fn fractional_coordinates_are_rounded_before_linking() {
        let position = JumpPosition::from_coordinates(Coordinates {
            lat: -48.5,
            lng: 9.49,
        });
        assert_eq!(position, JumpPosition::new(-48, 9));
        assert_eq!(position.to_string(), "(-48, 9)");
    }
}
