#![cfg_attr(not(feature = "std"), no_std)]

use serde::{Deserialize, Serialize};

/// Represents a 2D position in world coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate distance to another position
    pub fn distance_to(&self, other: &Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        libm::sqrtf(dx * dx + dy * dy)
    }
}

/// Targeting strategy tag as it appears in configuration files
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Chase the pointer/input-device position
    SeekPointer,
    /// Chase the center of mass of the flock
    SeekCentroid,
    /// Chase the nearest flock member
    SeekNearest,
}

/// Pursuit configuration, loadable from JSON with per-field defaults
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PursuitSettings {
    pub strategy: StrategyKind,
    pub desired_speed: f32,
    pub arrival_tolerance: f32,
}

impl Default for PursuitSettings {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::SeekPointer,
            desired_speed: 5.0,
            arrival_tolerance: 10.0,
        }
    }
}

/// Update message carrying the pointer position into the simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointerUpdate {
    /// Optional pointer position (None means no target/free flying)
    pub position: Option<Position>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_distance() {
        let p1 = Position::new(0.0, 0.0);
        let p2 = Position::new(3.0, 4.0);
        assert_eq!(p1.distance_to(&p2), 5.0);
    }

    #[test]
    fn test_settings_default() {
        let settings = PursuitSettings::default();
        assert_eq!(settings.strategy, StrategyKind::SeekPointer);
        assert_eq!(settings.desired_speed, 5.0);
        assert_eq!(settings.arrival_tolerance, 10.0);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_settings_partial_json_uses_defaults() {
        let settings: PursuitSettings =
            serde_json::from_str(r#"{"strategy": "seek-nearest"}"#).unwrap();
        assert_eq!(settings.strategy, StrategyKind::SeekNearest);
        assert_eq!(settings.desired_speed, 5.0);
        assert_eq!(settings.arrival_tolerance, 10.0);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_strategy_kind_wire_names() {
        let json = serde_json::to_string(&StrategyKind::SeekCentroid).unwrap();
        assert_eq!(json, r#""seek-centroid""#);

        let kind: StrategyKind = serde_json::from_str(r#""seek-pointer""#).unwrap();
        assert_eq!(kind, StrategyKind::SeekPointer);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_pointer_update_roundtrip() {
        let update = PointerUpdate {
            position: Some(Position::new(100.0, 150.0)),
        };
        let json = serde_json::to_string(&update).unwrap();
        let back: PointerUpdate = serde_json::from_str(&json).unwrap();
        assert_eq!(back.position, Some(Position::new(100.0, 150.0)));

        let cleared: PointerUpdate = serde_json::from_str(r#"{"position": null}"#).unwrap();
        assert_eq!(cleared.position, None);
    }
}
