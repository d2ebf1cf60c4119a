use std::fmt;

use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Domain value a tick represents.
///
/// Numbers are wrapped in [`OrderedFloat`] so values are `Eq + Hash` and can
/// key tick maps and skip comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisValue {
    Number(OrderedFloat<f64>),
    DateTime(DateTime<Utc>),
    Category(String),
}

impl AxisValue {
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number(OrderedFloat(value))
    }

    #[must_use]
    pub fn category(value: impl Into<String>) -> Self {
        Self::Category(value.into())
    }

    /// Continuous position of the value: the number itself, or Unix seconds
    /// for date-times. Categories have no continuous position.
    #[must_use]
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(value.into_inner()),
            Self::DateTime(time) => Some(time.timestamp_millis() as f64 / 1_000.0),
            Self::Category(_) => None,
        }
    }
}

impl From<f64> for AxisValue {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl From<DateTime<Utc>> for AxisValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl From<&str> for AxisValue {
    fn from(value: &str) -> Self {
        Self::category(value)
    }
}

impl From<String> for AxisValue {
    fn from(value: String) -> Self {
        Self::Category(value)
    }
}

impl fmt::Display for AxisValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", value.into_inner()),
            Self::DateTime(time) => write!(f, "{}", time.to_rfc3339()),
            Self::Category(name) => f.write_str(name),
        }
    }
}

/// Translated position of a tick element in pixel space.
///
/// `angle` is set by rotated/polar axes; a zero angle means no rotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub angle: Option<f64>,
}

impl Coords {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, angle: None }
    }

    #[must_use]
    pub const fn with_angle(mut self, angle: f64) -> Self {
        self.angle = Some(angle);
        self
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[must_use]
    pub fn rotation_angle(self) -> Option<f64> {
        self.angle.filter(|angle| angle.is_finite() && *angle != 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Polyline geometry of a tick mark or grid line.
pub type LinePoints = SmallVec<[Point; 4]>;

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn date_time_scalar_is_unix_seconds() {
        let time = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let value = AxisValue::from(time);
        assert_eq!(value.as_scalar(), Some(1_704_067_200.0));
        assert_eq!(AxisValue::category("a").as_scalar(), None);
    }

    #[test]
    fn zero_angle_is_not_a_rotation() {
        assert_eq!(Coords::new(1.0, 2.0).with_angle(0.0).rotation_angle(), None);
        assert_eq!(
            Coords::new(1.0, 2.0).with_angle(45.0).rotation_angle(),
            Some(45.0)
        );
        assert_eq!(Coords::new(1.0, 2.0).rotation_angle(), None);
    }

    #[test]
    fn number_values_compare_by_total_order() {
        assert_eq!(AxisValue::number(10.0), AxisValue::from(10.0));
        assert_ne!(AxisValue::number(10.0), AxisValue::category("10"));
        assert_eq!(AxisValue::number(2.5).to_string(), "2.5");
    }
}
