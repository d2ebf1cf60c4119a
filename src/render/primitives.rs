use serde::{Deserialize, Serialize};

use crate::core::LinePoints;
use crate::error::{TickError, TickResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn with_alpha_scaled(self, factor: f64) -> Self {
        Self {
            alpha: (self.alpha * factor).clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn validate(self) -> TickResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(TickError::InvalidStyle(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Stroke appearance applied once when a tick mark or grid path is created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathStyle {
    pub stroke: Color,
    pub stroke_width: f64,
    pub stroke_opacity: f64,
    pub opacity: f64,
}

impl PathStyle {
    #[must_use]
    pub const fn new(stroke: Color, stroke_width: f64, stroke_opacity: f64) -> Self {
        Self {
            stroke,
            stroke_width,
            stroke_opacity,
            opacity: 1.0,
        }
    }

    pub fn validate(self) -> TickResult<()> {
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(TickError::InvalidStyle(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        for (name, value) in [
            ("stroke opacity", self.stroke_opacity),
            ("opacity", self.opacity),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(TickError::InvalidStyle(format!(
                    "{name} must be finite and in [0, 1]"
                )));
            }
        }
        self.stroke.validate()
    }
}

/// Font settings applied to label text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontStyle {
    pub family: String,
    pub size_px: f64,
    pub weight: u16,
    pub fill: Color,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_owned(),
            size_px: 12.0,
            weight: 400,
            fill: Color::rgb(0.46, 0.46, 0.46),
        }
    }
}

impl FontStyle {
    #[must_use]
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    pub fn validate(&self) -> TickResult<()> {
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(TickError::InvalidStyle(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// Horizontal text alignment relative to the label anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Rotation in degrees around a pivot point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub angle: f64,
    pub cx: f64,
    pub cy: f64,
}

impl Rotation {
    #[must_use]
    pub const fn new(angle: f64, cx: f64, cy: f64) -> Self {
        Self { angle, cx, cy }
    }

    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// Sparse attribute set applied to, or animated on, a surface element.
///
/// Unset fields leave the element's current value untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Attrs {
    pub points: Option<LinePoints>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub opacity: Option<f64>,
    pub text: Option<String>,
    pub rotation: Option<Rotation>,
    pub h_align: Option<TextHAlign>,
}

impl Attrs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_points(mut self, points: LinePoints) -> Self {
        self.points = Some(points);
        self
    }

    #[must_use]
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = Some(rotation);
        self
    }

    #[must_use]
    pub fn with_h_align(mut self, h_align: TextHAlign) -> Self {
        self.h_align = Some(h_align);
        self
    }

    /// Overrides every field that is set in `other`.
    pub fn merge(&mut self, other: &Attrs) {
        if let Some(points) = &other.points {
            self.points = Some(points.clone());
        }
        if other.x.is_some() {
            self.x = other.x;
        }
        if other.y.is_some() {
            self.y = other.y;
        }
        if other.opacity.is_some() {
            self.opacity = other.opacity;
        }
        if let Some(text) = &other.text {
            self.text = Some(text.clone());
        }
        if other.rotation.is_some() {
            self.rotation = other.rotation;
        }
        if other.h_align.is_some() {
            self.h_align = other.h_align;
        }
    }
}

/// Resolved line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> TickResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(TickError::InvalidStyle(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(TickError::InvalidStyle(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Resolved label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> TickResult<()> {
        if self.text.is_empty() {
            return Err(TickError::InvalidStyle(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(TickError::InvalidStyle(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(TickError::InvalidStyle(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
