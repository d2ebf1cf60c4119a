//! Axis-side collaborators of a tick.
//!
//! A tick never translates values, tests extents or formats text on its own:
//! it asks the owning axis through [`AxisContext`]. [`CartesianAxis`] is the
//! stock implementation for rectangular plots.

mod cartesian;
mod options;

pub use cartesian::{AxisOrientation, AxisScale, CartesianAxis, CartesianAxisConfig, PlotCanvas};
pub use options::{
    AXIS_TICK_CONFIG_JSON_SCHEMA_V1, AxisTickConfig, AxisTickConfigJsonContractV1, GridOptions,
    LabelColorFn, LabelFormat, LabelFormatterFn, LabelOptions, TickOptions,
};

use serde::{Deserialize, Serialize};

use crate::core::{AxisValue, Coords, LinePoints};
use crate::render::{Attrs, AxisGroups, ElementId, FontStyle, RenderSurface, Rotation};

/// Business data range backing the axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BusinessRange {
    pub min: Option<AxisValue>,
    pub max: Option<AxisValue>,
    #[serde(default)]
    pub categories: Vec<AxisValue>,
    /// Placeholder range used while no real data is available; suppresses labels.
    #[serde(default)]
    pub stub_data: bool,
}

impl BusinessRange {
    #[must_use]
    pub fn stub() -> Self {
        Self {
            stub_data: true,
            ..Self::default()
        }
    }
}

/// Context handed to label and hint formatters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormatRange {
    pub min: Option<AxisValue>,
    pub max: Option<AxisValue>,
    /// Distance between neighbouring ticks in scalar domain units.
    pub tick_interval: Option<f64>,
}

impl FormatRange {
    #[must_use]
    pub fn with_tick_interval(mut self, tick_interval: f64) -> Self {
        self.tick_interval = Some(tick_interval);
        self
    }
}

/// Line geometry for a tick mark or grid line.
///
/// `points == None` means the line must not exist at all (for example a
/// grid line whose position falls outside the plot), as opposed to an
/// unchanged line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineSettings {
    pub points: Option<LinePoints>,
}

impl LineSettings {
    #[must_use]
    pub fn new(points: LinePoints) -> Self {
        Self {
            points: Some(points),
        }
    }

    #[must_use]
    pub fn none() -> Self {
        Self { points: None }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        self.points.is_none()
    }
}

/// Services a tick consumes from its owning axis.
pub trait AxisContext {
    /// Pixel position of `value`, shifted by `offset` where the axis supports it.
    fn translate(&self, value: &AxisValue, offset: Option<f64>) -> Coords;

    /// Offset applied to tick marks when the factory does not override it.
    fn tick_offset(&self) -> Option<f64> {
        None
    }

    fn are_coords_outside_axis(&self, coords: &Coords) -> bool;

    fn business_range(&self) -> &BusinessRange;

    fn format_label(
        &self,
        value: &AxisValue,
        options: &LabelOptions,
        range: &FormatRange,
    ) -> Option<String>;

    fn format_hint(
        &self,
        value: &AxisValue,
        options: &LabelOptions,
        range: &FormatRange,
    ) -> Option<String>;

    fn tick_mark_points(&self, coords: &Coords, length: f64) -> LineSettings;

    fn grid_points(&self, coords: &Coords) -> LineSettings;

    /// Rotates `element` around `coords` by the coords' angle.
    fn rotate_tick(&self, surface: &mut dyn RenderSurface, element: ElementId, coords: &Coords) {
        if let Some(angle) = coords.rotation_angle() {
            surface.set_attrs(
                element,
                &Attrs::new().with_rotation(Rotation::new(angle, coords.x, coords.y)),
            );
        }
    }

    fn groups(&self) -> &AxisGroups;

    fn label_options(&self) -> &LabelOptions;

    fn label_font_style(&self) -> FontStyle {
        self.label_options().font.clone()
    }

    /// Base attributes applied to every freshly created label.
    fn label_attrs(&self) -> Attrs {
        Attrs::new()
    }
}
