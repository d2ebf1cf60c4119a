#![allow(dead_code)]

use chart_tick::axis::{
    AxisContext, BusinessRange, FormatRange, GridOptions, LabelOptions, LineSettings, TickOptions,
};
use chart_tick::core::{AxisValue, Coords, Point};
use chart_tick::render::{AxisGroups, RecordingSurface, SurfaceCall};
use chart_tick::tick::{TickFactory, TickFactoryOptions};
use smallvec::smallvec;

/// Axis double with fixed, easy-to-read geometry:
/// mark coords are `(value * 10, 50)`, label coords `(value * 10, 60)`,
/// the visible extent is `x in [0, 1000]` and grid lines span `y in [0, 400]`.
pub struct FakeAxis {
    pub groups: AxisGroups,
    pub range: BusinessRange,
    pub label: LabelOptions,
    /// Overrides the formatted label text when set.
    pub label_text: Option<Option<String>>,
    pub hint: Option<String>,
    pub angle: Option<f64>,
    pub tick_offset: Option<f64>,
}

impl FakeAxis {
    pub fn new(surface: &mut RecordingSurface) -> Self {
        Self {
            groups: AxisGroups::create(surface),
            range: BusinessRange::default(),
            label: LabelOptions::default(),
            label_text: None,
            hint: None,
            angle: None,
            tick_offset: Some(0.0),
        }
    }
}

impl AxisContext for FakeAxis {
    fn translate(&self, value: &AxisValue, offset: Option<f64>) -> Coords {
        let x = value.as_scalar().unwrap_or(f64::NAN) * 10.0;
        let y = if offset.is_some() { 50.0 } else { 60.0 };
        Coords {
            x,
            y,
            angle: self.angle,
        }
    }

    fn tick_offset(&self) -> Option<f64> {
        self.tick_offset
    }

    fn are_coords_outside_axis(&self, coords: &Coords) -> bool {
        !coords.x.is_finite() || coords.x < 0.0 || coords.x > 1000.0
    }

    fn business_range(&self) -> &BusinessRange {
        &self.range
    }

    fn format_label(
        &self,
        value: &AxisValue,
        _options: &LabelOptions,
        _range: &FormatRange,
    ) -> Option<String> {
        match &self.label_text {
            Some(text) => text.clone(),
            None => Some(value.to_string()),
        }
    }

    fn format_hint(
        &self,
        _value: &AxisValue,
        _options: &LabelOptions,
        _range: &FormatRange,
    ) -> Option<String> {
        self.hint.clone()
    }

    fn tick_mark_points(&self, coords: &Coords, length: f64) -> LineSettings {
        let half = length / 2.0;
        LineSettings::new(smallvec![
            Point::new(coords.x, coords.y - half),
            Point::new(coords.x, coords.y + half)
        ])
    }

    fn grid_points(&self, coords: &Coords) -> LineSettings {
        if self.are_coords_outside_axis(coords) {
            return LineSettings::none();
        }
        LineSettings::new(smallvec![
            Point::new(coords.x, 0.0),
            Point::new(coords.x, 400.0)
        ])
    }

    fn groups(&self) -> &AxisGroups {
        &self.groups
    }

    fn label_options(&self) -> &LabelOptions {
        &self.label
    }
}

pub fn visible_options() -> TickFactoryOptions {
    TickFactoryOptions {
        tick: TickOptions {
            visible: true,
            length: 8.0,
            ..TickOptions::default()
        },
        grid: GridOptions {
            visible: true,
            ..GridOptions::default()
        },
        ..TickFactoryOptions::default()
    }
}

pub fn factory(axis: &FakeAxis) -> TickFactory {
    TickFactory::new(axis, visible_options()).expect("factory")
}

pub fn count_calls(surface: &RecordingSurface, predicate: impl Fn(&SurfaceCall) -> bool) -> usize {
    surface.calls().iter().filter(|call| predicate(call)).count()
}

pub fn creates_of_paths(surface: &RecordingSurface) -> usize {
    count_calls(surface, |call| matches!(call, SurfaceCall::CreatePath { .. }))
}

pub fn creates_of_texts(surface: &RecordingSurface) -> usize {
    count_calls(surface, |call| matches!(call, SurfaceCall::CreateText { .. }))
}
