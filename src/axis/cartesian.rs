use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

use crate::core::{AxisValue, Coords, LinearScale, Point};
use crate::error::{TickError, TickResult};
use crate::render::{Attrs, AxisGroups, RenderSurface, TextHAlign};

use super::{AxisContext, BusinessRange, FormatRange, LabelFormat, LabelOptions, LineSettings};

const COORDS_EPSILON: f64 = 1e-6;
const MAX_AUTO_PRECISION: usize = 10;
const SECONDS_PER_DAY: f64 = 86_400.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrientation {
    Horizontal,
    Vertical,
}

/// Plot rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotCanvas {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotCanvas {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    pub fn validate(self) -> TickResult<()> {
        if !self.left.is_finite() || !self.top.is_finite() {
            return Err(TickError::InvalidAxis(
                "canvas origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || !self.height.is_finite() || self.width <= 0.0 || self.height <= 0.0
        {
            return Err(TickError::InvalidAxis(format!(
                "canvas size must be finite and > 0: width={}, height={}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartesianAxisConfig {
    pub orientation: AxisOrientation,
    pub canvas: PlotCanvas,
    /// Cross-axis coordinate of the axis line; defaults to the canvas bottom
    /// (horizontal) or left edge (vertical).
    #[serde(default)]
    pub position: Option<f64>,
    /// Default tick-mark offset, in band widths on discrete scales.
    #[serde(default)]
    pub tick_offset: Option<f64>,
}

impl CartesianAxisConfig {
    #[must_use]
    pub fn new(orientation: AxisOrientation, canvas: PlotCanvas) -> Self {
        Self {
            orientation,
            canvas,
            position: None,
            tick_offset: None,
        }
    }

    #[must_use]
    pub fn with_position(mut self, position: f64) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn with_tick_offset(mut self, tick_offset: f64) -> Self {
        self.tick_offset = Some(tick_offset);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AxisScale {
    /// Numbers, or date-times as Unix seconds.
    Continuous { start: f64, end: f64 },
    /// Evenly sized bands, one per category.
    Discrete { categories: Vec<AxisValue> },
}

/// Horizontal or vertical axis over a rectangular plot.
#[derive(Debug)]
pub struct CartesianAxis {
    config: CartesianAxisConfig,
    scale: AxisScale,
    linear: Option<LinearScale>,
    range: BusinessRange,
    groups: AxisGroups,
    label: LabelOptions,
}

impl CartesianAxis {
    /// Validates the axis and creates its render groups on `surface`.
    pub fn new(
        config: CartesianAxisConfig,
        scale: AxisScale,
        label: LabelOptions,
        surface: &mut dyn RenderSurface,
    ) -> TickResult<Self> {
        config.canvas.validate()?;
        label.validate()?;
        if let Some(position) = config.position {
            if !position.is_finite() {
                return Err(TickError::InvalidAxis(
                    "axis position must be finite".to_owned(),
                ));
            }
        }

        let (pixel_start, pixel_end) = Self::pixel_span(config);
        let (linear, range) = match &scale {
            AxisScale::Continuous { start, end } => {
                let linear = LinearScale::new(*start, *end)?.with_range(pixel_start, pixel_end)?;
                let range = BusinessRange {
                    min: Some(AxisValue::number(start.min(*end))),
                    max: Some(AxisValue::number(start.max(*end))),
                    ..BusinessRange::default()
                };
                (Some(linear), range)
            }
            AxisScale::Discrete { categories } => {
                if categories.is_empty() {
                    return Err(TickError::InvalidAxis(
                        "discrete scale needs at least one category".to_owned(),
                    ));
                }
                let range = BusinessRange {
                    categories: categories.clone(),
                    ..BusinessRange::default()
                };
                (None, range)
            }
        };

        Ok(Self {
            config,
            scale,
            linear,
            range,
            groups: AxisGroups::create(surface),
            label,
        })
    }

    #[must_use]
    pub fn config(&self) -> CartesianAxisConfig {
        self.config
    }

    #[must_use]
    pub fn scale(&self) -> &AxisScale {
        &self.scale
    }

    pub fn set_business_range(&mut self, range: BusinessRange) {
        self.range = range;
    }

    pub fn set_stub_data(&mut self, stub_data: bool) {
        self.range.stub_data = stub_data;
    }

    pub fn set_label_options(&mut self, label: LabelOptions) -> TickResult<()> {
        label.validate()?;
        self.label = label;
        Ok(())
    }

    fn pixel_span(config: CartesianAxisConfig) -> (f64, f64) {
        match config.orientation {
            AxisOrientation::Horizontal => (config.canvas.left, config.canvas.right()),
            AxisOrientation::Vertical => (config.canvas.bottom(), config.canvas.top),
        }
    }

    fn line_position(&self) -> f64 {
        self.config
            .position
            .unwrap_or(match self.config.orientation {
                AxisOrientation::Horizontal => self.config.canvas.bottom(),
                AxisOrientation::Vertical => self.config.canvas.left,
            })
    }

    fn main_position(&self, value: &AxisValue, offset: Option<f64>) -> f64 {
        match &self.scale {
            AxisScale::Continuous { .. } => value
                .as_scalar()
                .zip(self.linear)
                .and_then(|(scalar, linear)| linear.domain_to_pixel(scalar).ok())
                .unwrap_or(f64::NAN),
            AxisScale::Discrete { categories } => {
                let Some(index) = categories.iter().position(|category| category == value) else {
                    return f64::NAN;
                };
                let (start, end) = Self::pixel_span(self.config);
                let band = (end - start) / categories.len() as f64;
                start + band * (index as f64 + 0.5 + offset.unwrap_or(0.0))
            }
        }
    }

    fn along_axis(&self, coords: &Coords) -> f64 {
        match self.config.orientation {
            AxisOrientation::Horizontal => coords.x,
            AxisOrientation::Vertical => coords.y,
        }
    }
}

impl AxisContext for CartesianAxis {
    fn translate(&self, value: &AxisValue, offset: Option<f64>) -> Coords {
        let main = self.main_position(value, offset);
        let cross = self.line_position();
        match self.config.orientation {
            AxisOrientation::Horizontal => Coords::new(main, cross),
            AxisOrientation::Vertical => Coords::new(cross, main),
        }
    }

    fn tick_offset(&self) -> Option<f64> {
        self.config.tick_offset
    }

    fn are_coords_outside_axis(&self, coords: &Coords) -> bool {
        let position = self.along_axis(coords);
        if !position.is_finite() {
            return true;
        }
        let (start, end) = Self::pixel_span(self.config);
        position < start.min(end) - COORDS_EPSILON || position > start.max(end) + COORDS_EPSILON
    }

    fn business_range(&self) -> &BusinessRange {
        &self.range
    }

    fn format_label(
        &self,
        value: &AxisValue,
        options: &LabelOptions,
        range: &FormatRange,
    ) -> Option<String> {
        let text = match &options.formatter {
            Some(formatter) => formatter(value, range)?,
            None => format_value(value, &options.format, range)?,
        };
        Some(apply_affixes(text, &options.prefix, &options.suffix))
    }

    fn format_hint(
        &self,
        value: &AxisValue,
        options: &LabelOptions,
        range: &FormatRange,
    ) -> Option<String> {
        options
            .hint_formatter
            .as_ref()
            .and_then(|formatter| formatter(value, range))
    }

    fn tick_mark_points(&self, coords: &Coords, length: f64) -> LineSettings {
        if !coords.is_finite() || !length.is_finite() {
            return LineSettings::none();
        }
        let half = length / 2.0;
        let points = match self.config.orientation {
            AxisOrientation::Horizontal => smallvec![
                Point::new(coords.x, coords.y - half),
                Point::new(coords.x, coords.y + half)
            ],
            AxisOrientation::Vertical => smallvec![
                Point::new(coords.x - half, coords.y),
                Point::new(coords.x + half, coords.y)
            ],
        };
        LineSettings::new(points)
    }

    fn grid_points(&self, coords: &Coords) -> LineSettings {
        if self.are_coords_outside_axis(coords) {
            return LineSettings::none();
        }
        let canvas = self.config.canvas;
        let points = match self.config.orientation {
            AxisOrientation::Horizontal => smallvec![
                Point::new(coords.x, canvas.top),
                Point::new(coords.x, canvas.bottom())
            ],
            AxisOrientation::Vertical => smallvec![
                Point::new(canvas.left, coords.y),
                Point::new(canvas.right(), coords.y)
            ],
        };
        LineSettings::new(points)
    }

    fn groups(&self) -> &AxisGroups {
        &self.groups
    }

    fn label_options(&self) -> &LabelOptions {
        &self.label
    }

    fn label_attrs(&self) -> Attrs {
        let h_align = match self.config.orientation {
            AxisOrientation::Horizontal => TextHAlign::Center,
            AxisOrientation::Vertical => TextHAlign::Right,
        };
        Attrs::new().with_h_align(h_align)
    }
}

fn apply_affixes(text: String, prefix: &str, suffix: &str) -> String {
    if prefix.is_empty() && suffix.is_empty() {
        return text;
    }
    let mut decorated = String::with_capacity(prefix.len() + text.len() + suffix.len());
    decorated.push_str(prefix);
    decorated.push_str(&text);
    decorated.push_str(suffix);
    decorated
}

fn format_value(value: &AxisValue, format: &LabelFormat, range: &FormatRange) -> Option<String> {
    match (value, format) {
        (AxisValue::Category(name), _) => Some(name.clone()),
        (AxisValue::Number(number), LabelFormat::Fixed { precision }) => {
            Some(format!("{:.*}", usize::from(*precision), number.into_inner()))
        }
        (AxisValue::Number(number), LabelFormat::Auto) => {
            let number = number.into_inner();
            Some(match range.tick_interval.and_then(precision_for_interval) {
                Some(precision) => format!("{number:.precision$}"),
                None => format!("{number}"),
            })
        }
        (AxisValue::Number(number), LabelFormat::DateTime { pattern }) => {
            let millis = (number.into_inner() * 1_000.0).round();
            if !millis.is_finite() {
                return None;
            }
            format_date_time(DateTime::from_timestamp_millis(millis as i64)?, pattern)
        }
        (AxisValue::DateTime(time), LabelFormat::DateTime { pattern }) => {
            format_date_time(*time, pattern)
        }
        (AxisValue::DateTime(time), LabelFormat::Auto) => {
            format_date_time(*time, auto_date_pattern(range.tick_interval))
        }
        (AxisValue::DateTime(time), LabelFormat::Fixed { precision }) => Some(format!(
            "{:.*}",
            usize::from(*precision),
            time.timestamp_millis() as f64 / 1_000.0
        )),
    }
}

fn format_date_time(time: DateTime<Utc>, pattern: &str) -> Option<String> {
    let mut text = String::new();
    // Invalid strftime items surface as a fmt error rather than a panic here.
    write!(text, "{}", time.format(pattern)).ok()?;
    Some(text)
}

fn auto_date_pattern(tick_interval: Option<f64>) -> &'static str {
    match tick_interval {
        Some(interval) if interval.is_finite() && interval < 60.0 => "%H:%M:%S",
        Some(interval) if interval.is_finite() && interval < SECONDS_PER_DAY => "%H:%M",
        _ => "%Y-%m-%d",
    }
}

/// Smallest number of decimals that represents `interval` exactly.
fn precision_for_interval(interval: f64) -> Option<usize> {
    if !interval.is_finite() || interval <= 0.0 {
        return None;
    }
    (0..=MAX_AUTO_PRECISION).find(|decimals| {
        let scaled = interval * 10_f64.powi(*decimals as i32);
        (scaled - scaled.round()).abs() <= 1e-9 * scaled.abs().max(1.0)
    })
}
