use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::AxisValue;
use crate::error::{TickError, TickResult};
use crate::render::{Color, FontStyle, PathStyle};
use crate::tick::TickView;

use super::FormatRange;

pub const AXIS_TICK_CONFIG_JSON_SCHEMA_V1: u32 = 1;

const DEFAULT_LINE_COLOR: Color = Color::rgb(0.827, 0.827, 0.827);

/// Tick-mark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickOptions {
    pub visible: bool,
    pub color: Color,
    pub width: f64,
    pub opacity: f64,
    /// Mark length in pixels, centered on the axis line.
    pub length: f64,
}

impl Default for TickOptions {
    fn default() -> Self {
        Self {
            visible: true,
            color: DEFAULT_LINE_COLOR,
            width: 1.0,
            opacity: 1.0,
            length: 7.0,
        }
    }
}

impl TickOptions {
    #[must_use]
    pub fn path_style(&self) -> PathStyle {
        PathStyle::new(self.color, self.width, self.opacity)
    }

    pub fn validate(&self) -> TickResult<()> {
        if !self.length.is_finite() || self.length < 0.0 {
            return Err(TickError::InvalidStyle(
                "tick length must be finite and >= 0".to_owned(),
            ));
        }
        self.path_style().validate()
    }
}

/// Grid-line appearance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    pub visible: bool,
    pub color: Color,
    pub width: f64,
    pub opacity: f64,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            visible: false,
            color: DEFAULT_LINE_COLOR,
            width: 1.0,
            opacity: 1.0,
        }
    }
}

impl GridOptions {
    #[must_use]
    pub fn path_style(&self) -> PathStyle {
        PathStyle::new(self.color, self.width, self.opacity)
    }

    pub fn validate(&self) -> TickResult<()> {
        self.path_style().validate()
    }
}

/// Built-in label text formats.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LabelFormat {
    /// Numbers get a precision derived from the tick interval, date-times a
    /// pattern derived from it; categories print as-is.
    #[default]
    Auto,
    Fixed {
        precision: u8,
    },
    /// `chrono` strftime pattern.
    DateTime {
        pattern: String,
    },
}

pub type LabelFormatterFn =
    Arc<dyn Fn(&AxisValue, &FormatRange) -> Option<String> + Send + Sync + 'static>;
pub type LabelColorFn = Arc<dyn Fn(TickView<'_>) -> Option<Color> + Send + Sync + 'static>;

/// Label settings read by ticks at draw time.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelOptions {
    pub visible: bool,
    pub format: LabelFormat,
    pub prefix: String,
    pub suffix: String,
    pub font: FontStyle,
    /// Replaces the built-in format when set.
    #[serde(skip)]
    pub formatter: Option<LabelFormatterFn>,
    #[serde(skip)]
    pub hint_formatter: Option<LabelFormatterFn>,
    /// Per-tick fill override; `None` from the callback keeps the font fill.
    #[serde(skip)]
    pub customize_color: Option<LabelColorFn>,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            visible: true,
            format: LabelFormat::Auto,
            prefix: String::new(),
            suffix: String::new(),
            font: FontStyle::default(),
            formatter: None,
            hint_formatter: None,
            customize_color: None,
        }
    }
}

impl fmt::Debug for LabelOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabelOptions")
            .field("visible", &self.visible)
            .field("format", &self.format)
            .field("prefix", &self.prefix)
            .field("suffix", &self.suffix)
            .field("font", &self.font)
            .field("formatter", &self.formatter.is_some())
            .field("hint_formatter", &self.hint_formatter.is_some())
            .field("customize_color", &self.customize_color.is_some())
            .finish()
    }
}

impl LabelOptions {
    #[must_use]
    pub fn with_formatter(
        mut self,
        formatter: impl Fn(&AxisValue, &FormatRange) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    #[must_use]
    pub fn with_hint_formatter(
        mut self,
        formatter: impl Fn(&AxisValue, &FormatRange) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.hint_formatter = Some(Arc::new(formatter));
        self
    }

    #[must_use]
    pub fn with_customize_color(
        mut self,
        customize: impl Fn(TickView<'_>) -> Option<Color> + Send + Sync + 'static,
    ) -> Self {
        self.customize_color = Some(Arc::new(customize));
        self
    }

    pub fn validate(&self) -> TickResult<()> {
        self.font.validate()
    }
}

/// Serializable tick styling for one axis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisTickConfig {
    pub tick: TickOptions,
    pub grid: GridOptions,
    pub label: LabelOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxisTickConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: AxisTickConfig,
}

impl AxisTickConfig {
    pub fn validate(&self) -> TickResult<()> {
        self.tick.validate()?;
        self.grid.validate()?;
        self.label.validate()
    }

    pub fn to_json_pretty(&self) -> TickResult<String> {
        let payload = AxisTickConfigJsonContractV1 {
            schema_version: AXIS_TICK_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload)
            .map_err(|e| TickError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Parses either a bare config object or a versioned contract payload,
    /// then validates it.
    pub fn from_json_str(input: &str) -> TickResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| TickError::InvalidConfig(format!("failed to parse config json: {e}")))?;

        let config = if value.get("schema_version").is_some() {
            let payload: AxisTickConfigJsonContractV1 = serde_json::from_value(value)
                .map_err(|e| TickError::InvalidConfig(format!("invalid config payload: {e}")))?;
            if payload.schema_version != AXIS_TICK_CONFIG_JSON_SCHEMA_V1 {
                return Err(TickError::InvalidConfig(format!(
                    "unsupported config schema version: {}",
                    payload.schema_version
                )));
            }
            payload.config
        } else {
            serde_json::from_value(value)
                .map_err(|e| TickError::InvalidConfig(format!("invalid config: {e}")))?
        };

        config.validate()?;
        Ok(config)
    }
}
