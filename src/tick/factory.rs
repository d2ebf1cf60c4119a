use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::axis::{AxisContext, GridOptions, TickOptions};
use crate::core::AxisValue;
use crate::error::TickResult;
use crate::render::PathStyle;

use super::Tick;

/// Skip policy shared by every tick one factory produced.
///
/// Setting it through any tick, or through the factory, changes the
/// comparison all sibling ticks use on their next `draw_mark`/`draw_grid`.
#[derive(Debug, Clone, Default)]
pub struct SkippedCategory(Rc<RefCell<Option<AxisValue>>>);

impl SkippedCategory {
    #[must_use]
    pub fn new(category: Option<AxisValue>) -> Self {
        Self(Rc::new(RefCell::new(category)))
    }

    pub fn set(&self, category: Option<AxisValue>) {
        *self.0.borrow_mut() = category;
    }

    #[must_use]
    pub fn get(&self) -> Option<AxisValue> {
        self.0.borrow().clone()
    }

    #[must_use]
    pub fn matches(&self, value: &AxisValue) -> bool {
        self.0.borrow().as_ref() == Some(value)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TickFactoryOptions {
    pub tick: TickOptions,
    pub grid: GridOptions,
    pub skipped_category: Option<AxisValue>,
    /// Suppresses every label, e.g. during an overlap-avoidance pass.
    pub skip_labels: bool,
    /// Tick-mark offset; falls back to the axis default when absent or zero.
    pub offset: Option<f64>,
}

/// Settings resolved once per factory and shared by its ticks.
#[derive(Debug)]
pub(crate) struct TickTemplate {
    pub(crate) tick: TickOptions,
    pub(crate) grid: GridOptions,
    pub(crate) tick_style: PathStyle,
    pub(crate) grid_style: PathStyle,
    pub(crate) skip_labels: bool,
    pub(crate) offset: Option<f64>,
    pub(crate) skipped_category: SkippedCategory,
}

/// Builds ticks bound to one axis redraw pass.
#[derive(Debug, Clone)]
pub struct TickFactory {
    template: Rc<TickTemplate>,
}

impl TickFactory {
    pub fn new(axis: &dyn AxisContext, options: TickFactoryOptions) -> TickResult<Self> {
        options.tick.validate()?;
        options.grid.validate()?;

        let template = TickTemplate {
            tick_style: options.tick.path_style(),
            grid_style: options.grid.path_style(),
            tick: options.tick,
            grid: options.grid,
            skip_labels: options.skip_labels,
            offset: options
                .offset
                .filter(|offset| *offset != 0.0)
                .or_else(|| axis.tick_offset()),
            skipped_category: SkippedCategory::new(options.skipped_category),
        };
        Ok(Self {
            template: Rc::new(template),
        })
    }

    #[must_use]
    pub fn create(&self, value: impl Into<AxisValue>) -> Tick {
        Tick::new(value.into(), Rc::clone(&self.template))
    }

    #[must_use]
    pub fn skipped_category(&self) -> SkippedCategory {
        self.template.skipped_category.clone()
    }

    #[must_use]
    pub fn tick_offset(&self) -> Option<f64> {
        self.template.offset
    }

    pub(crate) fn template(&self) -> Rc<TickTemplate> {
        Rc::clone(&self.template)
    }
}
