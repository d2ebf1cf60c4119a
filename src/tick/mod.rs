//! Per-value tick state machine.
//!
//! A [`Tick`] owns up to three surface elements (mark, grid line, label) and
//! two coordinate snapshots. The owning axis drives it once per redraw pass:
//!
//! 1. [`Tick::save_coords`] for ticks surviving from the previous pass,
//! 2. [`Tick::init_coords`],
//! 3. `draw_*` followed by `update_*_position` (animated or not),
//! 4. [`Tick::fade_out_elements`] and later [`Tick::dispose`] on retirement.
//!
//! Every draw silently does nothing when its element is disabled, skipped or
//! out of the axis extent; the next redraw pass is the recovery path.

mod factory;
mod fade;
mod grid;
mod label;
mod mark;
mod set;

pub use factory::{SkippedCategory, TickFactory, TickFactoryOptions};
pub use grid::axis_grid_line;
pub use set::TickSet;

use std::rc::Rc;

use tracing::debug;

use crate::axis::AxisContext;
use crate::core::{AxisValue, Coords};
use crate::render::{ElementId, RenderSurface};

use factory::TickTemplate;

/// Data key labels are tagged with so hit-testing can map them back to values.
pub const DATA_ARGUMENT_KEY: &str = "chart-data-argument";

/// Read-only view of a tick handed to user callbacks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickView<'a> {
    pub value: &'a AxisValue,
    pub coords: Option<Coords>,
    pub label_coords: Option<Coords>,
}

#[derive(Debug)]
pub struct Tick {
    value: AxisValue,
    coords: Option<Coords>,
    label_coords: Option<Coords>,
    stored_coords: Option<Coords>,
    stored_label_coords: Option<Coords>,
    mark: Option<ElementId>,
    grid: Option<ElementId>,
    label: Option<ElementId>,
    /// Transient group currently wrapping the label for a fade.
    label_group: Option<ElementId>,
    template: Rc<TickTemplate>,
}

impl Tick {
    fn new(value: AxisValue, template: Rc<TickTemplate>) -> Self {
        Self {
            value,
            coords: None,
            label_coords: None,
            stored_coords: None,
            stored_label_coords: None,
            mark: None,
            grid: None,
            label: None,
            label_group: None,
            template,
        }
    }

    #[must_use]
    pub fn value(&self) -> &AxisValue {
        &self.value
    }

    #[must_use]
    pub fn coords(&self) -> Option<Coords> {
        self.coords
    }

    #[must_use]
    pub fn label_coords(&self) -> Option<Coords> {
        self.label_coords
    }

    #[must_use]
    pub fn stored_coords(&self) -> Option<Coords> {
        self.stored_coords
    }

    #[must_use]
    pub fn stored_label_coords(&self) -> Option<Coords> {
        self.stored_label_coords
    }

    #[must_use]
    pub fn mark(&self) -> Option<ElementId> {
        self.mark
    }

    #[must_use]
    pub fn grid(&self) -> Option<ElementId> {
        self.grid
    }

    #[must_use]
    pub fn label(&self) -> Option<ElementId> {
        self.label
    }

    #[must_use]
    pub fn view(&self) -> TickView<'_> {
        TickView {
            value: &self.value,
            coords: self.coords,
            label_coords: self.label_coords,
        }
    }

    /// Rebinds the tick to another value; coordinates stay stale until the
    /// next [`Tick::init_coords`].
    pub fn update_value(&mut self, value: impl Into<AxisValue>) {
        self.value = value.into();
    }

    pub fn init_coords(&mut self, axis: &dyn AxisContext) {
        self.coords = Some(axis.translate(&self.value, self.template.offset));
        self.label_coords = Some(axis.translate(&self.value, None));
    }

    /// Snapshots the current coordinates as the next animation start point.
    pub fn save_coords(&mut self) {
        self.stored_coords = self.coords;
        self.stored_label_coords = self.label_coords;
    }

    /// Replaces the skipped category for every tick sharing this tick's factory.
    pub fn set_skipped_category(&self, category: Option<AxisValue>) {
        self.template.skipped_category.set(category);
    }

    fn is_skipped(&self) -> bool {
        self.template.skipped_category.matches(&self.value)
    }

    /// Adopts the styles and skip policy of another factory. Existing
    /// primitives keep the style they were created with.
    pub fn rebind(&mut self, factory: &TickFactory) {
        self.template = factory.template();
    }

    /// Removes every element the tick owns, including transient fade groups.
    pub fn dispose(&mut self, surface: &mut dyn RenderSurface) {
        for element in [
            self.mark.take(),
            self.grid.take(),
            self.label.take(),
            self.label_group.take(),
        ]
        .into_iter()
        .flatten()
        {
            surface.remove(element);
        }
        debug!(value = %self.value, "dispose tick");
    }
}
