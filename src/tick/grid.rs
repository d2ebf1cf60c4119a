use tracing::{debug, trace};

use crate::axis::AxisContext;
use crate::render::{Attrs, ElementId, PathStyle, RenderSurface};

use super::mark::update_line;
use super::{Tick, TickView};

impl Tick {
    /// Draws the grid line. A missing line is built by `draw_line`; an
    /// existing one is reattached and repositioned without animation.
    pub fn draw_grid<F>(
        &mut self,
        axis: &dyn AxisContext,
        surface: &mut dyn RenderSurface,
        draw_line: F,
    ) where
        F: FnOnce(TickView<'_>, &PathStyle, &mut dyn RenderSurface) -> Option<ElementId>,
    {
        if !self.template.grid.visible || self.is_skipped() {
            trace!(value = %self.value, "grid line suppressed");
            return;
        }

        let grid_group = axis.groups().grid;
        if let Some(grid) = self.grid {
            surface.append(grid, grid_group);
            self.update_grid_position(axis, surface, false);
            return;
        }

        let style = self.template.grid_style;
        if let Some(grid) = draw_line(self.view(), &style, surface) {
            surface.append(grid, grid_group);
            self.grid = Some(grid);
            debug!(value = %self.value, "create grid line");
        }
    }

    pub fn update_grid_position(
        &mut self,
        axis: &dyn AxisContext,
        surface: &mut dyn RenderSurface,
        animate: bool,
    ) {
        let Some(coords) = self.coords else {
            return;
        };
        let settings = axis.grid_points(&coords);
        let stored = self.stored_coords.map(|stored| axis.grid_points(&stored));
        update_line(axis, surface, &mut self.grid, &coords, settings, stored, animate);
    }
}

/// Grid line builder for axes whose grid geometry comes from
/// [`AxisContext::grid_points`]: creates a path with the grid style and
/// places it at the tick's current coordinates.
pub fn axis_grid_line(
    axis: &dyn AxisContext,
) -> impl FnOnce(TickView<'_>, &PathStyle, &mut dyn RenderSurface) -> Option<ElementId> + '_ {
    move |view, style, surface| {
        let points = axis.grid_points(&view.coords?).points?;
        let line = surface.create_path(style);
        surface.set_attrs(line, &Attrs::new().with_points(points).with_opacity(1.0));
        Some(line)
    }
}
