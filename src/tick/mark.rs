use tracing::{debug, trace};

use crate::axis::{AxisContext, LineSettings};
use crate::core::Coords;
use crate::render::{Attrs, ElementId, RenderSurface, TransitionRequest};

use super::Tick;

impl Tick {
    pub fn draw_mark(&mut self, axis: &dyn AxisContext, surface: &mut dyn RenderSurface) {
        if !self.template.tick.visible || self.is_skipped() {
            trace!(value = %self.value, "tick mark suppressed");
            return;
        }
        let Some(coords) = self.coords else {
            return;
        };
        if axis.are_coords_outside_axis(&coords) {
            return;
        }

        let line_group = axis.groups().line;
        match self.mark {
            Some(mark) => surface.append(mark, line_group),
            None => {
                let mark = surface.create_path(&self.template.tick_style);
                surface.append(mark, line_group);
                self.mark = Some(mark);
                debug!(value = %self.value, "create tick mark");
            }
        }
        self.update_tick_position(axis, surface, false);
    }

    pub fn update_tick_position(
        &mut self,
        axis: &dyn AxisContext,
        surface: &mut dyn RenderSurface,
        animate: bool,
    ) {
        let Some(coords) = self.coords else {
            return;
        };
        let length = self.template.tick.length;
        let settings = axis.tick_mark_points(&coords, length);
        let stored = self
            .stored_coords
            .map(|stored| axis.tick_mark_points(&stored, length));
        update_line(axis, surface, &mut self.mark, &coords, settings, stored, animate);
    }
}

/// Shared position update for tick marks and grid lines.
///
/// `coords` are the tick's current coordinates and only drive rotation.
pub(super) fn update_line(
    axis: &dyn AxisContext,
    surface: &mut dyn RenderSurface,
    line: &mut Option<ElementId>,
    coords: &Coords,
    settings: LineSettings,
    stored: Option<LineSettings>,
    animate: bool,
) {
    let Some(element) = *line else {
        return;
    };
    let Some(points) = settings.points else {
        surface.remove(element);
        *line = None;
        debug!(element = element.raw(), "remove degenerate line");
        return;
    };

    match stored.and_then(|stored| stored.points) {
        Some(previous) if animate => {
            surface.set_attrs(element, &Attrs::new().with_points(previous));
            surface.animate(
                element,
                &TransitionRequest::to(Attrs::new().with_points(points).with_opacity(1.0)),
            );
        }
        _ => {
            let opacity = if animate { 0.0 } else { 1.0 };
            surface.set_attrs(
                element,
                &Attrs::new().with_points(points).with_opacity(opacity),
            );
            if animate {
                surface.animate(element, &TransitionRequest::fade_in());
            }
        }
    }

    if coords.rotation_angle().is_some() {
        axis.rotate_tick(surface, element, coords);
    }
}
