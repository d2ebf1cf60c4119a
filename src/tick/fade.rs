use tracing::debug;

use crate::axis::AxisContext;
use crate::render::{Attrs, RenderSurface, TransitionRequest};

use super::Tick;

impl Tick {
    /// Fades every present element out for retirement. Elements stay on the
    /// surface until [`Tick::dispose`].
    pub fn fade_out_elements(&mut self, axis: &dyn AxisContext, surface: &mut dyn RenderSurface) {
        let groups = *axis.groups();
        let start = Attrs::new().with_opacity(1.0);
        let fade_out = TransitionRequest::fade_out();

        if self.label.is_some() {
            self.wrap_label(axis, surface, fade_out.clone());
        }
        if let Some(grid) = self.grid {
            surface.append(grid, groups.grid);
            surface.set_attrs(grid, &start);
            surface.animate(grid, &fade_out);
        }
        if let Some(mark) = self.mark {
            surface.append(mark, groups.line);
            surface.set_attrs(mark, &start);
            surface.animate(mark, &fade_out);
        }
        debug!(value = %self.value, "fade out tick");
    }

    /// Moves the label into a fresh transient group under the elements group
    /// and animates the group's opacity, leaving the label's own position
    /// free to animate concurrently.
    pub(super) fn wrap_label(
        &mut self,
        axis: &dyn AxisContext,
        surface: &mut dyn RenderSurface,
        request: TransitionRequest,
    ) {
        let Some(label) = self.label else {
            return;
        };
        let start_opacity = match request.target.opacity {
            Some(target) if target > 0.0 => 0.0,
            _ => 1.0,
        };

        let group = surface.create_group();
        surface.set_attrs(group, &Attrs::new().with_opacity(start_opacity));
        surface.append(group, axis.groups().elements);
        surface.animate(group, &request);
        surface.append(label, group);

        self.release_label_group(surface);
        self.label_group = Some(group);
    }

    /// Drops the transient group that wrapped the label, if any. The label
    /// must already have been moved out of it or removed.
    pub(super) fn release_label_group(&mut self, surface: &mut dyn RenderSurface) {
        if let Some(group) = self.label_group.take() {
            surface.remove(group);
        }
    }
}
