use tracing::{debug, warn};

use crate::axis::{AxisContext, FormatRange};
use crate::render::{Attrs, FontStyle, RenderSurface, Rotation, TransitionRequest};

use super::{DATA_ARGUMENT_KEY, Tick};

impl Tick {
    /// Creates, updates or removes the label for the current pass. An
    /// existing label whose text formats to `None` is blanked, not removed.
    pub fn draw_label(
        &mut self,
        axis: &dyn AxisContext,
        surface: &mut dyn RenderSurface,
        range: &FormatRange,
    ) {
        let options = axis.label_options();
        let visible = options.visible
            && !self.template.skip_labels
            && !axis.business_range().stub_data
            && self
                .label_coords
                .is_some_and(|coords| !axis.are_coords_outside_axis(&coords));

        if !visible {
            if let Some(label) = self.label.take() {
                surface.remove(label);
                self.release_label_group(surface);
                debug!(value = %self.value, "remove hidden label");
            }
            return;
        }

        let text = axis.format_label(&self.value, options, range);

        if let Some(label) = self.label {
            surface.set_attrs(
                label,
                &Attrs::new()
                    .with_text(text.unwrap_or_default())
                    .with_rotation(Rotation::zero()),
            );
            surface.append(label, axis.groups().elements);
            self.release_label_group(surface);
            self.update_label_position(axis, surface, false);
            return;
        }

        let Some(text) = text.filter(|text| !text.trim().is_empty()) else {
            return;
        };

        let label = surface.create_text(&text);
        surface.set_font_style(label, &self.label_font_style(axis));
        surface.set_attrs(label, &axis.label_attrs());
        surface.set_data(label, DATA_ARGUMENT_KEY, &self.value);
        surface.append(label, axis.groups().elements);
        self.label = Some(label);
        debug!(value = %self.value, text = %text, "create label");
        self.update_label_position(axis, surface, false);

        if let Some(hint) = axis
            .format_hint(&self.value, options, range)
            .filter(|hint| !hint.is_empty())
        {
            surface.set_title(label, &hint);
        }
    }

    pub fn update_label_position(
        &mut self,
        axis: &dyn AxisContext,
        surface: &mut dyn RenderSurface,
        animate: bool,
    ) {
        let (Some(label), Some(coords)) = (self.label, self.label_coords) else {
            return;
        };

        match self.stored_label_coords {
            Some(stored) if animate => {
                surface.set_attrs(label, &Attrs::new().with_position(stored.x, stored.y));
                surface.animate(
                    label,
                    &TransitionRequest::to(Attrs::new().with_position(coords.x, coords.y)),
                );
            }
            _ => {
                surface.set_attrs(label, &Attrs::new().with_position(coords.x, coords.y));
                if animate {
                    self.wrap_label(axis, surface, TransitionRequest::fade_in());
                }
            }
        }
    }

    /// Destroys the label. Calling it without a label is a caller error and
    /// is only logged.
    pub fn remove_label(&mut self, surface: &mut dyn RenderSurface) {
        match self.label.take() {
            Some(label) => {
                surface.remove(label);
                self.release_label_group(surface);
            }
            None => warn!(value = %self.value, "remove_label called without a label"),
        }
    }

    fn label_font_style(&self, axis: &dyn AxisContext) -> FontStyle {
        let font = axis.label_font_style();
        match &axis.label_options().customize_color {
            Some(customize) => match customize(self.view()) {
                Some(fill) => font.with_fill(fill),
                None => font,
            },
            None => font,
        }
    }
}
