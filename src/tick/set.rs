use indexmap::IndexMap;
use tracing::trace;

use crate::axis::{AxisContext, FormatRange};
use crate::core::AxisValue;
use crate::render::{ElementId, PathStyle, RenderSurface};

use super::{Tick, TickFactory, TickView};

/// Ticks of one axis, keyed by value and reconciled once per redraw pass.
#[derive(Debug, Default)]
pub struct TickSet {
    ticks: IndexMap<AxisValue, Tick>,
    /// Ticks fading out since the last pass; disposed on the next one.
    retired: Vec<Tick>,
}

impl TickSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    #[must_use]
    pub fn get(&self, value: &AxisValue) -> Option<&Tick> {
        self.ticks.get(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tick> {
        self.ticks.values()
    }

    #[must_use]
    pub fn retired_len(&self) -> usize {
        self.retired.len()
    }

    /// Runs one redraw pass for `values`, in order.
    ///
    /// Surviving ticks keep their elements and animate from their previous
    /// coordinates, new ticks fade in, and ticks whose value disappeared are
    /// faded out (when animating) or disposed right away.
    #[allow(clippy::too_many_arguments)]
    pub fn sync<F>(
        &mut self,
        factory: &TickFactory,
        values: &[AxisValue],
        axis: &dyn AxisContext,
        surface: &mut dyn RenderSurface,
        range: &FormatRange,
        animate: bool,
        mut draw_line: F,
    ) where
        F: FnMut(TickView<'_>, &PathStyle, &mut dyn RenderSurface) -> Option<ElementId>,
    {
        for mut tick in self.retired.drain(..) {
            tick.dispose(surface);
        }

        let mut previous = std::mem::take(&mut self.ticks);
        let mut reused = 0_usize;
        for value in values {
            if self.ticks.contains_key(value) {
                continue;
            }
            let mut tick = match previous.swap_remove(value) {
                Some(mut tick) => {
                    tick.save_coords();
                    tick.rebind(factory);
                    reused += 1;
                    tick
                }
                None => factory.create(value.clone()),
            };

            tick.init_coords(axis);
            tick.draw_mark(axis, surface);
            tick.draw_grid(axis, surface, &mut draw_line);
            tick.draw_label(axis, surface, range);
            if animate {
                tick.update_tick_position(axis, surface, true);
                tick.update_grid_position(axis, surface, true);
                tick.update_label_position(axis, surface, true);
            }
            self.ticks.insert(value.clone(), tick);
        }

        let outdated = previous.len();
        for (_, mut tick) in previous {
            if animate {
                tick.fade_out_elements(axis, surface);
                self.retired.push(tick);
            } else {
                tick.dispose(surface);
            }
        }

        trace!(
            count = self.ticks.len(),
            reused,
            outdated,
            animate,
            "sync ticks"
        );
    }

    /// Disposes every live and retired tick.
    pub fn clear(&mut self, surface: &mut dyn RenderSurface) {
        for (_, mut tick) in self.ticks.drain(..) {
            tick.dispose(surface);
        }
        for mut tick in self.retired.drain(..) {
            tick.dispose(surface);
        }
    }
}
