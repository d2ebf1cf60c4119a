use serde::{Deserialize, Serialize};

use super::{ElementId, RenderSurface};

/// Render groups an axis exposes to its ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisGroupKind {
    Root,
    Grid,
    AxisLine,
    Elements,
}

/// Group handles ticks attach their primitives to.
///
/// Grid lines live in their own top-level group so they can be layered
/// beneath series independently of the axis line and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisGroups {
    pub root: ElementId,
    pub grid: ElementId,
    pub line: ElementId,
    pub elements: ElementId,
}

impl AxisGroups {
    /// Creation order, which is also back-to-front paint order.
    pub const CANONICAL_ORDER: [AxisGroupKind; 4] = [
        AxisGroupKind::Grid,
        AxisGroupKind::Root,
        AxisGroupKind::AxisLine,
        AxisGroupKind::Elements,
    ];

    /// Creates the groups on `surface`; axis-line and elements groups are
    /// children of the root group.
    pub fn create(surface: &mut dyn RenderSurface) -> Self {
        let grid = surface.create_group();
        let root = surface.create_group();
        let line = surface.create_group();
        let elements = surface.create_group();
        surface.append(line, root);
        surface.append(elements, root);
        Self {
            root,
            grid,
            line,
            elements,
        }
    }

    #[must_use]
    pub fn get(&self, kind: AxisGroupKind) -> ElementId {
        match kind {
            AxisGroupKind::Root => self.root,
            AxisGroupKind::Grid => self.grid,
            AxisGroupKind::AxisLine => self.line,
            AxisGroupKind::Elements => self.elements,
        }
    }
}
