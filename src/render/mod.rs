mod frame;
mod groups;
mod primitives;
mod recording_surface;
mod transition;

pub use frame::RenderFrame;
pub use groups::{AxisGroupKind, AxisGroups};
pub use primitives::{
    Attrs, Color, FontStyle, LinePrimitive, PathStyle, Rotation, TextHAlign, TextPrimitive,
};
pub use recording_surface::{ElementKind, RecordedElement, RecordingSurface, SurfaceCall};
pub use transition::{FADE_DURATION, FADE_IN_DELAY, TransitionRequest, TransitionTiming};

use serde::{Deserialize, Serialize};

use crate::core::AxisValue;

/// Opaque handle to an element living on a [`RenderSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(u64);

impl ElementId {
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Drawing collaborator ticks issue element operations against.
///
/// Implementations own element storage and animation execution. All calls
/// are fire-and-forget: a tick never observes their completion, so a surface
/// must tolerate operations on elements that were already removed.
pub trait RenderSurface {
    fn create_path(&mut self, style: &PathStyle) -> ElementId;
    fn create_text(&mut self, text: &str) -> ElementId;
    fn create_group(&mut self) -> ElementId;
    /// Attaches `element` under `parent`, detaching it from any previous parent.
    fn append(&mut self, element: ElementId, parent: ElementId);
    fn set_attrs(&mut self, element: ElementId, attrs: &Attrs);
    fn set_font_style(&mut self, element: ElementId, style: &FontStyle);
    fn set_data(&mut self, element: ElementId, key: &str, value: &AxisValue);
    fn set_title(&mut self, element: ElementId, title: &str);
    fn animate(&mut self, element: ElementId, request: &TransitionRequest);
    fn remove(&mut self, element: ElementId);
}
