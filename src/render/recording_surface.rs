use indexmap::IndexMap;
use tracing::trace;

use crate::core::AxisValue;
use crate::render::{
    Attrs, ElementId, FontStyle, LinePrimitive, PathStyle, RenderFrame, RenderSurface,
    TextHAlign, TextPrimitive, TransitionRequest,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Path,
    Text,
    Group,
}

/// One call received by a [`RecordingSurface`], in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    CreatePath {
        element: ElementId,
        style: PathStyle,
    },
    CreateText {
        element: ElementId,
        text: String,
    },
    CreateGroup {
        element: ElementId,
    },
    Append {
        element: ElementId,
        parent: ElementId,
    },
    SetAttrs {
        element: ElementId,
        attrs: Attrs,
    },
    SetFontStyle {
        element: ElementId,
        style: FontStyle,
    },
    SetData {
        element: ElementId,
        key: String,
        value: AxisValue,
    },
    SetTitle {
        element: ElementId,
        title: String,
    },
    Animate {
        element: ElementId,
        request: TransitionRequest,
    },
    Remove {
        element: ElementId,
    },
}

impl SurfaceCall {
    #[must_use]
    pub fn element(&self) -> ElementId {
        match self {
            Self::CreatePath { element, .. }
            | Self::CreateText { element, .. }
            | Self::CreateGroup { element }
            | Self::Append { element, .. }
            | Self::SetAttrs { element, .. }
            | Self::SetFontStyle { element, .. }
            | Self::SetData { element, .. }
            | Self::SetTitle { element, .. }
            | Self::Animate { element, .. }
            | Self::Remove { element } => *element,
        }
    }
}

/// Element state tracked by a [`RecordingSurface`].
///
/// `attrs` holds what was applied immediately; `settled` additionally folds
/// in every requested transition target, i.e. the state once animations end.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedElement {
    pub kind: ElementKind,
    pub parent: Option<ElementId>,
    pub attrs: Attrs,
    pub settled: Attrs,
    pub path_style: Option<PathStyle>,
    pub font_style: Option<FontStyle>,
    pub data: IndexMap<String, AxisValue>,
    pub title: Option<String>,
}

impl RecordedElement {
    fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            parent: None,
            attrs: Attrs::default(),
            settled: Attrs::default(),
            path_style: None,
            font_style: None,
            data: IndexMap::new(),
            title: None,
        }
    }
}

/// In-memory surface that records every call and keeps an element tree.
///
/// Used by tests and headless hosts: transitions settle instantly in
/// [`RecordingSurface::frame`], while [`RecordingSurface::calls`] keeps the
/// request sequence. Removed elements are evicted together with their
/// subtree. The call log is unbounded unless a limit is set with
/// [`RecordingSurface::with_call_limit`]; long-running hosts without a limit
/// must drain it with [`RecordingSurface::take_calls`].
#[derive(Debug, Default)]
pub struct RecordingSurface {
    next_id: u64,
    elements: IndexMap<ElementId, RecordedElement>,
    calls: Vec<SurfaceCall>,
    call_limit: Option<usize>,
}

impl RecordingSurface {
    /// Keeps only the most recent `limit` calls.
    #[must_use]
    pub fn with_call_limit(mut self, limit: usize) -> Self {
        self.call_limit = Some(limit);
        self.trim_calls();
        self
    }

    #[must_use]
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<SurfaceCall> {
        std::mem::take(&mut self.calls)
    }

    #[must_use]
    pub fn element(&self, element: ElementId) -> Option<&RecordedElement> {
        self.elements.get(&element)
    }

    pub fn elements(&self) -> impl Iterator<Item = (ElementId, &RecordedElement)> {
        self.elements.iter().map(|(id, element)| (*id, element))
    }

    /// Transition requests issued for `element`, oldest first.
    #[must_use]
    pub fn animations(&self, element: ElementId) -> Vec<&TransitionRequest> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Animate {
                    element: target,
                    request,
                } if *target == element => Some(request),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn animation_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, SurfaceCall::Animate { .. }))
            .count()
    }

    /// Whether `element` is attached, directly or through groups, to a live
    /// root group and neither it nor any ancestor was removed.
    #[must_use]
    pub fn is_live(&self, element: ElementId) -> bool {
        let mut current = element;
        for _ in 0..=self.elements.len() {
            let Some(recorded) = self.elements.get(&current) else {
                return false;
            };
            match recorded.parent {
                Some(parent) => current = parent,
                None => return recorded.kind == ElementKind::Group,
            }
        }
        false
    }

    #[must_use]
    pub fn live_count(&self, kind: ElementKind) -> usize {
        self.elements
            .iter()
            .filter(|(id, element)| element.kind == kind && self.is_live(**id))
            .count()
    }

    /// Settled opacity of `element` multiplied through its ancestors.
    #[must_use]
    pub fn effective_opacity(&self, element: ElementId) -> f64 {
        let mut opacity = 1.0;
        let mut current = Some(element);
        let mut depth = 0;
        while let Some(id) = current {
            let Some(recorded) = self.elements.get(&id) else {
                break;
            };
            opacity *= recorded.settled.opacity.unwrap_or(1.0);
            current = recorded.parent;
            depth += 1;
            if depth > self.elements.len() {
                break;
            }
        }
        opacity
    }

    /// Visible lines and texts once every requested transition has settled.
    #[must_use]
    pub fn frame(&self) -> RenderFrame {
        let mut frame = RenderFrame::new();
        for (id, element) in &self.elements {
            if element.kind == ElementKind::Group || !self.is_live(*id) {
                continue;
            }
            let opacity = self.effective_opacity(*id);
            if opacity <= 0.0 {
                continue;
            }
            match element.kind {
                ElementKind::Path => {
                    let (Some(points), Some(style)) = (&element.settled.points, element.path_style)
                    else {
                        continue;
                    };
                    let color = style
                        .stroke
                        .with_alpha_scaled(style.stroke_opacity * style.opacity * opacity);
                    for segment in points.windows(2) {
                        frame.lines.push(LinePrimitive::new(
                            segment[0].x,
                            segment[0].y,
                            segment[1].x,
                            segment[1].y,
                            style.stroke_width,
                            color,
                        ));
                    }
                }
                ElementKind::Text => {
                    let Some(text) = element.settled.text.as_deref() else {
                        continue;
                    };
                    let font = element.font_style.clone().unwrap_or_default();
                    frame.texts.push(TextPrimitive::new(
                        text,
                        element.settled.x.unwrap_or(0.0),
                        element.settled.y.unwrap_or(0.0),
                        font.size_px,
                        font.fill.with_alpha_scaled(opacity),
                        element.settled.h_align.unwrap_or(TextHAlign::Center),
                    ));
                }
                ElementKind::Group => {}
            }
        }
        frame
    }

    fn descends_from(&self, element: ElementId, ancestor: ElementId) -> bool {
        let mut current = self.elements.get(&element).and_then(|recorded| recorded.parent);
        for _ in 0..=self.elements.len() {
            match current {
                Some(id) if id == ancestor => return true,
                Some(id) => current = self.elements.get(&id).and_then(|recorded| recorded.parent),
                None => return false,
            }
        }
        false
    }

    fn push_call(&mut self, call: SurfaceCall) {
        self.calls.push(call);
        self.trim_calls();
    }

    fn trim_calls(&mut self) {
        if let Some(limit) = self.call_limit {
            let excess = self.calls.len().saturating_sub(limit);
            if excess > 0 {
                self.calls.drain(..excess);
            }
        }
    }

    fn allocate(&mut self, kind: ElementKind) -> ElementId {
        self.next_id += 1;
        let id = ElementId::from_raw(self.next_id);
        self.elements.insert(id, RecordedElement::new(kind));
        id
    }
}

impl RenderSurface for RecordingSurface {
    fn create_path(&mut self, style: &PathStyle) -> ElementId {
        let id = self.allocate(ElementKind::Path);
        if let Some(element) = self.elements.get_mut(&id) {
            element.path_style = Some(*style);
        }
        self.push_call(SurfaceCall::CreatePath {
            element: id,
            style: *style,
        });
        id
    }

    fn create_text(&mut self, text: &str) -> ElementId {
        let id = self.allocate(ElementKind::Text);
        if let Some(element) = self.elements.get_mut(&id) {
            element.attrs.text = Some(text.to_owned());
            element.settled.text = Some(text.to_owned());
        }
        self.push_call(SurfaceCall::CreateText {
            element: id,
            text: text.to_owned(),
        });
        id
    }

    fn create_group(&mut self) -> ElementId {
        let id = self.allocate(ElementKind::Group);
        self.push_call(SurfaceCall::CreateGroup { element: id });
        id
    }

    fn append(&mut self, element: ElementId, parent: ElementId) {
        match self.elements.get_mut(&element) {
            Some(recorded) => recorded.parent = Some(parent),
            None => trace!(element = element.raw(), "append on unknown element"),
        }
        self.push_call(SurfaceCall::Append { element, parent });
    }

    fn set_attrs(&mut self, element: ElementId, attrs: &Attrs) {
        if let Some(recorded) = self.elements.get_mut(&element) {
            recorded.attrs.merge(attrs);
            recorded.settled.merge(attrs);
        }
        self.push_call(SurfaceCall::SetAttrs {
            element,
            attrs: attrs.clone(),
        });
    }

    fn set_font_style(&mut self, element: ElementId, style: &FontStyle) {
        if let Some(recorded) = self.elements.get_mut(&element) {
            recorded.font_style = Some(style.clone());
        }
        self.push_call(SurfaceCall::SetFontStyle {
            element,
            style: style.clone(),
        });
    }

    fn set_data(&mut self, element: ElementId, key: &str, value: &AxisValue) {
        if let Some(recorded) = self.elements.get_mut(&element) {
            recorded.data.insert(key.to_owned(), value.clone());
        }
        self.push_call(SurfaceCall::SetData {
            element,
            key: key.to_owned(),
            value: value.clone(),
        });
    }

    fn set_title(&mut self, element: ElementId, title: &str) {
        if let Some(recorded) = self.elements.get_mut(&element) {
            recorded.title = Some(title.to_owned());
        }
        self.push_call(SurfaceCall::SetTitle {
            element,
            title: title.to_owned(),
        });
    }

    fn animate(&mut self, element: ElementId, request: &TransitionRequest) {
        if let Some(recorded) = self.elements.get_mut(&element) {
            recorded.settled.merge(&request.target);
        }
        self.push_call(SurfaceCall::Animate {
            element,
            request: request.clone(),
        });
    }

    fn remove(&mut self, element: ElementId) {
        if self.elements.contains_key(&element) {
            let subtree: Vec<ElementId> = self
                .elements
                .keys()
                .copied()
                .filter(|id| *id == element || self.descends_from(*id, element))
                .collect();
            for id in &subtree {
                self.elements.shift_remove(id);
            }
            trace!(element = element.raw(), evicted = subtree.len(), "remove element");
        }
        self.push_call(SurfaceCall::Remove { element });
    }
}
