use crate::error::TickResult;
use crate::render::{LinePrimitive, TextPrimitive};

/// Settled, visible content of a surface after all requested transitions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderFrame {
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> TickResult<()> {
        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.texts.is_empty()
    }

    #[must_use]
    pub fn text(&self, text: &str) -> Option<&TextPrimitive> {
        self.texts.iter().find(|primitive| primitive.text == text)
    }
}
