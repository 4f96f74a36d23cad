use crate::{Color, marshal::KeywordArgs};

/// Optional keywords of `fill_between`.
///
/// The filled region spans from the first to the second curve at every x.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FillOptions {
    /// Fill color.
    pub color: Option<Color>,
    /// Opacity of the region.
    pub alpha: Option<f64>,
    /// Optional label for legends.
    pub label: Option<String>,
}

impl FillOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set fill color. Use [`Color::Rgba`] to include opacity in the color itself.
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    /// Set a label for this fill (shown in legend when non-empty).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        if !label.is_empty() {
            self.label = Some(label);
        }
        self
    }

    pub(crate) fn kwargs(&self) -> KeywordArgs {
        KeywordArgs::new()
            .set_opt("color", self.color.as_ref())
            .set_opt("alpha", self.alpha)
            .set_opt("label", self.label.as_ref())
    }
}
