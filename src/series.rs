use crate::{
    Color, Marker,
    marshal::KeywordArgs,
    value::{ToValue, Value},
};

/// Line styling options for `plot` and its log-scale variants.
#[derive(Debug, Clone, PartialEq)]
pub enum LineStyle {
    /// Solid continuous line (`"-"`).
    Solid,
    /// Dashed line (`"--"`).
    Dashed,
    /// Alternating dashes and dots (`"-."`).
    DashDot,
    /// Dotted line (`":"`).
    Dotted,
    /// No line at all, markers only (`"None"`).
    None,
    /// Raw style token or dash pattern, forwarded unchanged.
    Other(String),
}

impl LineStyle {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Solid => "-",
            Self::Dashed => "--",
            Self::DashDot => "-.",
            Self::Dotted => ":",
            Self::None => "None",
            Self::Other(s) => s,
        }
    }
}

impl ToValue for LineStyle {
    fn to_value(&self) -> Value {
        Value::Str(self.as_str().to_owned())
    }
}

/// Optional keywords of a line plot. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineOptions {
    pub color: Option<Color>,
    pub linewidth: Option<f64>,
    pub linestyle: Option<LineStyle>,
    /// Legend label for the line.
    pub label: Option<String>,
    pub alpha: Option<f64>,
    pub marker: Option<Marker>,
}

impl LineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the color of the line.
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the line width in points.
    pub fn with_linewidth(mut self, width: f64) -> Self {
        self.linewidth = Some(width);
        self
    }

    /// Set or change the line style.
    pub fn with_linestyle(mut self, style: LineStyle) -> Self {
        self.linestyle = Some(style);
        self
    }

    /// Set solid line style.
    pub fn line_solid(self) -> Self {
        self.with_linestyle(LineStyle::Solid)
    }

    /// Set dashed line style.
    pub fn line_dashed(self) -> Self {
        self.with_linestyle(LineStyle::Dashed)
    }

    /// Set dotted line style.
    pub fn line_dotted(self) -> Self {
        self.with_linestyle(LineStyle::Dotted)
    }

    /// Set a label for the line. Empty labels are ignored.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        let l = label.into();
        if !l.is_empty() {
            self.label = Some(l);
        }
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    /// Draw a marker at every data point.
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    pub(crate) fn kwargs(&self) -> KeywordArgs {
        KeywordArgs::new()
            .set_opt("color", self.color.as_ref())
            .set_opt("linewidth", self.linewidth)
            .set_opt("linestyle", self.linestyle.as_ref())
            .set_opt("label", self.label.as_ref())
            .set_opt("alpha", self.alpha)
            .set_opt("marker", self.marker.as_ref())
    }
}
