//! Options for the bar-shaped plots: `hist`, `bar` and `stairs`.
use crate::{
    Color,
    marshal::{self, KeywordArgs},
    value::{ToValue, Value},
};

/// Direction in which bars or steps extend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

impl ToValue for Orientation {
    fn to_value(&self) -> Value {
        Value::Str(self.as_str().to_owned())
    }
}

/// Histogram drawing style (`histtype`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistType {
    /// Traditional bar histogram.
    #[default]
    Bar,
    /// Bars stacked on top of each other for multiple datasets.
    BarStacked,
    /// Unfilled outline.
    Step,
    /// Filled outline.
    StepFilled,
}

impl HistType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::BarStacked => "barstacked",
            Self::Step => "step",
            Self::StepFilled => "stepfilled",
        }
    }
}

impl ToValue for HistType {
    fn to_value(&self) -> Value {
        Value::Str(self.as_str().to_owned())
    }
}

/// Alignment of bars on their x coordinate (`align`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Center,
    /// Align the left edge of each bar with its x coordinate.
    Edge,
}

impl Align {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Edge => "edge",
        }
    }
}

impl ToValue for Align {
    fn to_value(&self) -> Value {
        Value::Str(self.as_str().to_owned())
    }
}

/// Histogram binning (`bins`).
#[derive(Debug, Clone, PartialEq)]
pub enum Bins {
    /// Number of equal-width bins.
    Count(usize),
    /// Explicit bin edges, including the rightmost edge.
    Edges(Vec<f64>),
    /// Name of a binning strategy such as `"auto"` or `"fd"`.
    Other(String),
}

impl ToValue for Bins {
    fn to_value(&self) -> Value {
        match self {
            Self::Count(n) => n.to_value(),
            Self::Edges(edges) => marshal::array(edges),
            Self::Other(s) => Value::Str(s.clone()),
        }
    }
}

impl From<usize> for Bins {
    fn from(n: usize) -> Self {
        Self::Count(n)
    }
}

/// Optional keywords of `hist`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistOptions {
    pub bins: Option<Bins>,
    /// Per-sample weights, same length as the data.
    pub weights: Option<Vec<f64>>,
    pub color: Option<Color>,
    pub label: Option<String>,
    pub alpha: Option<f64>,
    pub orientation: Option<Orientation>,
    pub histtype: Option<HistType>,
}

impl HistOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bins(mut self, bins: impl Into<Bins>) -> Self {
        self.bins = Some(bins.into());
        self
    }

    pub fn with_weights(mut self, weights: Vec<f64>) -> Self {
        self.weights = Some(weights);
        self
    }

    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

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

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn with_histtype(mut self, histtype: HistType) -> Self {
        self.histtype = Some(histtype);
        self
    }

    pub(crate) fn kwargs(&self) -> KeywordArgs {
        KeywordArgs::new()
            .set_opt("bins", self.bins.as_ref())
            .set_opt("weights", self.weights.as_ref())
            .set_opt("color", self.color.as_ref())
            .set_opt("label", self.label.as_ref())
            .set_opt("alpha", self.alpha)
            .set_opt("orientation", self.orientation)
            .set_opt("histtype", self.histtype)
    }
}

/// Optional keywords of `bar`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarOptions {
    pub width: Option<f64>,
    /// Baseline of the bars.
    pub bottom: Option<f64>,
    pub align: Option<Align>,
    pub color: Option<Color>,
    pub label: Option<String>,
    pub alpha: Option<f64>,
}

impl BarOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_bottom(mut self, bottom: f64) -> Self {
        self.bottom = Some(bottom);
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

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

    pub(crate) fn kwargs(&self) -> KeywordArgs {
        KeywordArgs::new()
            .set_opt("width", self.width)
            .set_opt("bottom", self.bottom)
            .set_opt("align", self.align)
            .set_opt("color", self.color.as_ref())
            .set_opt("label", self.label.as_ref())
            .set_opt("alpha", self.alpha)
    }
}

/// Optional keywords of `stairs`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StairsOptions {
    /// Step edges; one more than the number of values.
    pub edges: Option<Vec<f64>>,
    pub baseline: Option<f64>,
    /// Fill the area between the steps and the baseline.
    pub fill: Option<bool>,
    pub orientation: Option<Orientation>,
    pub color: Option<Color>,
    pub label: Option<String>,
}

impl StairsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_edges(mut self, edges: Vec<f64>) -> Self {
        self.edges = Some(edges);
        self
    }

    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = Some(baseline);
        self
    }

    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        let l = label.into();
        if !l.is_empty() {
            self.label = Some(l);
        }
        self
    }

    pub(crate) fn kwargs(&self) -> KeywordArgs {
        KeywordArgs::new()
            .set_opt("edges", self.edges.as_ref())
            .set_opt("baseline", self.baseline)
            .set_opt("fill", self.fill)
            .set_opt("orientation", self.orientation)
            .set_opt("color", self.color.as_ref())
            .set_opt("label", self.label.as_ref())
    }
}
