use crate::{
    Color,
    marshal::KeywordArgs,
    value::{ToValue, Value},
};

/// Marker shapes for line and scatter plots.
///
/// Determines the shape drawn for each data point.
#[derive(Debug, Clone, PartialEq)]
pub enum Marker {
    /// A small dot (`"."`).
    Point,
    /// A single pixel (`","`).
    Pixel,
    /// A filled circle (`"o"`).
    Circle,
    TriangleDown,
    TriangleUp,
    TriangleLeft,
    TriangleRight,
    /// A square (`"s"`).
    Square,
    Pentagon,
    /// A star shape (`"*"`).
    Star,
    Hexagon,
    Plus,
    /// A diagonal cross (`"x"`).
    Cross,
    Diamond,
    ThinDiamond,
    VLine,
    HLine,
    /// Raw marker specification, forwarded unchanged.
    Other(String),
}

impl Marker {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Point => ".",
            Self::Pixel => ",",
            Self::Circle => "o",
            Self::TriangleDown => "v",
            Self::TriangleUp => "^",
            Self::TriangleLeft => "<",
            Self::TriangleRight => ">",
            Self::Square => "s",
            Self::Pentagon => "p",
            Self::Star => "*",
            Self::Hexagon => "h",
            Self::Plus => "+",
            Self::Cross => "x",
            Self::Diamond => "D",
            Self::ThinDiamond => "d",
            Self::VLine => "|",
            Self::HLine => "_",
            Self::Other(s) => s,
        }
    }
}

impl ToValue for Marker {
    fn to_value(&self) -> Value {
        Value::Str(self.as_str().to_owned())
    }
}

/// Optional keywords of `scatter`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScatterOptions {
    /// Marker size in points squared (`s`).
    pub size: Option<f64>,
    /// Marker color (`c`).
    pub color: Option<Color>,
    pub marker: Option<Marker>,
    pub alpha: Option<f64>,
    /// Width of the marker edges (`linewidths`).
    pub linewidths: Option<f64>,
    pub label: Option<String>,
}

impl ScatterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn with_linewidths(mut self, width: f64) -> Self {
        self.linewidths = Some(width);
        self
    }

    /// Set a label for the points. Empty labels are ignored.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        let l = label.into();
        if !l.is_empty() {
            self.label = Some(l);
        }
        self
    }

    pub(crate) fn kwargs(&self) -> KeywordArgs {
        KeywordArgs::new()
            .set_opt("s", self.size)
            .set_opt("c", self.color.as_ref())
            .set_opt("marker", self.marker.as_ref())
            .set_opt("alpha", self.alpha)
            .set_opt("linewidths", self.linewidths)
            .set_opt("label", self.label.as_ref())
    }
}
