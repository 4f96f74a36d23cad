use crate::{
    marshal::KeywordArgs,
    value::{ToValue, Value},
};

/// Placement of the legend box (`loc`).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LegendLoc {
    /// Let matplotlib pick the location with the least overlap.
    #[default]
    Best,
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
    Right,
    CenterLeft,
    CenterRight,
    LowerCenter,
    UpperCenter,
    Center,
    /// Raw location string, forwarded unchanged.
    Other(String),
}

impl LegendLoc {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Best => "best",
            Self::UpperRight => "upper right",
            Self::UpperLeft => "upper left",
            Self::LowerLeft => "lower left",
            Self::LowerRight => "lower right",
            Self::Right => "right",
            Self::CenterLeft => "center left",
            Self::CenterRight => "center right",
            Self::LowerCenter => "lower center",
            Self::UpperCenter => "upper center",
            Self::Center => "center",
            Self::Other(s) => s,
        }
    }
}

impl ToValue for LegendLoc {
    fn to_value(&self) -> Value {
        Value::Str(self.as_str().to_owned())
    }
}

/// Optional keywords of `legend`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegendOptions {
    pub loc: Option<LegendLoc>,
    /// Explicit labels, in artist order. When unset the artists' own labels are used.
    pub labels: Option<Vec<String>>,
}

impl LegendOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_loc(mut self, loc: LegendLoc) -> Self {
        self.loc = Some(loc);
        self
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub(crate) fn kwargs(&self) -> KeywordArgs {
        KeywordArgs::new()
            .set_opt("loc", self.loc.as_ref())
            .set_opt("labels", self.labels.as_ref())
    }
}
