use crate::{
    Color,
    marshal::KeywordArgs,
    value::{ToValue, Value},
};

/// Identifier of a figure (`num`): either its number or its window title.
#[derive(Debug, Clone, PartialEq)]
pub enum FigureNum {
    Index(u32),
    Name(String),
}

impl ToValue for FigureNum {
    fn to_value(&self) -> Value {
        match self {
            Self::Index(i) => i.to_value(),
            Self::Name(s) => Value::Str(s.clone()),
        }
    }
}

impl From<u32> for FigureNum {
    fn from(i: u32) -> Self {
        Self::Index(i)
    }
}

impl From<&str> for FigureNum {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

/// Optional keywords of `figure`.
///
/// # Example
///
/// ```ignore
/// session.figure(
///     FigureOptions::new()
///         .with_figsize(8.0, 4.5)
///         .with_dpi(150.0)
///         .with_facecolor(Color::White),
/// )?;
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FigureOptions {
    /// Reuse or create the figure with this identifier.
    pub num: Option<FigureNum>,
    /// Width and height in inches.
    pub figsize: Option<(f64, f64)>,
    pub dpi: Option<f64>,
    pub facecolor: Option<Color>,
    pub edgecolor: Option<Color>,
    /// Draw the figure frame.
    pub frameon: Option<bool>,
    /// Clear an existing figure with the same `num`.
    pub clear: Option<bool>,
}

impl FigureOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_num(mut self, num: impl Into<FigureNum>) -> Self {
        self.num = Some(num.into());
        self
    }

    pub fn with_figsize(mut self, width: f64, height: f64) -> Self {
        self.figsize = Some((width, height));
        self
    }

    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = Some(dpi);
        self
    }

    pub fn with_facecolor(mut self, color: impl Into<Color>) -> Self {
        self.facecolor = Some(color.into());
        self
    }

    pub fn with_edgecolor(mut self, color: impl Into<Color>) -> Self {
        self.edgecolor = Some(color.into());
        self
    }

    pub fn with_frameon(mut self, frameon: bool) -> Self {
        self.frameon = Some(frameon);
        self
    }

    pub fn with_clear(mut self, clear: bool) -> Self {
        self.clear = Some(clear);
        self
    }

    pub(crate) fn kwargs(&self) -> KeywordArgs {
        KeywordArgs::new()
            .set_opt("num", self.num.as_ref())
            .set_opt("figsize", self.figsize)
            .set_opt("dpi", self.dpi)
            .set_opt("facecolor", self.facecolor.as_ref())
            .set_opt("edgecolor", self.edgecolor.as_ref())
            .set_opt("frameon", self.frameon)
            .set_opt("clear", self.clear)
    }
}

/// Encoding of an in-memory rendering produced by
/// [`Session::plot_data`](crate::Session::plot_data).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    #[default]
    Png,
    Jpg,
}

impl ImageFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
        }
    }
}

impl ToValue for ImageFormat {
    fn to_value(&self) -> Value {
        Value::Str(self.as_str().to_owned())
    }
}
