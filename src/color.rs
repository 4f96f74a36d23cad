use crate::value::{ToValue, Value};

/// A color accepted by pyplot's `color`, `c`, `facecolor` and `edgecolor`
/// keywords.
///
/// The named variants map to matplotlib's single-letter base colors. Anything
/// else matplotlib understands (`"tab:orange"`, `"#1f77b4"`, `"0.5"`) can be
/// passed through [`Color::Other`].
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Blue,
    Green,
    Red,
    Cyan,
    Magenta,
    Yellow,
    Black,
    White,
    /// RGB components in `0.0..=1.0`.
    Rgb(f64, f64, f64),
    /// RGBA components in `0.0..=1.0`.
    Rgba(f64, f64, f64, f64),
    /// Raw color specification, forwarded unchanged.
    Other(String),
}

impl Color {
    /// Opaque color from 8-bit components.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// A hex color such as `"#1f77b4"`, forwarded as-is.
    pub fn hex(hex: impl Into<String>) -> Self {
        Self::Other(hex.into())
    }
}

impl ToValue for Color {
    fn to_value(&self) -> Value {
        let token = match self {
            Self::Blue => "b",
            Self::Green => "g",
            Self::Red => "r",
            Self::Cyan => "c",
            Self::Magenta => "m",
            Self::Yellow => "y",
            Self::Black => "k",
            Self::White => "w",
            Self::Rgb(r, g, b) => return (*r, *g, *b).to_value(),
            Self::Rgba(r, g, b, a) => {
                return Value::Tuple(vec![
                    Value::Float(*r),
                    Value::Float(*g),
                    Value::Float(*b),
                    Value::Float(*a),
                ]);
            }
            Self::Other(s) => s.as_str(),
        };
        Value::Str(token.to_owned())
    }
}

impl From<&str> for Color {
    fn from(spec: &str) -> Self {
        Self::Other(spec.to_owned())
    }
}

#[cfg(feature = "iced")]
impl From<iced::Color> for Color {
    fn from(c: iced::Color) -> Self {
        Self::Rgba(c.r as f64, c.g as f64, c.b as f64, c.a as f64)
    }
}

/// Colormap for `imshow`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Colormap {
    #[default]
    Viridis,
    Plasma,
    Inferno,
    Magma,
    Cividis,
    Gray,
    Hot,
    Jet,
    /// Any other registered colormap name.
    Other(String),
}

impl Colormap {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Viridis => "viridis",
            Self::Plasma => "plasma",
            Self::Inferno => "inferno",
            Self::Magma => "magma",
            Self::Cividis => "cividis",
            Self::Gray => "gray",
            Self::Hot => "hot",
            Self::Jet => "jet",
            Self::Other(s) => s,
        }
    }
}

impl ToValue for Colormap {
    fn to_value(&self) -> Value {
        Value::Str(self.as_str().to_owned())
    }
}
