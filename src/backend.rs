/// Rendering backend selection.
///
/// [`Backend::Default`] leaves matplotlib's own choice untouched (its rc
/// settings or the `MPLBACKEND` environment variable). Every other variant is
/// passed to `matplotlib.use` before pyplot is imported.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Backend {
    #[default]
    Default,
    /// Non-interactive raster backend, renders to PNG.
    Agg,
    Pdf,
    Svg,
    Ps,
    Cairo,
    TkAgg,
    QtAgg,
    WebAgg,
    /// Any other backend name, including `module://` backends.
    Other(String),
}

impl Backend {
    /// The name passed to `matplotlib.use`, or `None` for the library default.
    pub fn name(&self) -> Option<&str> {
        Some(match self {
            Self::Default => return None,
            Self::Agg => "agg",
            Self::Pdf => "pdf",
            Self::Svg => "svg",
            Self::Ps => "ps",
            Self::Cairo => "cairo",
            Self::TkAgg => "TkAgg",
            Self::QtAgg => "QtAgg",
            Self::WebAgg => "WebAgg",
            Self::Other(s) => s.as_str(),
        })
    }
}

impl From<&str> for Backend {
    fn from(name: &str) -> Self {
        Self::Other(name.to_owned())
    }
}
