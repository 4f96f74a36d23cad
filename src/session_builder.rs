use crate::{Backend, runtime::Runtime, session::Session};

/// Builder for configuring and constructing a [`Session`].
///
/// All settings have sensible defaults: matplotlib's own backend choice and
/// its default style.
///
/// # Example
///
/// ```ignore
/// let session = SessionBuilder::new()
///     .with_backend(Backend::Agg)
///     .with_style("seaborn-v0_8")
///     .build(PythonRuntime::new());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SessionBuilder {
    backend: Option<Backend>,
    style: Option<String>,
}

impl SessionBuilder {
    /// Create a new SessionBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend used when the module handle is created lazily.
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Style sheet applied every time a module handle is created.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        let s = style.into();
        if !s.is_empty() {
            self.style = Some(s);
        }
        self
    }

    /// Build the session. Nothing is initialized until the first call.
    pub fn build<R: Runtime>(self, runtime: R) -> Session<R> {
        Session::from_parts(runtime, self.backend.unwrap_or_default(), self.style)
    }
}
