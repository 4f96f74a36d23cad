use std::cell::RefCell;

use crate::{
    Backend,
    error::Result,
    handle::ModuleHandle,
    lifecycle::Lifecycle,
    marshal::KeywordArgs,
    runtime::Runtime,
    session_builder::SessionBuilder,
    value::{ForeignObject, Value},
};

/// A plotting context bound to one runtime.
///
/// The session owns the runtime, remembers whether it has been initialized and
/// caches the handle to the plotting modules. The handle is created lazily on
/// the first plotting call, or eagerly by [`Session::set_backend`], which
/// replaces any existing one.
///
/// Sessions are not `Send`: every call must happen on the thread that owns the
/// embedded interpreter.
pub struct Session<R: Runtime> {
    runtime: R,
    lifecycle: Lifecycle,
    handle: RefCell<Option<ModuleHandle>>,
    pub(crate) default_backend: Backend,
    pub(crate) style: Option<String>,
}

impl<R: Runtime> Session<R> {
    /// Create a session using matplotlib's default backend.
    pub fn new(runtime: R) -> Self {
        SessionBuilder::new().build(runtime)
    }

    pub(crate) fn from_parts(runtime: R, default_backend: Backend, style: Option<String>) -> Self {
        Self {
            runtime,
            lifecycle: Lifecycle::default(),
            handle: RefCell::new(None),
            default_backend,
            style,
        }
    }

    /// The runtime this session drives.
    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    /// Initialize the runtime if that has not happened yet.
    pub fn ensure_ready(&self) -> Result<()> {
        self.lifecycle.ensure_ready(&self.runtime)
    }

    /// The cached module handle, created with the default backend on first use.
    pub fn handle(&self) -> Result<ModuleHandle> {
        if let Some(handle) = self.handle.borrow().clone() {
            return Ok(handle);
        }
        let handle = self.create_handle(&self.default_backend)?;
        *self.handle.borrow_mut() = Some(handle.clone());
        Ok(handle)
    }

    /// Create a fresh handle on `backend` and make it the cached one.
    ///
    /// Every later [`Session::handle`] returns this handle until the next call.
    pub fn set_backend(&self, backend: Backend) -> Result<ModuleHandle> {
        let handle = self.create_handle(&backend)?;
        *self.handle.borrow_mut() = Some(handle.clone());
        Ok(handle)
    }

    /// Whether the runtime has been initialized successfully.
    pub fn is_initialized(&self) -> bool {
        self.lifecycle.is_ready()
    }

    /// Whether a module handle is currently cached.
    pub fn has_handle(&self) -> bool {
        self.handle.borrow().is_some()
    }

    fn create_handle(&self, backend: &Backend) -> Result<ModuleHandle> {
        self.ensure_ready()?;
        let handle = ModuleHandle::create(&self.runtime, backend)?;
        if let Some(style) = &self.style {
            log::debug!("applying style {style}");
            let styles = self.style_module(&handle)?;
            self.invoke(
                &styles,
                "use",
                &[Value::Str(style.clone())],
                &KeywordArgs::new(),
            )?;
        }
        Ok(handle)
    }

    /// `pyplot.style`, the style library.
    pub(crate) fn style_module(&self, handle: &ModuleHandle) -> Result<ForeignObject> {
        let style = self.runtime.get_attr(handle.pyplot(), "style")?;
        expect_object(style)
    }

    /// Call a pyplot function through the cached handle.
    pub(crate) fn call_pyplot(
        &self,
        name: &str,
        args: &[Value],
        kwargs: &KeywordArgs,
    ) -> Result<Value> {
        let handle = self.handle()?;
        self.invoke(handle.pyplot(), name, args, kwargs)
    }

    pub(crate) fn invoke(
        &self,
        target: &ForeignObject,
        name: &str,
        args: &[Value],
        kwargs: &KeywordArgs,
    ) -> Result<Value> {
        log::debug!(
            "calling {name} with {} positional and {} keyword arguments",
            args.len(),
            kwargs.len()
        );
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("{name} keywords: {:?}", kwargs.keys().collect::<Vec<_>>());
        }
        self.runtime.call(target, name, args, kwargs)
    }
}

pub(crate) fn expect_object(value: Value) -> Result<ForeignObject> {
    match value {
        Value::Object(obj) => Ok(obj),
        other => Err(crate::Error::UnexpectedValue {
            expected: "object",
            found: other.kind().to_owned(),
        }),
    }
}
