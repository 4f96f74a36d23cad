use std::rc::Rc;

use crate::{
    Backend,
    error::Result,
    marshal::KeywordArgs,
    runtime::Runtime,
    value::{ForeignObject, Value},
};

/// Top-level plotting library module.
pub const MATPLOTLIB: &str = "matplotlib";
/// The stateful plotting interface.
pub const PYPLOT: &str = "matplotlib.pyplot";
/// In-memory byte buffers used to render without touching the disk.
pub const IO: &str = "io";

/// Handle to the imported plotting modules.
///
/// Cloning is cheap and yields the same handle; use [`ModuleHandle::ptr_eq`]
/// to tell whether two handles came from the same creation.
#[derive(Debug, Clone)]
pub struct ModuleHandle {
    inner: Rc<Modules>,
}

#[derive(Debug)]
struct Modules {
    matplotlib: ForeignObject,
    pyplot: ForeignObject,
    io: ForeignObject,
    backend: Backend,
}

impl ModuleHandle {
    /// Import the plotting modules, switching to `backend` first unless it is
    /// [`Backend::Default`].
    pub(crate) fn create<R: Runtime>(runtime: &R, backend: &Backend) -> Result<Self> {
        let matplotlib = runtime.import_module(MATPLOTLIB)?;
        if let Some(name) = backend.name() {
            log::info!("using matplotlib backend {name}");
            runtime.call(
                &matplotlib,
                "use",
                &[Value::Str(name.to_owned())],
                &KeywordArgs::new(),
            )?;
        }
        let pyplot = runtime.import_module(PYPLOT)?;
        let io = runtime.import_module(IO)?;

        Ok(Self {
            inner: Rc::new(Modules {
                matplotlib,
                pyplot,
                io,
                backend: backend.clone(),
            }),
        })
    }

    /// The `matplotlib` module.
    pub fn matplotlib(&self) -> &ForeignObject {
        &self.inner.matplotlib
    }

    /// The `matplotlib.pyplot` module.
    pub fn pyplot(&self) -> &ForeignObject {
        &self.inner.pyplot
    }

    /// The `io` module.
    pub fn io(&self) -> &ForeignObject {
        &self.inner.io
    }

    /// The backend this handle was created with.
    pub fn backend(&self) -> &Backend {
        &self.inner.backend
    }

    /// Whether both handles come from the same creation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FakeRuntime;

    #[test]
    fn default_backend_skips_use() {
        let runtime = FakeRuntime::new();
        let handle = ModuleHandle::create(&runtime, &Backend::Default).unwrap();
        assert_eq!(runtime.imports(), [MATPLOTLIB, PYPLOT, IO]);
        assert!(runtime.calls().is_empty());
        assert_eq!(handle.backend(), &Backend::Default);
    }

    #[test]
    fn named_backend_is_selected_before_pyplot_import() {
        let runtime = FakeRuntime::new();
        ModuleHandle::create(&runtime, &Backend::Agg).unwrap();
        assert_eq!(runtime.call_log(), "matplotlib.use('agg')");
        assert_eq!(runtime.imports(), [MATPLOTLIB, PYPLOT, IO]);
    }

    #[test]
    fn clones_share_identity() {
        let runtime = FakeRuntime::new();
        let a = ModuleHandle::create(&runtime, &Backend::Default).unwrap();
        let b = ModuleHandle::create(&runtime, &Backend::Default).unwrap();
        assert!(a.ptr_eq(&a.clone()));
        assert!(!a.ptr_eq(&b));
    }
}
