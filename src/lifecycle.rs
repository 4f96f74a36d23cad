use once_cell::unsync::OnceCell;

use crate::{error::Result, runtime::Runtime};

/// Tracks whether the runtime behind a session has been initialized.
///
/// A failed initialization is not remembered, so the next call retries.
#[derive(Debug, Default)]
pub(crate) struct Lifecycle {
    ready: OnceCell<()>,
}

impl Lifecycle {
    pub(crate) fn ensure_ready<R: Runtime>(&self, runtime: &R) -> Result<()> {
        self.ready.get_or_try_init(|| {
            log::info!("initializing embedded interpreter");
            runtime.initialize()
        })?;
        Ok(())
    }

    pub(crate) fn is_ready(&self) -> bool {
        self.ready.get().is_some()
    }
}
