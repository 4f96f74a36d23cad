//! The boundary to the embedded scripting runtime.
//!
//! Everything above this trait is runtime agnostic: a [`Session`](crate::Session)
//! only ever imports modules, calls methods on foreign objects and reads their
//! attributes.
use crate::{
    error::Result,
    marshal::KeywordArgs,
    value::{ForeignObject, Value},
};

/// An embedded interpreter able to run pyplot.
///
/// Implementations:
/// - [`PythonRuntime`](crate::PythonRuntime) (feature `python`) drives a real
///   CPython interpreter through pyo3.
/// - [`FakeRuntime`](crate::FakeRuntime) records calls and answers with canned
///   values.
pub trait Runtime {
    /// Start the interpreter and restore the default SIGINT disposition.
    ///
    /// Called at most once per [`Session`](crate::Session); implementations
    /// backed by a process-wide interpreter must tolerate repeated calls from
    /// different sessions.
    fn initialize(&self) -> Result<()>;

    /// Import a module by its dotted name.
    fn import_module(&self, name: &str) -> Result<ForeignObject>;

    /// Call the method `name` of `target` with positional and keyword arguments.
    fn call(
        &self,
        target: &ForeignObject,
        name: &str,
        args: &[Value],
        kwargs: &KeywordArgs,
    ) -> Result<Value>;

    /// Read the attribute `name` of `target`.
    fn get_attr(&self, target: &ForeignObject, name: &str) -> Result<Value>;
}
