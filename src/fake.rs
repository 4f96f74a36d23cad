//! A scripted stand-in for the embedded interpreter.
//!
//! [`FakeRuntime`] never renders anything. It records every call it receives
//! and answers with canned values, which makes it suitable for checking how a
//! [`Session`](crate::Session) marshals its arguments.
use core::fmt;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::{
    error::{Error, Result},
    handle::{IO, PYPLOT},
    marshal::KeywordArgs,
    runtime::Runtime,
    value::{ForeignObject, Value},
};

/// A call received by a [`FakeRuntime`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    /// Name of the object the method was called on, such as
    /// `matplotlib.pyplot`, `figure`, `axes` or `buffer`.
    pub target: String,
    pub name: String,
    pub args: Vec<Value>,
    pub kwargs: KeywordArgs,
}

impl fmt::Display for RecordedCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}(", self.target, self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        if !self.args.is_empty() && !self.kwargs.is_empty() {
            f.write_str(", ")?;
        }
        write!(f, "{})", self.kwargs)
    }
}

#[derive(Debug)]
enum FakeObject {
    Module(String),
    StyleLibrary,
    Buffer(RefCell<Vec<u8>>),
    Instance(&'static str),
}

impl FakeObject {
    fn label(&self) -> String {
        match self {
            Self::Module(name) => name.clone(),
            Self::StyleLibrary => format!("{PYPLOT}.style"),
            Self::Buffer(_) => "buffer".to_owned(),
            Self::Instance(kind) => (*kind).to_owned(),
        }
    }
}

/// Recording runtime for tests.
///
/// - `io.BytesIO()` returns a buffer object.
/// - `savefig` writes the configured rendering into a buffer argument, or to
///   the file named by a string argument.
/// - `getvalue()` on a buffer returns its bytes.
/// - `gcf()`/`figure()` return a figure object, `add_subplot()`/`gca()` an axes object.
/// - `pyplot.style.available` lists the configured style names.
///
/// Every other call returns `None`. [`FakeRuntime::with_return`] and
/// [`FakeRuntime::with_attribute`] override any of these answers.
#[derive(Debug, Default)]
pub struct FakeRuntime {
    initializations: Cell<usize>,
    imports: RefCell<Vec<String>>,
    calls: RefCell<Vec<RecordedCall>>,
    rendering: Vec<u8>,
    styles: Vec<String>,
    failures: HashMap<String, (String, String)>,
    returns: HashMap<String, Value>,
    attributes: HashMap<String, Value>,
    init_failure: Option<String>,
}

impl FakeRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes that `savefig` produces.
    pub fn with_rendering(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.rendering = bytes.into();
        self
    }

    /// Style names reported by `pyplot.style.available`.
    pub fn with_styles<I, S>(mut self, styles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.styles = styles.into_iter().map(Into::into).collect();
        self
    }

    /// Make every call named `name` raise the given exception.
    pub fn fail_on(mut self, name: &str, kind: &str, message: &str) -> Self {
        self.failures
            .insert(name.to_owned(), (kind.to_owned(), message.to_owned()));
        self
    }

    /// Make every call named `name` return `value` instead of its canned answer.
    pub fn with_return(mut self, name: &str, value: Value) -> Self {
        self.returns.insert(name.to_owned(), value);
        self
    }

    /// Make every read of the attribute `name` return `value`.
    pub fn with_attribute(mut self, name: &str, value: Value) -> Self {
        self.attributes.insert(name.to_owned(), value);
        self
    }

    /// Make interpreter initialization fail.
    pub fn fail_initialization(mut self, message: &str) -> Self {
        self.init_failure = Some(message.to_owned());
        self
    }

    /// How many times [`Runtime::initialize`] ran.
    pub fn initializations(&self) -> usize {
        self.initializations.get()
    }

    /// Imported module names, in import order.
    pub fn imports(&self) -> Vec<String> {
        self.imports.borrow().clone()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    /// Recorded calls rendered Python-style, one per line.
    pub fn call_log(&self) -> String {
        self.calls
            .borrow()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn fake_object<'a>(&self, obj: &'a ForeignObject) -> Result<&'a FakeObject> {
        obj.downcast_ref::<FakeObject>().ok_or_else(|| {
            Error::foreign("TypeError", "object does not belong to this runtime")
        })
    }

    fn render_into(&self, destination: Option<&Value>) -> Result<()> {
        match destination {
            Some(Value::Object(obj)) => {
                if let FakeObject::Buffer(buf) = self.fake_object(obj)? {
                    buf.borrow_mut().extend_from_slice(&self.rendering);
                }
                Ok(())
            }
            Some(Value::Str(path)) => std::fs::write(path, &self.rendering)
                .map_err(|e| Error::foreign("OSError", e.to_string())),
            _ => Ok(()),
        }
    }
}

impl Runtime for FakeRuntime {
    fn initialize(&self) -> Result<()> {
        self.initializations.set(self.initializations.get() + 1);
        match &self.init_failure {
            Some(message) => Err(Error::Initialization(message.clone())),
            None => Ok(()),
        }
    }

    fn import_module(&self, name: &str) -> Result<ForeignObject> {
        self.imports.borrow_mut().push(name.to_owned());
        Ok(ForeignObject::new(FakeObject::Module(name.to_owned())))
    }

    fn call(
        &self,
        target: &ForeignObject,
        name: &str,
        args: &[Value],
        kwargs: &KeywordArgs,
    ) -> Result<Value> {
        let object = self.fake_object(target)?;
        self.calls.borrow_mut().push(RecordedCall {
            target: object.label(),
            name: name.to_owned(),
            args: args.to_vec(),
            kwargs: kwargs.clone(),
        });

        if let Some((kind, message)) = self.failures.get(name) {
            return Err(Error::foreign(kind.as_str(), message.as_str()));
        }
        if let Some(value) = self.returns.get(name) {
            return Ok(value.clone());
        }

        let returned = match (object, name) {
            (FakeObject::Module(module), "BytesIO") if module == IO => {
                FakeObject::Buffer(RefCell::new(Vec::new()))
            }
            (FakeObject::Buffer(buf), "getvalue") => {
                return Ok(Value::Bytes(buf.borrow().clone()));
            }
            (_, "savefig") => {
                self.render_into(args.first())?;
                return Ok(Value::None);
            }
            (_, "gcf" | "figure") => FakeObject::Instance("figure"),
            (_, "add_subplot" | "gca") => FakeObject::Instance("axes"),
            _ => return Ok(Value::None),
        };
        Ok(Value::Object(ForeignObject::new(returned)))
    }

    fn get_attr(&self, target: &ForeignObject, name: &str) -> Result<Value> {
        let object = self.fake_object(target)?;
        if let Some(value) = self.attributes.get(name) {
            return Ok(value.clone());
        }
        match (object, name) {
            (FakeObject::Module(module), "style") if module == PYPLOT => {
                Ok(Value::Object(ForeignObject::new(FakeObject::StyleLibrary)))
            }
            (FakeObject::StyleLibrary, "available") => Ok(Value::List(
                self.styles.iter().map(|s| Value::Str(s.clone())).collect(),
            )),
            _ => Err(Error::foreign(
                "AttributeError",
                format!("'{}' has no attribute '{name}'", object.label()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_display_mixes_args_and_kwargs() {
        let call = RecordedCall {
            target: "matplotlib.pyplot".into(),
            name: "hist".into(),
            args: vec![Value::List(vec![Value::Float(1.0)])],
            kwargs: KeywordArgs::new().set("bins", 3usize),
        };
        assert_eq!(call.to_string(), "matplotlib.pyplot.hist([1.0], bins=3)");
    }

    #[test]
    fn buffers_collect_savefig_output() {
        let runtime = FakeRuntime::new().with_rendering(b"PNG".to_vec());
        let io = runtime.import_module(IO).unwrap();
        let pyplot = runtime.import_module(PYPLOT).unwrap();
        let empty = KeywordArgs::new();

        let buffer = runtime.call(&io, "BytesIO", &[], &empty).unwrap();
        runtime
            .call(&pyplot, "savefig", std::slice::from_ref(&buffer), &empty)
            .unwrap();
        let buffer = buffer.as_object().unwrap();
        assert_eq!(
            runtime.call(buffer, "getvalue", &[], &empty).unwrap(),
            Value::Bytes(b"PNG".to_vec())
        );
    }

    #[test]
    fn unknown_attribute_raises() {
        let runtime = FakeRuntime::new();
        let io = runtime.import_module(IO).unwrap();
        let err = runtime.get_attr(&io, "style").unwrap_err();
        assert_eq!(err.to_string(), "AttributeError: 'io' has no attribute 'style'");
    }
}
