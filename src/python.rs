//! CPython runtime through pyo3.
use once_cell::sync::OnceCell;
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyBytes, PyDict, PyFloat, PyList, PyLong, PyString, PyTuple};

use crate::{
    error::{Error, Result},
    marshal::KeywordArgs,
    runtime::Runtime,
    value::{ForeignObject, Value},
};

/// Process-wide: the interpreter is started once, whatever the number of sessions.
static INTERPRETER: OnceCell<()> = OnceCell::new();

/// The embedded CPython interpreter.
///
/// Requires a Python installation with matplotlib available at run time.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonRuntime;

impl PythonRuntime {
    pub fn new() -> Self {
        Self
    }
}

/// CPython installs its own SIGINT handler on startup, which would turn Ctrl-C
/// into a `KeyboardInterrupt` that the host never sees.
fn restore_default_sigint(py: Python<'_>) -> PyResult<()> {
    let signal = py.import_bound("signal")?;
    let sigint = signal.getattr("SIGINT")?;
    let default = signal.getattr("SIG_DFL")?;
    signal.call_method1("signal", (sigint, default))?;
    Ok(())
}

fn bound<'py>(py: Python<'py>, obj: &ForeignObject) -> Result<Bound<'py, PyAny>> {
    obj.downcast_ref::<PyObject>()
        .map(|o| o.bind(py).clone())
        .ok_or_else(|| Error::UnexpectedValue {
            expected: "Python object",
            found: "object of another runtime".to_owned(),
        })
}

fn to_python(py: Python<'_>, value: &Value) -> Result<PyObject> {
    Ok(match value {
        Value::None => py.None(),
        Value::Bool(b) => (*b).into_py(py),
        Value::Int(i) => (*i).into_py(py),
        Value::Float(x) => (*x).into_py(py),
        Value::Str(s) => s.as_str().into_py(py),
        Value::Bytes(b) => PyBytes::new_bound(py, b).into_any().unbind(),
        Value::Tuple(items) => {
            let items = items
                .iter()
                .map(|v| to_python(py, v))
                .collect::<Result<Vec<_>>>()?;
            PyTuple::new_bound(py, items).into_any().unbind()
        }
        Value::List(items) => {
            let items = items
                .iter()
                .map(|v| to_python(py, v))
                .collect::<Result<Vec<_>>>()?;
            PyList::new_bound(py, items).into_any().unbind()
        }
        Value::Object(obj) => bound(py, obj)?.unbind(),
    })
}

fn from_python(obj: &Bound<'_, PyAny>) -> Result<Value> {
    if obj.is_none() {
        return Ok(Value::None);
    }
    // bool is a subclass of int, check it first.
    if let Ok(b) = obj.downcast::<PyBool>() {
        return Ok(Value::Bool(b.is_true()));
    }
    if obj.is_instance_of::<PyLong>() {
        if let Ok(i) = obj.extract::<i64>() {
            return Ok(Value::Int(i));
        }
    } else if let Ok(x) = obj.downcast::<PyFloat>() {
        return Ok(Value::Float(x.value()));
    } else if obj.is_instance_of::<PyString>() {
        return Ok(Value::Str(obj.extract::<String>()?));
    } else if let Ok(bytes) = obj.downcast::<PyBytes>() {
        return Ok(Value::Bytes(bytes.as_bytes().to_vec()));
    } else if let Ok(list) = obj.downcast::<PyList>() {
        let items = list
            .iter()
            .map(|item| from_python(&item))
            .collect::<Result<Vec<_>>>()?;
        return Ok(Value::List(items));
    } else if let Ok(tuple) = obj.downcast::<PyTuple>() {
        let items = tuple
            .iter()
            .map(|item| from_python(&item))
            .collect::<Result<Vec<_>>>()?;
        return Ok(Value::Tuple(items));
    }
    Ok(Value::Object(ForeignObject::new(obj.clone().unbind())))
}

impl Runtime for PythonRuntime {
    fn initialize(&self) -> Result<()> {
        INTERPRETER.get_or_try_init(|| -> Result<()> {
            pyo3::prepare_freethreaded_python();
            Python::with_gil(|py| {
                let version = py.version();
                log::info!("embedded Python {version} ready");
                if let Err(err) = restore_default_sigint(py) {
                    log::warn!("could not restore default SIGINT handler: {err}");
                }
            });
            Ok(())
        })?;
        Ok(())
    }

    fn import_module(&self, name: &str) -> Result<ForeignObject> {
        Python::with_gil(|py| {
            let module = py.import_bound(name)?;
            Ok(ForeignObject::new(module.into_any().unbind()))
        })
    }

    fn call(
        &self,
        target: &ForeignObject,
        name: &str,
        args: &[Value],
        kwargs: &KeywordArgs,
    ) -> Result<Value> {
        Python::with_gil(|py| {
            let target = bound(py, target)?;
            let args = args
                .iter()
                .map(|v| to_python(py, v))
                .collect::<Result<Vec<_>>>()?;
            let args = PyTuple::new_bound(py, args);
            let dict = PyDict::new_bound(py);
            for (key, value) in kwargs.iter() {
                dict.set_item(key, to_python(py, value)?)?;
            }
            let result = target.getattr(name)?.call(args, Some(&dict))?;
            from_python(&result)
        })
    }

    fn get_attr(&self, target: &ForeignObject, name: &str) -> Result<Value> {
        Python::with_gil(|py| {
            let target = bound(py, target)?;
            from_python(&target.getattr(name)?)
        })
    }
}
