//! Typed bindings to matplotlib's pyplot.
//!
//! - Every pyplot call takes typed, individually optional keywords; unset
//!   options are never sent
//! - Closed vocabularies for colors, line styles, markers, legend locations,
//!   backends and friends, each with a raw escape hatch
//! - The interpreter sits behind the [`Runtime`] trait: [`PythonRuntime`]
//!   (feature `python`) embeds CPython, [`FakeRuntime`] records calls for tests
//!
//! Quick start:
//!
//! ```
//! use pyplot_bridge::{
//!     Color, FakeRuntime, ImageFormat, LegendLoc, LegendOptions, LineOptions, Session,
//! };
//!
//! let session = Session::new(FakeRuntime::new().with_rendering(b"\x89PNG".to_vec()));
//!
//! let x: Vec<f64> = (0..100).map(|i| i as f64 / 10.0).collect();
//! let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();
//! session.plot(
//!     Some(x.as_slice()),
//!     &y,
//!     &LineOptions::new().with_color(Color::Red).with_label("sin"),
//! )?;
//! session.legend(&LegendOptions::new().with_loc(LegendLoc::UpperRight))?;
//!
//! let png = session.plot_data(ImageFormat::Png)?;
//! assert_eq!(png, b"\x89PNG");
//! # Ok::<(), pyplot_bridge::Error>(())
//! ```
//!
//! Swap [`FakeRuntime`] for `PythonRuntime::new()` to draw for real.
pub mod backend;
pub mod bars;
pub mod color;
pub mod error;
pub mod fake;
pub mod figure;
pub mod handle;
pub mod image;
pub mod legend;
pub mod marker;
pub mod marshal;
#[cfg(feature = "python")]
pub mod python;
pub mod runtime;
pub mod series;
pub mod session;
pub mod session_builder;
pub mod value;

pub(crate) mod axis_scale;
pub(crate) mod fill;
pub(crate) mod lifecycle;
pub(crate) mod pyplot;

// Re-exports of public types.
pub use axis_scale::AxisScale;
pub use backend::Backend;
pub use bars::{Align, BarOptions, Bins, HistOptions, HistType, Orientation, StairsOptions};
pub use color::{Color, Colormap};
pub use error::{Error, Result};
pub use fake::{FakeRuntime, RecordedCall};
pub use figure::{FigureNum, FigureOptions, ImageFormat};
pub use fill::FillOptions;
pub use handle::ModuleHandle;
pub use image::{Image, ImshowOptions, Sample};
pub use legend::{LegendLoc, LegendOptions};
pub use marker::{Marker, ScatterOptions};
pub use marshal::KeywordArgs;
#[cfg(feature = "python")]
pub use python::PythonRuntime;
pub use runtime::Runtime;
pub use series::{LineOptions, LineStyle};
pub use session::Session;
pub use session_builder::SessionBuilder;
pub use value::{ForeignObject, ToValue, Value};
