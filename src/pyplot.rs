//! The pyplot call surface.
//!
//! Each method converts its typed arguments, calls the pyplot function of the
//! same name through the session's module handle and discards the result,
//! except where noted.
use std::path::Path;

use glam::DVec3;

use crate::{
    AxisScale, BarOptions, FigureOptions, FillOptions, HistOptions, Image, ImageFormat,
    ImshowOptions, LegendOptions, LineOptions, ScatterOptions, StairsOptions,
    axis_scale::line_function,
    error::{Error, Result},
    image::Sample,
    marshal::{KeywordArgs, array},
    runtime::Runtime,
    session::{Session, expect_object},
    value::{ToValue, Value},
};

/// Positional arguments of a line plot: `(y)` or `(x, y)`.
fn xy_args(x: Option<&[f64]>, y: &[f64]) -> Vec<Value> {
    match x {
        Some(x) => vec![array(x), array(y)],
        None => vec![array(y)],
    }
}

impl<R: Runtime> Session<R> {
    /// Create a new figure, or activate an existing one when `num` matches.
    pub fn figure(&self, options: &FigureOptions) -> Result<()> {
        self.call_pyplot("figure", &[], &options.kwargs())?;
        Ok(())
    }

    /// Line plot of `y` against `x`, or against the sample index when `x` is `None`.
    pub fn plot(&self, x: Option<&[f64]>, y: &[f64], options: &LineOptions) -> Result<()> {
        self.plot_scaled(AxisScale::Linear, AxisScale::Linear, x, y, options)
    }

    /// Line plot with a logarithmic y axis.
    pub fn semilogy(&self, x: Option<&[f64]>, y: &[f64], options: &LineOptions) -> Result<()> {
        self.plot_scaled(AxisScale::Linear, AxisScale::Log, x, y, options)
    }

    /// Line plot with a logarithmic x axis.
    pub fn semilogx(&self, x: Option<&[f64]>, y: &[f64], options: &LineOptions) -> Result<()> {
        self.plot_scaled(AxisScale::Log, AxisScale::Linear, x, y, options)
    }

    /// Line plot with logarithmic x and y axes.
    pub fn loglog(&self, x: Option<&[f64]>, y: &[f64], options: &LineOptions) -> Result<()> {
        self.plot_scaled(AxisScale::Log, AxisScale::Log, x, y, options)
    }

    /// Line plot on the given axis scales; dispatches to `plot`, `semilogx`,
    /// `semilogy` or `loglog`.
    pub fn plot_scaled(
        &self,
        x_scale: AxisScale,
        y_scale: AxisScale,
        x: Option<&[f64]>,
        y: &[f64],
        options: &LineOptions,
    ) -> Result<()> {
        self.call_pyplot(
            line_function(x_scale, y_scale),
            &xy_args(x, y),
            &options.kwargs(),
        )?;
        Ok(())
    }

    /// Fill the area between the curves `y1` and `y2`.
    pub fn fill_between(
        &self,
        x: &[f64],
        y1: &[f64],
        y2: &[f64],
        options: &FillOptions,
    ) -> Result<()> {
        self.call_pyplot(
            "fill_between",
            &[array(x), array(y1), array(y2)],
            &options.kwargs(),
        )?;
        Ok(())
    }

    /// Histogram of the samples in `x`.
    pub fn hist(&self, x: &[f64], options: &HistOptions) -> Result<()> {
        self.call_pyplot("hist", &[array(x)], &options.kwargs())?;
        Ok(())
    }

    /// 2D scatter plot.
    pub fn scatter(&self, x: &[f64], y: &[f64], options: &ScatterOptions) -> Result<()> {
        self.call_pyplot("scatter", &[array(x), array(y)], &options.kwargs())?;
        Ok(())
    }

    /// 3D scatter plot on a new 3D axes of the current figure.
    pub fn scatter3(&self, points: &[DVec3], options: &ScatterOptions) -> Result<()> {
        let handle = self.handle()?;
        let figure = self.invoke(handle.pyplot(), "gcf", &[], &KeywordArgs::new())?;
        let figure = expect_object(figure)?;
        let axes = self.invoke(
            &figure,
            "add_subplot",
            &[],
            &KeywordArgs::new().set("projection", "3d"),
        )?;
        let axes = expect_object(axes)?;

        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        let zs: Vec<f64> = points.iter().map(|p| p.z).collect();
        self.invoke(
            &axes,
            "scatter",
            &[array(&xs), array(&ys), array(&zs)],
            &options.kwargs(),
        )?;
        Ok(())
    }

    /// Bar chart with bars at `x` of the given `height`.
    pub fn bar(&self, x: &[f64], height: &[f64], options: &BarOptions) -> Result<()> {
        self.call_pyplot("bar", &[array(x), array(height)], &options.kwargs())?;
        Ok(())
    }

    /// Stepwise constant function, one step per value.
    pub fn stairs(&self, values: &[f64], options: &StairsOptions) -> Result<()> {
        self.call_pyplot("stairs", &[array(values)], &options.kwargs())?;
        Ok(())
    }

    /// Display an image or a scalar field.
    pub fn imshow<T: Sample>(&self, image: &Image<T>, options: &ImshowOptions) -> Result<()> {
        self.call_pyplot("imshow", &[image.to_value()], &options.kwargs())?;
        Ok(())
    }

    /// Place a legend on the current axes.
    pub fn legend(&self, options: &LegendOptions) -> Result<()> {
        self.call_pyplot("legend", &[], &options.kwargs())?;
        Ok(())
    }

    /// Set the label of the x axis.
    pub fn xlabel(&self, label: &str) -> Result<()> {
        self.call_pyplot("xlabel", &[label.to_value()], &KeywordArgs::new())?;
        Ok(())
    }

    /// Set the label of the y axis.
    pub fn ylabel(&self, label: &str) -> Result<()> {
        self.call_pyplot("ylabel", &[label.to_value()], &KeywordArgs::new())?;
        Ok(())
    }

    /// Set the title of the current axes.
    pub fn title(&self, title: &str) -> Result<()> {
        self.call_pyplot("title", &[title.to_value()], &KeywordArgs::new())?;
        Ok(())
    }

    /// Show or hide the grid lines of the current axes.
    pub fn grid(&self, visible: bool) -> Result<()> {
        self.call_pyplot("grid", &[Value::Bool(visible)], &KeywordArgs::new())?;
        Ok(())
    }

    /// Set the view limits of the x axis.
    pub fn xlim(&self, min: f64, max: f64) -> Result<()> {
        self.call_pyplot("xlim", &[Value::Float(min), Value::Float(max)], &KeywordArgs::new())?;
        Ok(())
    }

    /// Set the view limits of the y axis.
    pub fn ylim(&self, min: f64, max: f64) -> Result<()> {
        self.call_pyplot("ylim", &[Value::Float(min), Value::Float(max)], &KeywordArgs::new())?;
        Ok(())
    }

    /// Save the current figure to `path`.
    ///
    /// Without `format`, matplotlib infers it from the file extension.
    pub fn savefig(&self, path: impl AsRef<Path>, format: Option<ImageFormat>) -> Result<()> {
        let path = path.as_ref().to_string_lossy().into_owned();
        self.call_pyplot(
            "savefig",
            &[Value::Str(path)],
            &KeywordArgs::new().set_opt("format", format),
        )?;
        Ok(())
    }

    /// Render the current figure into memory and return the encoded image.
    pub fn plot_data(&self, format: ImageFormat) -> Result<Vec<u8>> {
        let handle = self.handle()?;
        let buffer = self.invoke(handle.io(), "BytesIO", &[], &KeywordArgs::new())?;
        let buffer = expect_object(buffer)?;
        self.invoke(
            handle.pyplot(),
            "savefig",
            &[Value::Object(buffer.clone())],
            &KeywordArgs::new().set("format", format),
        )?;
        match self.invoke(&buffer, "getvalue", &[], &KeywordArgs::new())? {
            Value::Bytes(bytes) => Ok(bytes),
            other => Err(Error::UnexpectedValue {
                expected: "bytes",
                found: other.kind().to_owned(),
            }),
        }
    }

    /// Display all open figures. Blocks on interactive backends.
    pub fn show(&self) -> Result<()> {
        self.call_pyplot("show", &[], &KeywordArgs::new())?;
        Ok(())
    }

    /// Close the current figure.
    pub fn close(&self) -> Result<()> {
        self.call_pyplot("close", &[], &KeywordArgs::new())?;
        Ok(())
    }

    /// Close every open figure.
    pub fn close_all(&self) -> Result<()> {
        self.call_pyplot("close", &["all".to_value()], &KeywordArgs::new())?;
        Ok(())
    }

    /// Names of the style sheets known to matplotlib, in library order.
    pub fn style_available(&self) -> Result<Vec<String>> {
        let handle = self.handle()?;
        let styles = self.style_module(&handle)?;
        let available = self.runtime().get_attr(&styles, "available")?;
        let Some(items) = available.as_sequence() else {
            return Err(Error::UnexpectedValue {
                expected: "list of str",
                found: available.kind().to_owned(),
            });
        };
        items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_owned).ok_or_else(|| Error::UnexpectedValue {
                    expected: "str",
                    found: item.kind().to_owned(),
                })
            })
            .collect()
    }

    /// Apply a style sheet to subsequent plots.
    pub fn style_use(&self, name: &str) -> Result<()> {
        let handle = self.handle()?;
        let styles = self.style_module(&handle)?;
        self.invoke(&styles, "use", &[name.to_value()], &KeywordArgs::new())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, FakeRuntime, LegendLoc, Marker};

    fn session() -> Session<FakeRuntime> {
        Session::new(FakeRuntime::new())
    }

    #[test]
    fn plot_without_x_sends_one_series() {
        let s = session();
        s.plot(None, &[1.0, 2.0], &LineOptions::new()).unwrap();
        assert_eq!(s.runtime().call_log(), "matplotlib.pyplot.plot([1.0, 2.0])");
    }

    #[test]
    fn plot_with_x_sends_x_first() {
        let s = session();
        s.plot(
            Some(&[0.0, 1.0][..]),
            &[5.0, 6.0],
            &LineOptions::new().with_color(Color::Black).line_dashed(),
        )
        .unwrap();
        assert_eq!(
            s.runtime().call_log(),
            "matplotlib.pyplot.plot([0.0, 1.0], [5.0, 6.0], color='k', linestyle='--')"
        );
    }

    #[test]
    fn log_variants_use_their_own_names() {
        let s = session();
        let opts = LineOptions::new();
        s.semilogy(None, &[1.0], &opts).unwrap();
        s.semilogx(None, &[1.0], &opts).unwrap();
        s.loglog(None, &[1.0], &opts).unwrap();
        let names: Vec<String> = s.runtime().calls().into_iter().map(|c| c.name).collect();
        assert_eq!(names, ["semilogy", "semilogx", "loglog"]);
    }

    #[test]
    fn scatter3_draws_on_3d_axes() {
        let s = session();
        s.scatter3(
            &[DVec3::new(1.0, 2.0, 3.0), DVec3::new(4.0, 5.0, 6.0)],
            &ScatterOptions::new().with_marker(Marker::Square),
        )
        .unwrap();
        assert_eq!(
            s.runtime().call_log(),
            "matplotlib.pyplot.gcf()\n\
             figure.add_subplot(projection='3d')\n\
             axes.scatter([1.0, 4.0], [2.0, 5.0], [3.0, 6.0], marker='s')"
        );
    }

    #[test]
    fn legend_location() {
        let s = session();
        s.legend(&LegendOptions::new().with_loc(LegendLoc::LowerLeft))
            .unwrap();
        assert_eq!(
            s.runtime().call_log(),
            "matplotlib.pyplot.legend(loc='lower left')"
        );
    }

    #[test]
    fn foreign_errors_propagate_unmodified() {
        let s = Session::new(FakeRuntime::new().fail_on(
            "fill_between",
            "ValueError",
            "operands could not be broadcast together",
        ));
        let err = s
            .fill_between(&[0.0, 1.0], &[1.0], &[2.0, 3.0], &FillOptions::new())
            .unwrap_err();
        match err {
            Error::Foreign { kind, message } => {
                assert_eq!(kind, "ValueError");
                assert_eq!(message, "operands could not be broadcast together");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn close_all_passes_all() {
        let s = session();
        s.close_all().unwrap();
        assert_eq!(s.runtime().call_log(), "matplotlib.pyplot.close('all')");
    }
}
