/// Axis scaling mode.
///
/// Picks which of pyplot's line plot entry points draws a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisScale {
    /// Linear axis.
    #[default]
    Linear,
    /// Base-10 logarithmic axis. Only positive values are representable.
    Log,
}

/// The pyplot function drawing a line on the given pair of axis scales.
pub(crate) fn line_function(x_scale: AxisScale, y_scale: AxisScale) -> &'static str {
    match (x_scale, y_scale) {
        (AxisScale::Linear, AxisScale::Linear) => "plot",
        (AxisScale::Log, AxisScale::Linear) => "semilogx",
        (AxisScale::Linear, AxisScale::Log) => "semilogy",
        (AxisScale::Log, AxisScale::Log) => "loglog",
    }
}
