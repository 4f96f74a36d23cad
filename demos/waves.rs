use pyplot_bridge::{
    Backend, Color, FillOptions, LegendLoc, LegendOptions, LineOptions, PythonRuntime,
    SessionBuilder,
};

fn main() -> pyplot_bridge::Result<()> {
    let session = SessionBuilder::new()
        .with_backend(Backend::Agg)
        .with_style("ggplot")
        .build(PythonRuntime::new());

    let xs: Vec<f64> = (0..500).map(|i| i as f64 * 0.02).collect();
    let sin: Vec<f64> = xs.iter().map(|x| x.sin()).collect();
    let cos: Vec<f64> = xs.iter().map(|x| x.cos()).collect();

    session.plot(
        Some(xs.as_slice()),
        &sin,
        &LineOptions::new().with_color(Color::Blue).with_label("sin"),
    )?;
    session.plot(
        Some(xs.as_slice()),
        &cos,
        &LineOptions::new()
            .with_color(Color::Red)
            .line_dashed()
            .with_label("cos"),
    )?;
    session.fill_between(&xs, &sin, &cos, &FillOptions::new().with_alpha(0.2))?;
    session.title("waves")?;
    session.legend(&LegendOptions::new().with_loc(LegendLoc::UpperRight))?;

    session.savefig("waves.png", None)?;
    println!("wrote waves.png");
    Ok(())
}
