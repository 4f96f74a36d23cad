use glam::DVec3;
use pyplot_bridge::{
    Backend, Color, HistOptions, HistType, ImageFormat, Marker, PythonRuntime, ScatterOptions,
    Session,
};
use rand_distr::{Distribution, Normal};

fn main() -> pyplot_bridge::Result<()> {
    let session = Session::new(PythonRuntime::new());
    session.set_backend(Backend::Agg)?;

    // 3D Gaussian cloud
    let mut rng = rand::rng();
    let normal = Normal::new(0.0f64, 1.0f64).unwrap();
    let points: Vec<DVec3> = (0..20_000)
        .map(|_| {
            DVec3::new(
                normal.sample(&mut rng),
                normal.sample(&mut rng),
                normal.sample(&mut rng),
            )
        })
        .collect();

    session.scatter3(
        &points,
        &ScatterOptions::new()
            .with_size(0.5)
            .with_marker(Marker::Point)
            .with_color(Color::from_rgb8(51, 153, 255)),
    )?;
    let cloud = session.plot_data(ImageFormat::Png)?;
    println!("rendered cloud: {} bytes of PNG", cloud.len());
    session.close()?;

    let radii: Vec<f64> = points.iter().map(|p| p.length()).collect();
    session.hist(
        &radii,
        &HistOptions::new()
            .with_bins(80usize)
            .with_histtype(HistType::StepFilled),
    )?;
    std::fs::write("radii.png", session.plot_data(ImageFormat::Png)?)
        .map_err(|e| pyplot_bridge::Error::foreign("OSError", e.to_string()))?;
    println!("wrote radii.png");
    Ok(())
}
