use glam::DVec3;
use pyplot_bridge::{
    Align, BarOptions, Bins, Color, Colormap, FakeRuntime, FigureOptions, FillOptions,
    HistOptions, Image, ImshowOptions, LegendLoc, LegendOptions, LineOptions, LineStyle, Marker,
    ScatterOptions, Session, StairsOptions, Value,
};
use rand_distr::{Distribution, Normal};

fn session() -> Session<FakeRuntime> {
    Session::new(FakeRuntime::new())
}

#[test]
fn unset_options_send_no_keywords() {
    let s = session();
    s.hist(&[1.0, 2.0], &HistOptions::new()).unwrap();
    s.bar(&[0.0], &[1.0], &BarOptions::new()).unwrap();
    s.stairs(&[1.0], &StairsOptions::new()).unwrap();
    s.scatter(&[1.0], &[2.0], &ScatterOptions::new()).unwrap();

    assert!(s.runtime().calls().iter().all(|c| c.kwargs.is_empty()));
}

#[test]
fn line_figure() {
    let s = session();
    s.figure(&FigureOptions::new().with_num(2u32).with_figsize(6.0, 4.0))
        .unwrap();
    s.plot(
        Some(&[0.0, 1.0, 2.0][..]),
        &[0.0, 1.0, 4.0],
        &LineOptions::new()
            .with_color(Color::Blue)
            .with_linewidth(2.0)
            .with_linestyle(LineStyle::DashDot)
            .with_label("squares"),
    )
    .unwrap();
    s.xlabel("x").unwrap();
    s.ylabel("x²").unwrap();
    s.title("squares").unwrap();
    s.grid(true).unwrap();
    s.xlim(0.0, 2.0).unwrap();
    s.legend(
        &LegendOptions::new()
            .with_loc(LegendLoc::UpperLeft)
            .with_labels(["squares"]),
    )
    .unwrap();

    assert_eq!(
        s.runtime().call_log(),
        "matplotlib.pyplot.figure(num=2, figsize=(6.0, 4.0))\n\
         matplotlib.pyplot.plot([0.0, 1.0, 2.0], [0.0, 1.0, 4.0], color='b', linewidth=2.0, linestyle='-.', label='squares')\n\
         matplotlib.pyplot.xlabel('x')\n\
         matplotlib.pyplot.ylabel('x²')\n\
         matplotlib.pyplot.title('squares')\n\
         matplotlib.pyplot.grid(True)\n\
         matplotlib.pyplot.xlim(0.0, 2.0)\n\
         matplotlib.pyplot.legend(loc='upper left', labels=['squares'])"
    );
}

#[test]
fn distributions() {
    let s = session();
    s.hist(
        &[1.0, 2.0, 2.5],
        &HistOptions::new()
            .with_bins(Bins::Edges(vec![0.0, 1.5, 3.0]))
            .with_color(Color::Red)
            .with_label("data"),
    )
    .unwrap();
    s.bar(
        &[0.0, 1.0],
        &[3.0, 4.0],
        &BarOptions::new().with_width(0.5).with_align(Align::Edge),
    )
    .unwrap();
    s.stairs(
        &[1.0, 2.0],
        &StairsOptions::new()
            .with_edges(vec![0.0, 1.0, 2.0])
            .with_fill(true),
    )
    .unwrap();
    s.fill_between(
        &[0.0, 1.0],
        &[0.0, 0.0],
        &[1.0, 2.0],
        &FillOptions::new().with_alpha(0.3),
    )
    .unwrap();

    assert_eq!(
        s.runtime().call_log(),
        "matplotlib.pyplot.hist([1.0, 2.0, 2.5], bins=[0.0, 1.5, 3.0], color='r', label='data')\n\
         matplotlib.pyplot.bar([0.0, 1.0], [3.0, 4.0], width=0.5, align='edge')\n\
         matplotlib.pyplot.stairs([1.0, 2.0], edges=[0.0, 1.0, 2.0], fill=True)\n\
         matplotlib.pyplot.fill_between([0.0, 1.0], [0.0, 0.0], [1.0, 2.0], alpha=0.3)"
    );
}

#[test]
fn scatter_keywords_use_short_names() {
    let s = session();
    s.scatter(
        &[1.0],
        &[2.0],
        &ScatterOptions::new()
            .with_size(10.0)
            .with_color(Color::Rgb(1.0, 0.0, 0.0))
            .with_marker(Marker::TriangleUp),
    )
    .unwrap();

    assert_eq!(
        s.runtime().call_log(),
        "matplotlib.pyplot.scatter([1.0], [2.0], s=10.0, c=(1.0, 0.0, 0.0), marker='^')"
    );
}

#[test]
fn imshow_sends_nested_rows() {
    let s = session();
    let image = Image::gray_from_bytes(2, &[0, 64, 128, 255]).unwrap();
    s.imshow(&image, &ImshowOptions::new().with_cmap(Colormap::Viridis))
        .unwrap();

    assert_eq!(
        s.runtime().call_log(),
        "matplotlib.pyplot.imshow([[0, 64], [128, 255]], cmap='viridis')"
    );
}

#[test]
fn imshow_rgb_grid() {
    let s = session();
    let image = Image::Rgb(vec![
        vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        vec![[0.0, 0.0, 1.0], [1.0, 1.0, 1.0]],
    ]);
    s.imshow(&image, &ImshowOptions::new()).unwrap();

    assert_eq!(
        s.runtime().call_log(),
        "matplotlib.pyplot.imshow([[(1.0, 0.0, 0.0), (0.0, 1.0, 0.0)], [(0.0, 0.0, 1.0), (1.0, 1.0, 1.0)]])"
    );
}

#[test]
fn foreign_exception_is_returned_not_raised() {
    let s = Session::new(FakeRuntime::new().fail_on("hist", "ValueError", "bins must be positive"));
    let err = s
        .hist(&[1.0], &HistOptions::new().with_bins(0usize))
        .unwrap_err();
    assert_eq!(err.to_string(), "ValueError: bins must be positive");

    // The session stays usable.
    s.show().unwrap();
    assert_eq!(s.runtime().calls().len(), 2);
}

#[test]
fn gaussian_cloud_in_3d() {
    let mut rng = rand::rng();
    let normal = Normal::new(0.0f64, 1.0f64).unwrap();
    let points: Vec<DVec3> = (0..1_000)
        .map(|_| {
            DVec3::new(
                normal.sample(&mut rng),
                normal.sample(&mut rng),
                normal.sample(&mut rng),
            )
        })
        .collect();

    let s = session();
    s.scatter3(&points, &ScatterOptions::new().with_size(1.0))
        .unwrap();

    let calls = s.runtime().calls();
    let scatter = calls.last().unwrap();
    assert_eq!(scatter.target, "axes");
    assert_eq!(scatter.args.len(), 3);
    for (axis, column) in scatter.args.iter().enumerate() {
        let column = column.as_sequence().unwrap();
        assert_eq!(column.len(), points.len());
        assert_eq!(column[0], Value::Float(points[0][axis]));
    }
}

#[test]
fn histogram_of_samples_keeps_sample_order() {
    let mut rng = rand::rng();
    let normal = Normal::new(10.0f64, 2.0f64).unwrap();
    let samples: Vec<f64> = (0..500).map(|_| normal.sample(&mut rng)).collect();

    let s = session();
    s.hist(&samples, &HistOptions::new().with_bins(30usize))
        .unwrap();

    let calls = s.runtime().calls();
    let expected: Vec<Value> = samples.iter().map(|&x| Value::Float(x)).collect();
    assert_eq!(calls[0].args, [Value::List(expected)]);
    assert_eq!(calls[0].kwargs.get("bins"), Some(&Value::Int(30)));
}
