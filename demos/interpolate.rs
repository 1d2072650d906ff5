use interpath::{Aesthetic, Arrow, PathRow, PathTable, StrokeParams, render_paths};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Two observed points per path; everything in between is tweened.
    let table = PathTable::from_rows(
        [Aesthetic::Colour, Aesthetic::Linewidth],
        [
            PathRow::new("wave", 0.0, 0.0).with("red").with(0.5),
            PathRow::new("wave", 1.0, 0.8).placeholder().with(None::<&str>).with(None::<f64>),
            PathRow::new("wave", 2.0, 0.0).placeholder().with(None::<&str>).with(None::<f64>),
            PathRow::new("wave", 3.0, -0.8).placeholder().with(None::<&str>).with(None::<f64>),
            PathRow::new("wave", 4.0, 0.0).with("blue").with(2.0),
            PathRow::new("base", 0.0, -1.0).with("gray").with(0.25),
            PathRow::new("base", 4.0, -1.0).with("gray").with(0.25),
        ],
    )?;

    let rendered = render_paths(&table, &StrokeParams::default().with_arrow(Arrow::default()))?;
    for notice in &rendered.notices {
        eprintln!("{:?}", miette::Report::new(notice.clone()));
    }
    print!("{}", rendered.result);
    Ok(())
}
