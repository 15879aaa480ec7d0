//! Render an attribute list to SVG on stdout.
//!
//! Usage: cargo run --example render --features tracing -- [FILE]

use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let (name, input) = match std::env::args().nth(1) {
        Some(path) => {
            let source = std::fs::read_to_string(&path)
                .map_err(|e| miette::miette!("failed to read {path}: {e}"))?;
            (path, source)
        }
        None => (
            "<demo>".to_string(),
            "tagDirection = top-right\ncornerType = trapezoid\ntagLabelText = \"NEW\"\ntagTextColor = white".to_string(),
        ),
    };

    let tag = cornertag::corner_tag_named(&name, &input)?;
    tracing::info!(direction = %tag.tag_direction(), corner = %tag.corner_type(), "built corner tag");
    print!("{}", cornertag::tag::svg::render(&tag));
    Ok(())
}
