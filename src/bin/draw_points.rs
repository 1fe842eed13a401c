//! Plots a point set and its connecting segments from standard input.
//!
//! The input is a point count, `id x y` records, an edge count and
//! `p1 p2` records. Edges are drawn in red, points as black markers,
//! and the parsed edge list is echoed to standard output before
//! rendering. The plot is written as SVG.
//!
//! ```text
//! draw-points < triangulation.txt -o triangulation.svg
//! ```

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use planeview::io::segments;
use planeview::render::{self, PlotStyle, SvgConfig};

/// Plot a point set with connecting segments from stdin as SVG.
#[derive(Parser)]
#[command(name = "draw-points", version)]
struct Cli {
    /// Output SVG path.
    #[arg(short, long, default_value = "points.svg")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let stdin = io::stdin();
    let set = segments::parse(stdin.lock()).context("reading point set from stdin")?;
    info!(
        points = set.num_points(),
        edges = set.num_edges(),
        "parsed point set"
    );

    println!("edges: {:?}", set.edges());

    let scene = render::segment_scene(&set, &PlotStyle::default())?;

    let file = File::create(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;
    render::write_svg(BufWriter::new(file), &scene, &SvgConfig::default())?;
    info!(path = %cli.output.display(), "wrote plot");

    Ok(())
}
