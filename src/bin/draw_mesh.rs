//! Plots a planar subdivision read from standard input.
//!
//! The input is a DCEL dump: a `V A F` header, `V` vertex coordinates,
//! `F` face records and `2*A` half-edge records. Each face is filled
//! with a random pastel, its label point marked in red, and every
//! half-edge drawn as a black segment. The plot is written as SVG.
//!
//! ```text
//! draw-mesh < subdivision.txt -o subdivision.svg
//! ```

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use planeview::io::subdivision;
use planeview::render::{self, Palette, PlotStyle, SvgConfig};

/// Plot a planar subdivision (DCEL dump) from stdin as SVG.
#[derive(Parser)]
#[command(name = "draw-mesh", version)]
struct Cli {
    /// Output SVG path.
    #[arg(short, long, default_value = "mesh.svg")]
    output: PathBuf,

    /// Seed for the face fill colors (random when omitted).
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let stdin = io::stdin();
    let sub = subdivision::parse(stdin.lock()).context("reading subdivision from stdin")?;
    info!(
        vertices = sub.num_vertices(),
        faces = sub.num_faces(),
        half_edges = sub.num_half_edges(),
        "parsed subdivision"
    );

    let style = PlotStyle::default();
    let scene = match cli.seed {
        Some(seed) => render::subdivision_scene(&sub, &mut Palette::seeded(seed), &style)?,
        None => render::subdivision_scene(&sub, &mut Palette::new(), &style)?,
    };

    let file = File::create(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;
    render::write_svg(BufWriter::new(file), &scene, &SvgConfig::default())?;
    info!(path = %cli.output.display(), "wrote plot");

    Ok(())
}
