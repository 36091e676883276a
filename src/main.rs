// main.rs
//
// Command-line driver: generate a gear/rack or a tabbed box and write it as SVG
// (and optionally DXF). `RUST_LOG=debug` shows what the generators produce.

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use cutpath::document::{Document, Style, cut_style};
use cutpath::float_types::Real;
use cutpath::layout::{DEFAULT_COLUMNS, arrange};
use cutpath::settings::JobFile;
use cutpath::{BoxConfig, GearConfig, Polyline, generate_box_faces, generate_gear_profile};

const CUT_CLASS: &str = "cut";

#[derive(Parser, Debug)]
#[command(name = "cutpath", version, about = "Cut-paths for laser-cut gears and tabbed boxes")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Flat-faceted gear, or a rack with --rack
    Gear(GearArgs),
    /// The six panels of a tabbed box
    #[command(name = "box")]
    TabbedBox(BoxArgs),
    /// Everything described by a TOML job file
    Job {
        /// path to the job file
        file: PathBuf,
    },
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// SVG file to write
    #[arg(short, long)]
    output: PathBuf,
    /// also write a DXF with the same stem
    #[arg(long)]
    dxf: bool,
    /// gap between laid-out parts
    #[arg(long, default_value_t = 100.0)]
    spacing: Real,
}

#[derive(Args, Debug)]
struct GearArgs {
    #[arg(long, default_value_t = 24)]
    teeth: usize,
    #[arg(long, default_value_t = 150.0)]
    depth: Real,
    /// pitch circumference (gear) or pitch-line length (rack)
    #[arg(long, default_value_t = 6000.0)]
    stroke: Real,
    /// share of each tooth period spent on flats, in [0, 1)
    #[arg(long, default_value_t = 0.3)]
    top_fraction: Real,
    /// lay the teeth out along a straight rack
    #[arg(long)]
    rack: bool,
    #[command(flatten)]
    out: OutputArgs,
}

#[derive(Args, Debug)]
struct BoxArgs {
    /// outer extents along x, y and z
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], default_values_t = [6000.0, 7000.0, 8000.0])]
    size: Vec<Real>,
    /// edge length per tab
    #[arg(long, default_value_t = 500.0)]
    pitch: Real,
    #[arg(long, default_value_t = 125.0)]
    thickness: Real,
    #[arg(long, default_value_t = 0.5)]
    tab_fraction: Real,
    /// signed fit adjustment
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    tolerance: Real,
    /// leave the top panel untabbed
    #[arg(long)]
    door: bool,
    #[command(flatten)]
    out: OutputArgs,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Gear(args) => {
            let config = GearConfig {
                num_teeth: args.teeth,
                tooth_depth: args.depth,
                stroke_length: args.stroke,
                tooth_top_fraction: args.top_fraction,
                circular: !args.rack,
            };
            let parts = vec![generate_gear_profile(&config)?];
            write_parts(&parts, &args.out.output, args.out.dxf, args.out.spacing, &Style::new())
        },
        Command::TabbedBox(args) => {
            let box_size: [Real; 3] = args
                .size
                .as_slice()
                .try_into()
                .map_err(|_| "--size takes exactly three values")?;
            let config = BoxConfig {
                box_size,
                thou_per_tab: args.pitch,
                material_thickness: args.thickness,
                tab_fraction: args.tab_fraction,
                tab_tolerance: args.tolerance,
                door: args.door,
            };
            let parts = box_parts(&config)?;
            write_parts(&parts, &args.out.output, args.out.dxf, args.out.spacing, &Style::new())
        },
        Command::Job { file } => {
            let job = JobFile::load(&file)?;
            let mut parts = Vec::new();
            if let Some(gear) = &job.gear {
                parts.push(generate_gear_profile(gear)?);
            }
            if let Some(tabbed_box) = &job.tabbed_box {
                parts.extend(box_parts(tabbed_box)?);
            }
            write_parts(&parts, &job.output, job.dxf, job.spacing, &job.style)
        },
    }
}

fn box_parts(config: &BoxConfig) -> Result<Vec<Polyline>, Box<dyn Error>> {
    let faces = generate_box_faces(config)?;
    for face in &faces {
        log::info!(
            "{} panel {:.3} x {:.3}",
            face.name,
            face.bounds.width(),
            face.bounds.height()
        );
    }
    Ok(faces.into_iter().map(|face| face.polyline).collect())
}

fn write_parts(
    parts: &[Polyline],
    output: &Path,
    dxf: bool,
    spacing: Real,
    style: &Style,
) -> Result<(), Box<dyn Error>> {
    let arranged = arrange(parts, spacing, DEFAULT_COLUMNS);
    let document = arranged.iter().fold(
        Document::new(cut_style()).with_class(CUT_CLASS, style.clone()),
        |document, part| document.with_polyline(part, CUT_CLASS),
    );
    cutpath::io::save_svg(output, &document)?;

    if dxf {
        #[cfg(feature = "dxf-io")]
        cutpath::io::save_dxf(output.with_extension("dxf"), &arranged)?;
        #[cfg(not(feature = "dxf-io"))]
        log::warn!("built without the dxf-io feature, skipping DXF output");
    }
    Ok(())
}
