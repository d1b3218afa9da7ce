//! Cable Section CLI
//!
//! Usage:
//!   cable-section [OPTIONS] [FILE]
//!
//! Options:
//!   -p, --palette <FILE>  Palette file with color aliases and gradients (TOML format)
//!   -o, --output <FILE>   Write output to a file instead of stdout
//!   -l, --lint            Print layout lint warnings to stderr
//!   --dump                Print the computed primitives as JSON instead of SVG
//!   -d, --debug           Log computed radii and placements
//!   --compact             Single-line SVG without XML declaration
//!   -h, --help            Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cable_section::{compute_layout, render_with_lint, Palette, RenderConfig, RenderError, SvgConfig};

#[derive(Parser)]
#[command(name = "cable-section")]
#[command(about = "Cross-section drawings of cable constructions")]
struct Cli {
    /// Input JSON description (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Palette file merged over the built-in palette (TOML format)
    #[arg(short, long)]
    palette: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print layout lint warnings to stderr
    #[arg(short, long)]
    lint: bool,

    /// Print the computed primitives as JSON instead of SVG
    #[arg(long)]
    dump: bool,

    /// Debug logging of the layout computation
    #[arg(short, long)]
    debug: bool,

    /// Emit SVG without indentation or XML declaration
    #[arg(long)]
    compact: bool,
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load palette
    let palette = match &cli.palette {
        Some(path) => match Palette::from_file(path) {
            Ok(p) => Palette::default().merge(p),
            Err(e) => {
                eprintln!("Error loading palette '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Palette::default(),
    };

    // Read input
    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let svg_config = if cli.compact {
        SvgConfig::compact()
    } else {
        SvgConfig::default()
    };
    let config = RenderConfig::new()
        .with_palette(palette)
        .with_svg(svg_config);

    let output = if cli.dump {
        compute_layout(&source, &config).map(|result| {
            serde_json::to_string_pretty(&result).unwrap_or_else(|e| {
                eprintln!("Error serializing layout: {}", e);
                std::process::exit(1);
            })
        })
    } else {
        render_with_lint(&source, config).map(|(svg, warnings)| {
            if cli.lint {
                for warning in &warnings {
                    eprintln!("warning: {}", warning);
                }
            }
            svg
        })
    };

    let output = match output {
        Ok(output) => output,
        Err(RenderError::Parse(e)) => {
            eprint!("{}", e.format(&source, &filename));
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, format!("{}\n", output)) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => println!("{}", output),
    }
}

fn print_intro() {
    println!(
        r#"Cable Section - cross-section drawings of cable constructions

USAGE:
    cable-section [OPTIONS] [FILE]
    echo '<json>' | cable-section

OPTIONS:
    -p, --palette      Custom color aliases and gradients (TOML file)
    -o, --output       Output file
    -l, --lint         Report overlapping wires and out-of-view primitives
    --dump             Print primitives as JSON instead of SVG
    -d, --debug        Log computed radii and placements
    --compact          Single-line SVG without XML declaration
    -h, --help         Print help

QUICK START:
    echo '{{"processName": "Stranding", "wirediameter": 2.62, "wirelayers": [1, 6, 12]}}' | cable-section > strand.svg

This draws a 19-wire round conductor. processName is one of WireDrawing,
Stranding, Insulating, Laying, Bedding, Armouring, Sheathing."#
    );
}
