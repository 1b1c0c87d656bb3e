use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "sphere-mesh")]
#[command(about = "Inspect sphere mesh files for the rolling sphere demo", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress all non-error output
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a mesh file and print its summary
    Inspect {
        /// Input mesh file
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.quiet {
        log::LevelFilter::Error
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    match cli.command {
        Commands::Inspect { input } => match sphere_mesh::load(&input) {
            Ok(mesh) => {
                if !cli.quiet {
                    println!("file:            {}", input.display());
                    println!("triangles:       {}", mesh.triangle_count());
                    println!("vertices:        {}", mesh.vertex_count());
                    println!("bounding radius: {:.4}", mesh.bounding_radius());
                }
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("{}: {}", input.display(), e);
                ExitCode::FAILURE
            }
        },
    }
}
