use clap::Subcommand;
use std::path::PathBuf;

pub mod map;
pub mod resolve;

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve numeric catalogue cross-references to filenames
    Resolve {
        /// Catalogue file with numeric cross-references
        #[arg(short, long, default_value = "output/temp1_indices.json")]
        source: PathBuf,

        /// Resolved catalogue output file
        #[arg(short, long, default_value = "output/temp2_filename.json")]
        destination: PathBuf,
    },

    /// Build books.json and tpo_map.json from a resolved catalogue
    Map {
        /// Resolved catalogue file
        #[arg(short, long, default_value = "output/temp2_filename.json")]
        source: PathBuf,

        /// Output directory for the generated artifacts
        #[arg(short, long, default_value = "output")]
        destination: PathBuf,

        /// Leave nav-path titles out of the map entries
        #[arg(long)]
        skip_titles: bool,

        /// Display script for nav paths
        #[arg(short, long, default_value = "ro")]
        target_script: String,
    },
}

impl Commands {
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Resolve { source, destination } => {
                resolve::execute(source, destination)
            }
            Commands::Map { source, destination, skip_titles, target_script } => {
                map::execute(source, destination, *skip_titles, target_script)
            }
        }
    }
}
