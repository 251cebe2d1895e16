use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use commands::{export, serve};

use crate::config::{Settings, SettingsOverrides};

#[derive(Parser)]
#[command(name = "inclusion-dashboard")]
#[command(about = "Financial inclusion dashboard: web server and data export")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Directory holding the processed CSV files
        ///
        /// Relative paths are resolved against the working directory.
        /// Defaults to data/processed, or DASHBOARD_DATA_DIR when set.
        #[arg(short, long)]
        data_dir: Option<PathBuf>,

        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long)]
        bind_address: Option<String>,
    },
    /// Write the dataset and forecast CSV downloads to a directory
    ///
    /// Produces exactly the bytes the download buttons serve, under the
    /// original file names.
    Export {
        /// Output directory (created if missing)
        #[arg(short, long)]
        out: PathBuf,

        /// Directory holding the processed CSV files
        #[arg(short, long)]
        data_dir: Option<PathBuf>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { data_dir, bind_address } => {
                let settings = Settings::load(SettingsOverrides { data_dir, bind_address })?;
                serve(settings).await?;
            }
            Commands::Export { out, data_dir } => {
                let settings = Settings::load(SettingsOverrides {
                    data_dir,
                    ..Default::default()
                })?;
                export(settings, &out)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_flags() {
        let cli = Cli::try_parse_from([
            "inclusion-dashboard",
            "serve",
            "--data-dir",
            "/srv/data",
            "--bind-address",
            "127.0.0.1:8080",
        ])
        .unwrap();

        match cli.command {
            Commands::Serve { data_dir, bind_address } => {
                assert_eq!(data_dir, Some(PathBuf::from("/srv/data")));
                assert_eq!(bind_address.as_deref(), Some("127.0.0.1:8080"));
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_export_requires_out() {
        assert!(Cli::try_parse_from(["inclusion-dashboard", "export"]).is_err());
    }
}
