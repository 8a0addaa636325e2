//! docsift CLI
//!
//! Collects searchable documents from a finished static site build.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for docsift.
#[derive(Parser)]
#[command(
    name = "docsift",
    version,
    about = "Collect searchable documents from a static site build"
)]
struct Cli {
    /// Path to plugin options file
    #[arg(short, long, default_value = "docsift.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Print the documents a build would index, without reading pages
    Resolve {
        /// Build manifest (JSON)
        #[arg(short, long)]
        manifest: std::path::PathBuf,
    },
    /// Extract every indexable page into a document bundle
    Extract {
        /// Build manifest (JSON)
        #[arg(short, long)]
        manifest: std::path::PathBuf,
        /// Output bundle path
        #[arg(short, long, default_value = "search-documents.json")]
        output: std::path::PathBuf,
    },
    /// Validate plugin options
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    docsift::init_tracing(cli.verbose);

    match cli.command {
        Commands::Resolve { manifest } => {
            docsift::cmd::resolve::run(&cli.config, &manifest)?;
        }
        Commands::Extract { manifest, output } => {
            docsift::cmd::extract::run(&cli.config, &manifest, &output)?;
        }
        Commands::Check { strict } => {
            docsift::cmd::check::run(&cli.config, strict)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_extract_command_parsing() {
        let args = ["docsift", "extract", "--manifest", "build/manifest.json"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, std::path::PathBuf::from("docsift.toml"));
        assert_eq!(cli.verbose, 0);

        match cli.command {
            Commands::Extract { manifest, output } => {
                assert_eq!(manifest, std::path::PathBuf::from("build/manifest.json"));
                assert_eq!(output, std::path::PathBuf::from("search-documents.json"));
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_cli_extract_with_output() {
        let args = ["docsift", "extract", "-m", "m.json", "-o", "out/docs.json"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Extract { output, .. } => {
                assert_eq!(output, std::path::PathBuf::from("out/docs.json"));
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_cli_resolve_command_parsing() {
        let args = ["docsift", "resolve", "--manifest", "m.json"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Resolve { manifest } => {
                assert_eq!(manifest, std::path::PathBuf::from("m.json"));
            }
            _ => panic!("Expected Resolve command"),
        }
    }

    #[test]
    fn test_cli_manifest_is_required() {
        assert!(Cli::try_parse_from(["docsift", "resolve"]).is_err());
        assert!(Cli::try_parse_from(["docsift", "extract"]).is_err());
    }

    #[test]
    fn test_cli_check_command_parsing() {
        let args = ["docsift", "check", "--strict"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Check { strict } => {
                assert!(strict);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let args = ["docsift", "-vvv", "check"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_custom_config_path() {
        let args = ["docsift", "--config", "site/search.toml", "check"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.config, std::path::PathBuf::from("site/search.toml"));
    }
}
