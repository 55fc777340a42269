//! CLI for the site branding service.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_base_url, run_config_path, run_footer, run_manifest, SiteContext};

/// Top-level CLI for the branding service.
#[derive(Debug, Parser)]
#[command(name = "branding")]
#[command(about = "Site branding: footer data for templates and the branding API", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/branding/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the footer as JSON.
    Footer {
        /// Build URLs with http:// instead of https://.
        #[arg(long)]
        insecure: bool,
        /// Request host; selects a microsite when one matches.
        #[arg(long)]
        host: Option<String>,
        /// Language of user-facing strings (defaults to i18n.default_language).
        #[arg(long)]
        language: Option<String>,
    },

    /// Print the site's base URL.
    BaseUrl {
        /// Use http:// instead of https://.
        #[arg(long)]
        insecure: bool,
        /// Request host; selects a microsite when one matches.
        #[arg(long)]
        host: Option<String>,
    },

    /// Fingerprint every file under a static root and write a manifest.
    Manifest {
        /// Directory holding the static assets.
        static_root: PathBuf,
        /// Manifest path (default: <static_root>/staticfiles.json).
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print the default config file location.
    ConfigPath,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Footer {
                insecure,
                host,
                language,
            } => {
                let ctx = SiteContext::load(cli.config.as_deref(), language.as_deref())?;
                run_footer(&ctx, host.as_deref(), !insecure)?;
            }
            CliCommand::BaseUrl { insecure, host } => {
                let ctx = SiteContext::load(cli.config.as_deref(), None)?;
                run_base_url(&ctx, host.as_deref(), !insecure);
            }
            CliCommand::Manifest {
                static_root,
                output,
            } => run_manifest(&static_root, output.as_deref())?,
            CliCommand::ConfigPath => run_config_path()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
