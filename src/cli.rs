use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::api::REPOSITORY_URL;
use crate::models::CommandRequest;

/// Generate .gitignore files from the github/gitignore templates
#[derive(Parser, Debug)]
#[command(name = "gitignite")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Base URL of the contents API
    #[arg(long, global = true, hide = true, default_value = REPOSITORY_URL)]
    pub repository_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate .gitignore file from a language template
    #[command(visible_alias = "i")]
    Init {
        /// Do not add credits to the generated .gitignore file
        #[arg(long, visible_alias = "nc")]
        no_credits: bool,

        /// Output directory
        #[arg(
            short,
            long,
            value_hint = ValueHint::DirPath,
            default_value = ".",
            allow_hyphen_values = true
        )]
        output: PathBuf,

        /// Template language, matched case-insensitively
        language: String,
    },

    /// List available languages
    #[command(visible_alias = "l")]
    Langs,
}

impl Cli {
    /// Parses `args`, accepting the legacy single-dash `-nc` spelling.
    pub fn parse_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(normalize_args(args))
    }

    pub fn try_parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }

    pub fn request(&self) -> CommandRequest {
        match &self.command {
            Commands::Init {
                no_credits,
                output,
                language,
            } => CommandRequest::Generate {
                language: language.clone(),
                no_credits: *no_credits,
                output_dir: output.clone(),
            },
            Commands::Langs => CommandRequest::ListLanguages,
        }
    }
}

/// Rewrites `-nc` to `--no-credits`; clap would otherwise read it as `-n -c`.
///
/// Left alone after `--` and when it is the value of `-o`/`--output`.
fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut after_separator = false;
    let mut expects_value = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let is_value = std::mem::replace(&mut expects_value, false);
            if after_separator || is_value {
                return arg;
            }
            if arg == "--" {
                after_separator = true;
                arg
            } else if arg == "-nc" {
                OsString::from("--no-credits")
            } else {
                expects_value = arg == "-o" || arg == "--output";
                arg
            }
        })
        .collect()
}
