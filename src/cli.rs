use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::section::DEFAULT_PROFILE;
use crate::ui::ColorMode;

#[derive(Parser)]
#[command(name = "aws-configure")]
#[command(about = "Configure AWS named profiles in ~/.aws/config and ~/.aws/credentials")]
#[command(version)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// When to use colors: always, auto, never
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to edit [default: $AWS_CONFIG_FILE or ~/.aws/config]
    #[arg(long, global = true, value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Credentials file to edit [default: $AWS_SHARED_CREDENTIALS_FILE or ~/.aws/credentials]
    #[arg(long, global = true, value_name = "PATH")]
    pub credentials_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List profiles
    List,

    /// Set profile options
    Set(SetArgs),

    /// Get profile options
    Get(GetArgs),

    /// Delete profile
    Delete(DeleteArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Profile name
    #[arg(short, long, value_name = "NAME", default_value = DEFAULT_PROFILE)]
    pub profile: String,

    /// Empty all profile options before setting new options
    #[arg(short, long)]
    pub empty: bool,

    /// Empty profile config options before setting new options
    #[arg(long)]
    pub empty_config: bool,

    /// Empty profile credentials options before setting new options
    #[arg(long)]
    pub empty_credentials: bool,

    /// Profile options, e.g. 'region=eu-central-1' 'source_profile=default'
    #[arg(value_name = "KEY=VALUE")]
    pub options: Vec<String>,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Profile name
    #[arg(short, long, value_name = "NAME", default_value = DEFAULT_PROFILE)]
    pub profile: String,

    /// Option keys, e.g. 'region' 'source_profile'; all options when omitted
    #[arg(value_name = "KEY")]
    pub keys: Vec<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Profile name
    #[arg(short, long, value_name = "NAME", default_value = DEFAULT_PROFILE)]
    pub profile: String,

    /// Delete only the profile config
    #[arg(long)]
    pub config: bool,

    /// Delete only the profile credentials
    #[arg(long)]
    pub credentials: bool,
}
