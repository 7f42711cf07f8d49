use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Debug, Parser)]
#[command(
    name = "i18n_resource",
    version,
    about = "Compile per-locale JSON resource trees into a registration module"
)]
pub struct CmdArgs {
    /// Workspace directory. Config files and relative paths are looked up here.
    #[arg(default_value = ".")]
    pub workspace: PathBuf,

    /// Config file to load. Repeat to merge several in order. Defaults to
    /// `<workspace>/.i18nrc.json`.
    #[arg(short, long, action = ArgAction::Append)]
    pub config: Option<Vec<PathBuf>>,

    /// JSON object merged over the loaded config, e.g.
    /// `--set '{"output":{"moduleName":"virtual:t"}}'`. Repeatable.
    #[arg(long = "set", value_name = "JSON", action = ArgAction::Append)]
    pub overrides: Vec<String>,

    /// Directory file-mode assets are written to. Defaults to the workspace.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Print the JSON schema of the config file and exit.
    #[arg(long)]
    pub print_schema: bool,

    /// Verbose output.
    #[arg(long)]
    pub verbose: bool,
}
