use clap::Parser;
use directories_next::ProjectDirs;
use tally_storage::BuiltinMediumType;

mod commands;
mod tracing;

// Note: for uniformity, we dont use clap `default_value` or `default_value_t` options
#[derive(Parser, Debug)]
#[command(
    name = "tally",
    version,
    long_about = Some("A CLI for tracking activities and logging time or completions against them.")
)]
struct Args {
    /// Path of the configuration file (default to ~/.config/tally/config.toml)
    #[clap(short, long)]
    config: Option<String>,

    /// Storage medium ("file" or "in_memory")
    #[clap(short, long)]
    medium: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    command: commands::Command,
}

fn get_config_path(config: Option<String>) -> eyre::Result<String> {
    if let Some(path) = config {
        return Ok(shellexpand::full(&path)?.into_owned());
    }

    let dirs = ProjectDirs::from("", "", "tally")
        .ok_or_else(|| eyre::eyre!("couldn't resolve the user configuration directory"))?;

    Ok(dirs
        .config_dir()
        .join("config.toml")
        .to_string_lossy()
        .into_owned())
}

pub fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing::setup()?;

    let args = Args::parse();

    let config_path = get_config_path(args.config)?;
    let medium_type: BuiltinMediumType = args.medium.as_deref().unwrap_or("file").parse()?;

    let core = tally_core::load(medium_type, &config_path)?;

    args.command.execute(&core)?;
    Ok(())
}
