mod model_file;
mod theme;

pub use model_file::{FieldEntry, ModelEntry, ModelFile};

use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

/// Parse and execute CLI commands from command-line arguments
pub fn parse_and_run() -> Result<()> {
    run(Cli::parse())
}

/// Parse and execute CLI commands from an iterator of arguments
pub fn parse_from<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    run(Cli::try_parse_from(args)?)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Show(cmd) => cmd.run(),
        Command::Check(cmd) => cmd.run(),
    }
}

#[derive(Parser, Debug)]
#[command(name = "freeform")]
#[command(about = "Freeform CLI - Translate declarative model files into native field definitions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Print the native fields of every model in a model file
    Show(ShowCommand),

    /// Report relations whose reverse side is not declared
    Check(CheckCommand),
}

#[derive(Parser, Debug)]
struct ShowCommand {
    /// Path to the TOML model file
    file: PathBuf,

    /// Also list fields the target ORM does not store natively
    #[arg(short, long)]
    all: bool,
}

#[derive(Parser, Debug)]
struct CheckCommand {
    /// Path to the TOML model file
    file: PathBuf,

    /// Exit with an error if any warning is reported
    #[arg(long)]
    strict: bool,
}

impl ShowCommand {
    fn run(self) -> Result<()> {
        let schema = ModelFile::load(&self.file)?.build()?;
        print!("{}", theme::render_schema(&schema, self.all));
        Ok(())
    }
}

impl CheckCommand {
    fn run(self) -> Result<()> {
        let schema = ModelFile::load(&self.file)?.build()?;
        let warnings = schema.check();

        print!("{}", theme::render_warnings(&warnings));

        if self.strict && !warnings.is_empty() {
            bail!("{} warning(s) reported in strict mode", warnings.len());
        }

        Ok(())
    }
}
