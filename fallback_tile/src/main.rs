mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

/// Builds the vector tile served when rendering a tile times out.
///
/// Without a subcommand the default fallback tile is written to
/// `assets/render-timeout-fallback.mvt`.
#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Encode a fallback tile and write it to disk
	Build(tools::build::Subcommand),

	/// List the layers of an encoded tile
	Inspect(tools::inspect::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		None => tools::build::run(&tools::build::Subcommand::default()),
		Some(Commands::Build(arguments)) => tools::build::run(arguments),
		Some(Commands::Inspect(arguments)) => tools::inspect::run(arguments),
	}
}
