//! `rs-markov`: learn a character-level Markov chain from text files and
//! print random text drawn from it.

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use log::error;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_markov_core::{MarkovError, ModelBuilder, generate};

use cli::{Cli, DEFAULT_LOG_FILTER, usage_exit_code};

fn main() -> ExitCode {
	let cli = match Cli::try_parse() {
		Ok(cli) => cli,
		Err(usage) => {
			let printed = usage.print();
			return ExitCode::from(usage_exit_code(usage.kind(), printed));
		}
	};

	init_logging(&cli);

	match run(&cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			error!("{e}");
			ExitCode::from(e.exit_code())
		}
	}
}

fn init_logging(cli: &Cli) {
	let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER));
	if let Some(level) = cli.log_level() {
		builder.filter_level(level);
	}
	builder.format_timestamp(None).init();
}

/// Validates arguments, builds the model from every source and writes the
/// generated text. Nothing is written unless generation fully succeeds.
fn run(cli: &Cli) -> rs_markov_core::Result<()> {
	let settings = cli.settings()?;

	let mut builder = ModelBuilder::new(settings.prefix_length(), cli.build_options())?;
	for source in settings.sources() {
		builder.feed_file(source)?;
	}
	let model = builder.finish();

	let text = match cli.seed {
		Some(seed) => generate(&model, settings.output_length(), StdRng::seed_from_u64(seed))?,
		None => generate(&model, settings.output_length(), rand::rng())?,
	};

	let mut stdout = io::stdout().lock();
	stdout
		.write_all(text.as_bytes())
		.and_then(|()| stdout.flush())
		.map_err(|source| MarkovError::Output { source })
}
