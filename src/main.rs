use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use keycalc::calculator::copy_to_clipboard;
use keycalc::cli::CliArgs;
use keycalc::config::Settings;
use keycalc::frontend::{Frontend, OutputOptions};
use keycalc::logging;
use keycalc::session::Session;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    let settings = match &args.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load(),
    };

    logging::init(&settings.log_level);
    debug!(?settings, "settings loaded");

    let options = OutputOptions {
        trace: args.trace,
        json: args.json,
    };
    let mut frontend = Frontend::new(Session::with_settings(&settings), io::stdout().lock(), options);

    if args.keys.is_empty() {
        frontend.run_lines(io::stdin().lock())?;
    } else {
        for sequence in &args.keys {
            frontend.feed(sequence)?;
        }
        if !args.trace {
            frontend.show()?;
        }
    }

    if args.copy {
        copy_to_clipboard(frontend.session().display())?;
    }

    Ok(())
}
