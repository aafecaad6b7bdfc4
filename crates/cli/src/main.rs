use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};

use anyhow::Context;
use clap::Parser;

use billsplit_cli::{CliConfig, Outcome, Session, view};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();
    billsplit_observability::init(config.log_config());

    tracing::info!(format = ?config.format, quiet = config.quiet, "starting billsplit");

    let (reader, interactive): (Box<dyn BufRead>, bool) = match &config.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            (Box::new(BufReader::new(file)), false)
        }
        None => (Box::new(io::stdin().lock()), io::stdin().is_terminal()),
    };

    let mut session = Session::new(config.format, config.quiet);
    let mut stdout = io::stdout().lock();

    if interactive {
        writeln!(stdout, "{}", view::PLACEHOLDER)?;
        writeln!(stdout, "Type `help` for the list of commands.")?;
    }

    for line in reader.lines() {
        let line = line.context("failed to read input")?;
        match session.handle_line(&line)? {
            Outcome::Render(text) | Outcome::Message(text) => writeln!(stdout, "{text}")?,
            Outcome::Alert(message) => writeln!(stdout, "! {message}")?,
            Outcome::Nothing => {}
            Outcome::Quit => break,
        }
        stdout.flush()?;
    }

    if let Some(text) = session.finish()? {
        writeln!(stdout, "{text}")?;
    }

    tracing::info!(people = session.ledger().len(), "session ended");
    Ok(())
}
