//! passbook - terminal teller for a single bank account
//!
//! Reads one action per line, from a script file or stdin, and prints the
//! teller screen after each one.
//!
//! Usage:
//!   passbook [--script <PATH>] [--json] [--deposit <AMOUNT>] ...
//!
//! A line is either an action literal (`deposit`) or a JSON action
//! (`{"type": "deposit"}`). Blank lines and lines starting with `#` are
//! skipped. An unknown action stops the session with an error.

use anyhow::Context;
use clap::Parser;
use passbook::panel::Teller;
use passbook::{AccountTerms, Action, TermsBuilder};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "passbook")]
#[command(about = "Drive a single bank account from a script of actions")]
struct Cli {
    /// Read actions from this file instead of stdin
    #[arg(long, short = 's')]
    script: Option<PathBuf>,

    /// Print each screen as JSON
    #[arg(long)]
    json: bool,

    /// Balance credited when the account is opened
    #[arg(long)]
    opening_deposit: Option<i64>,

    /// Amount added by a deposit
    #[arg(long)]
    deposit: Option<i64>,

    /// Amount removed by a withdrawal
    #[arg(long)]
    withdrawal: Option<i64>,

    /// Principal of a loan
    #[arg(long)]
    loan: Option<i64>,
}

impl Cli {
    fn terms(&self) -> anyhow::Result<AccountTerms> {
        let mut builder = TermsBuilder::new();
        if let Some(amount) = self.opening_deposit {
            builder = builder.opening_deposit(amount);
        }
        if let Some(amount) = self.deposit {
            builder = builder.deposit(amount);
        }
        if let Some(amount) = self.withdrawal {
            builder = builder.withdrawal(amount);
        }
        if let Some(amount) = self.loan {
            builder = builder.loan(amount);
        }
        builder.build().context("invalid account terms")
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "passbook=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let terms = cli.terms()?;

    let input: Box<dyn BufRead> = match &cli.script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening script {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let mut teller = Teller::new(terms);
    let mut out = io::stdout().lock();
    tracing::info!(?terms, "session started");

    print_screen(&mut out, &teller, cli.json)?;
    for (index, line) in input.lines().enumerate() {
        let line = line.context("reading actions")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let action = parse_action(line).with_context(|| format!("line {}", index + 1))?;
        let step = teller.send(action);
        match step.rejection() {
            None => tracing::info!(%action, "accepted"),
            Some(reason) => tracing::info!(%action, %reason, "refused"),
        }
        print_screen(&mut out, &teller, cli.json)?;
    }

    tracing::info!(state = ?teller.state(), "session finished");
    Ok(())
}

/// Parse one script line: a JSON action object or a bare action literal.
fn parse_action(line: &str) -> anyhow::Result<Action> {
    if line.starts_with('{') {
        serde_json::from_str(line).with_context(|| format!("malformed action {line}"))
    } else {
        Ok(line.parse::<Action>()?)
    }
}

fn print_screen(out: &mut impl Write, teller: &Teller, json: bool) -> anyhow::Result<()> {
    let screen = teller.render();
    if json {
        serde_json::to_writer(&mut *out, &screen)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{screen}")?;
    }
    Ok(())
}
