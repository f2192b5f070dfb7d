use std::io::{self, BufRead, Write};

use allowlist_core::{update, AllowListState, Effect, Msg, Seed};
use allowlist_logging::allowlist_info;
use anyhow::Context;
use clap::Parser;

use super::cli::CliArgs;
use super::effects::run_effects;
use super::ui::commands::{parse_line, Command, HELP};
use super::ui::render::{prompt, render};
use super::{logging, seed};

pub fn run_app() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logging::initialize(args.log);

    let seed = match &args.seed {
        Some(path) => seed::load_seed(path)
            .with_context(|| format!("could not load seed {}", path.display()))?,
        None => Seed::default(),
    };
    allowlist_info!(
        "Console starting with {} site(s) and {} org default url(s)",
        seed.sites.len(),
        seed.org_defaults.len()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(AllowListState::from_seed(seed));
    console.run(stdin.lock(), stdout.lock())?;
    allowlist_info!("Console closed");
    Ok(())
}

/// One interactive session: each input line is handled to completion,
/// including its effects and redraw, before the next is read.
struct Console {
    state: AllowListState,
}

impl Console {
    fn new(state: AllowListState) -> Self {
        Self { state }
    }

    fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> io::Result<()> {
        write_lines(&mut out, &render(&self.state.view()))?;
        writeln!(out, "Type `help` for commands.")?;
        write!(out, "{}", prompt(&self.state.view()))?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            match parse_line(&line, self.state.pending_revert().is_some()) {
                Ok(Command::Dispatch(msgs)) => {
                    self.dispatch_line(msgs, &mut out)?;
                    if self.state.consume_dirty() {
                        write_lines(&mut out, &render(&self.state.view()))?;
                    }
                }
                Ok(Command::Show) => write_lines(&mut out, &render(&self.state.view()))?,
                Ok(Command::Help) => {
                    for line in HELP {
                        writeln!(out, "  {line}")?;
                    }
                }
                Ok(Command::Quit) => break,
                Ok(Command::Empty) => {}
                Err(err) => writeln!(out, "error: {err}")?,
            }
            write!(out, "{}", prompt(&self.state.view()))?;
            out.flush()?;
        }
        writeln!(out)?;
        Ok(())
    }

    /// Applies one line's messages in order, stopping at the first rejection.
    fn dispatch_line<W: Write>(&mut self, msgs: Vec<Msg>, out: &mut W) -> io::Result<()> {
        for msg in msgs {
            if !self.dispatch(msg, out)? {
                break;
            }
        }
        Ok(())
    }

    /// Returns `false` when the message was rejected, so the rest of the
    /// line is not applied on top of a failed step.
    fn dispatch<W: Write>(&mut self, msg: Msg, out: &mut W) -> io::Result<bool> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        for notice in run_effects(&effects, &self.state) {
            writeln!(out, "{notice}")?;
        }
        let rejected = effects
            .iter()
            .any(|effect| matches!(effect, Effect::CommandRejected(_)));
        Ok(!rejected)
    }
}

fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
