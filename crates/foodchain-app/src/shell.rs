//! The interactive command loop.
//!
//! [`Shell`] owns the current [`SessionState`] and replaces it only when
//! an action succeeds. Rejected input is reported on the output stream and
//! logged at `warn`; the session carries on from where it was.

use std::io::{BufRead, Write};

use foodchain_core::config::{DisplayConfig, ExamplesConfig};
use foodchain_core::{
    Action, AppConfig, ExampleChoice, ExampleSelection, SessionError, SessionState, explain,
    explain_change, library,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, warn};

use crate::command::{self, Command, ExampleArg, HELP};
use crate::error::AppError;
use crate::render;

/// Prompt printed before each command.
pub const PROMPT: &str = "foodchain> ";

/// Interactive session driver.
#[derive(Debug)]
pub struct Shell {
    state: SessionState,
    display: DisplayConfig,
    examples: ExamplesConfig,
    rng: StdRng,
}

impl Shell {
    /// A shell with a fresh session built from the configuration.
    ///
    /// Random example selection is seeded from `examples.seed` when set,
    /// otherwise from the operating system.
    pub fn new(config: &AppConfig) -> Self {
        let rng = config
            .examples
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self {
            state: SessionState::new(config.session, config.models),
            display: config.display,
            examples: config.examples,
            rng,
        }
    }

    /// The current session state.
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Read commands until end of input or `quit`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] only when reading input or writing output
    /// fails.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<(), AppError> {
        writeln!(out, "Food Chain Simulator. Type `help` for commands.")?;
        write!(out, "{PROMPT}")?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            match command::parse(&line) {
                Ok(None) => {}
                Ok(Some(Command::Quit)) => break,
                Ok(Some(cmd)) => self.execute(cmd, out)?,
                Err(e) => {
                    warn!(input = line.as_str(), error = %e, "command rejected");
                    writeln!(out, "{e}")?;
                }
            }
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
        writeln!(out)?;
        Ok(())
    }

    /// Run one parsed command.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] when writing output fails.
    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<(), AppError> {
        match cmd {
            Command::Actions(actions) => self.dispatch(actions, out)?,
            Command::Example(arg) => {
                let choice = self.example_choice(arg);
                self.dispatch(vec![Action::LoadExample(choice)], out)?;
            }
            Command::Show => {
                write!(out, "{}", render::session_summary(&self.state))?;
                self.write_diagram(out)?;
            }
            Command::Explain => match self.state.chain() {
                Some(chain) => writeln!(out, "{}", explain(chain, self.state.model()))?,
                None => writeln!(out, "{}", SessionError::NoChain)?,
            },
            Command::Json => match self.state.chain() {
                Some(chain) => writeln!(out, "{}", serde_json::to_string_pretty(chain)?)?,
                None => writeln!(out, "{}", SessionError::NoChain)?,
            },
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn example_choice(&mut self, arg: ExampleArg) -> ExampleChoice {
        let random = match arg {
            ExampleArg::Choice(choice) => return choice,
            ExampleArg::Random => true,
            ExampleArg::Default => self.examples.selection == ExampleSelection::Random,
        };
        if random {
            ExampleChoice::Index(library::random_index(&mut self.rng))
        } else {
            ExampleChoice::Next
        }
    }

    /// Apply actions in order against a copy of the state. The shell keeps
    /// the result only if every action succeeds.
    fn dispatch<W: Write>(&mut self, actions: Vec<Action>, out: &mut W) -> Result<(), AppError> {
        let redraw = actions
            .iter()
            .any(|a| matches!(a, Action::Build | Action::LoadExample(_)));
        let change = actions.iter().any(|a| matches!(a, Action::ApplyChange { .. }));
        debug!(count = actions.len(), "dispatching actions");

        let mut next = self.state.clone();
        for action in actions {
            match next.apply(action) {
                Ok(state) => next = state,
                Err(e) => {
                    warn!(error = %e, "action rejected");
                    writeln!(out, "{e}")?;
                    return Ok(());
                }
            }
        }
        self.state = next;

        match self.state.chain() {
            Some(chain) if change => {
                let level = self.state.change_level();
                writeln!(
                    out,
                    "{}",
                    explain_change(chain, self.state.model(), level, chain.population(level))
                )?;
                self.write_diagram(out)?;
            }
            Some(chain) if redraw => {
                writeln!(out, "{}", explain(chain, self.state.model()))?;
                self.write_diagram(out)?;
            }
            _ => writeln!(out, "ok")?,
        }
        Ok(())
    }

    fn write_diagram<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        match self.state.chain() {
            Some(chain) => write!(out, "{}", render::diagram(chain, &self.display))?,
            None => writeln!(out, "{}", render::NO_CHAIN)?,
        }
        Ok(())
    }
}
