//! Parsing of command lines typed at the `foodchain>` prompt.
//!
//! A line is a verb followed by arguments. Verbs that change the session
//! become one or more [`Action`]s; the rest are views handled by the shell.

use foodchain_core::{Action, ExampleChoice};
use foodchain_types::{ParseLevelError, ParseModelError, PopulationModel, TrophicLevel};

/// Help text printed by the `help` command.
pub const HELP: &str = "\
Commands:
  name <level> <organism>   set the organism name for a level
  pop <level> <count>       set the population text for a level
  defaults                  fill populations with 1000, 100, 10, 1
  build                     validate the form and draw the chain
  example [next|random|<name>|<index>]
                            load a built-in example chain
  model <model>             balanced, predator_pressure, or bottom_up
  level <level>             level changed by `change`
  change [<level>] <count>  set a level and update the linked levels
  show                      print the form, selections, and diagram
  explain                   explain the current chain
  json                      print the current chain as JSON
  reset                     clear everything
  help                      show this help
  quit                      leave the simulator

Levels: 0-3, producer, primary, secondary, tertiary";

/// How `example` picks a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExampleArg {
    /// No argument: use the configured selection mode.
    Default,
    /// Pick at random.
    Random,
    /// A specific choice resolved by the session.
    Choice(ExampleChoice),
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Session actions applied together; all succeed or none do.
    Actions(Vec<Action>),
    /// Load an example chain.
    Example(ExampleArg),
    /// Print the form, selections, and diagram.
    Show,
    /// Print the explanation for the current chain.
    Explain,
    /// Print the current chain as JSON.
    Json,
    /// Print the help text.
    Help,
    /// Leave the command loop.
    Quit,
}

/// Errors from parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The verb is not recognized.
    #[error("unknown command {0:?} (type `help` for a list)")]
    Unknown(String),

    /// A required argument is missing.
    #[error("`{command}` needs {argument}")]
    MissingArgument {
        /// The verb.
        command: &'static str,
        /// What was expected.
        argument: &'static str,
    },

    /// A level token did not parse.
    #[error(transparent)]
    Level(#[from] ParseLevelError),

    /// A model token did not parse.
    #[error(transparent)]
    Model(#[from] ParseModelError),
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (verb, rest) = split_first(line);

    let command = match verb.to_ascii_lowercase().as_str() {
        "name" => {
            let (level, text) = level_and_rest(rest, "name", "a level and an organism name")?;
            Command::Actions(vec![Action::EditName {
                level,
                text: text.to_owned(),
            }])
        }
        "pop" | "population" => {
            let (level, text) = level_and_rest(rest, "pop", "a level and a population")?;
            Command::Actions(vec![Action::EditPopulation {
                level,
                text: text.to_owned(),
            }])
        }
        "defaults" => Command::Actions(vec![Action::FillDefaultPopulations]),
        "build" => Command::Actions(vec![Action::Build]),
        "example" => Command::Example(parse_example(rest)),
        "model" => {
            let token = required(rest, "model", "a model name")?;
            Command::Actions(vec![Action::SelectModel(token.parse::<PopulationModel>()?)])
        }
        "level" => {
            let token = required(rest, "level", "a level")?;
            Command::Actions(vec![Action::SelectChangeLevel(token.parse::<TrophicLevel>()?)])
        }
        "change" => parse_change(rest)?,
        "show" => Command::Show,
        "explain" => Command::Explain,
        "json" => Command::Json,
        "reset" => Command::Actions(vec![Action::Reset]),
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(CommandError::Unknown(verb.to_owned())),
    };
    Ok(Some(command))
}

fn parse_example(rest: &str) -> ExampleArg {
    match rest.trim() {
        "" => ExampleArg::Default,
        "next" => ExampleArg::Choice(ExampleChoice::Next),
        "random" => ExampleArg::Random,
        other => other.parse::<usize>().map_or_else(
            |_not_index| ExampleArg::Choice(ExampleChoice::Named(other.to_owned())),
            |index| ExampleArg::Choice(ExampleChoice::Index(index)),
        ),
    }
}

/// `change <count>` or `change <level> <count>`.
fn parse_change(rest: &str) -> Result<Command, CommandError> {
    let rest = required(rest, "change", "a new population")?;
    let (first, remainder) = split_first(rest);
    if remainder.is_empty() {
        return Ok(Command::Actions(vec![Action::ApplyChange {
            raw_value: first.to_owned(),
        }]));
    }
    let level = first.parse::<TrophicLevel>()?;
    Ok(Command::Actions(vec![
        Action::SelectChangeLevel(level),
        Action::ApplyChange {
            raw_value: remainder.to_owned(),
        },
    ]))
}

fn level_and_rest<'a>(
    rest: &'a str,
    command: &'static str,
    argument: &'static str,
) -> Result<(TrophicLevel, &'a str), CommandError> {
    let rest = required(rest, command, argument)?;
    let (token, text) = split_first(rest);
    Ok((token.parse::<TrophicLevel>()?, text))
}

const fn required<'a>(
    rest: &'a str,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument { command, argument })
    } else {
        Ok(rest)
    }
}

/// Split off the first whitespace-delimited word; the remainder is trimmed.
fn split_first(text: &str) -> (&str, &str) {
    let text = text.trim();
    text.split_once(char::is_whitespace)
        .map_or((text, ""), |(head, tail)| (head, tail.trim()))
}
