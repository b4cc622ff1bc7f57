//! Line-oriented driver for a planner session.
//!
//! Each input line is one user action, split with shell-style quoting so
//! names and notes may contain spaces (`save "Mr Whiskers" owned 4`).
//! After every handled action the current view is printed again.

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::OutputFormat;
use crate::nav::Destination;
use crate::record::{CatType, FeedingField, LitterField};
use crate::session::{Event, NewCat, Outcome, Session};

/// Errors from parsing a command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    /// The line could not be split (e.g. an unclosed quote).
    #[error("could not parse line: {0}")]
    Split(String),

    /// The command word is not known.
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    /// A required argument was not given.
    #[error("'{command}' needs {argument}")]
    MissingArgument {
        /// The command.
        command: &'static str,
        /// What is missing.
        argument: &'static str,
    },

    /// An argument had an unexpected value.
    #[error("invalid {what} '{value}' (expected {expected})")]
    InvalidValue {
        /// What was being parsed.
        what: &'static str,
        /// The offending value.
        value: String,
        /// Accepted values.
        expected: &'static str,
    },

    /// A date was not `YYYY-MM-DD` or `today`.
    #[error("invalid date '{0}' (expected YYYY-MM-DD or 'today')")]
    InvalidDate(String),
}

/// One parsed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A session event.
    Event(Event),
    /// Print the current view again.
    Show,
    /// Print the command summary.
    Help,
    /// End the session.
    Quit,
}

/// Command summary printed by `help`.
pub const HELP: &str = "\
Commands:
  go home | go faq | go feral | go cat <name>   pick a sidebar entry
  start                                         Get started (Home only)
  save <name> [type] [age] [notes]              save the Add-Cat form
  cancel                                        leave the Add-Cat form
  feeding food|schedule|notes <value>           edit the current cat's feeding
  litter type|last-cleaned|notes <value>        edit the current cat's litter
  med <name> [dosage] [frequency]               add a medication
  vet <YYYY-MM-DD|today> [reason]               log a vet visit
  delete                                        delete the current cat
  show | help | quit

Free text at the end of a command (notes, values, reasons) is kept as typed.
";

/// Parse one line. Blank lines and `#` comments yield `None`.
///
/// `default_cat_type` fills in the type when `save` omits it.
///
/// # Errors
///
/// Returns a [`ShellError`] if the line is not a valid command.
pub fn parse_line(line: &str, default_cat_type: CatType) -> Result<Option<Input>, ShellError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let words = shell_words::split(line).map_err(|err| ShellError::Split(err.to_string()))?;
    let Some((command, args)) = words.split_first() else {
        return Ok(None);
    };
    let arg = |i: usize| args.get(i).cloned().unwrap_or_default();

    let input = match command.as_str() {
        "go" => Input::Event(Event::Navigate(parse_destination(args, &tail(line, 2))?)),
        "start" => Input::Event(Event::GetStarted),
        "cancel" => Input::Event(Event::Cancel),
        "save" => {
            let cat_type = match args.get(1) {
                Some(value) => value.parse::<CatType>().map_err(|_| ShellError::InvalidValue {
                    what: "cat type",
                    value: value.clone(),
                    expected: "owned, feral or foster",
                })?,
                None => default_cat_type,
            };
            Input::Event(Event::SubmitCat(NewCat {
                name: arg(0),
                cat_type,
                age: arg(2),
                notes: tail(line, 4),
            }))
        }
        "feeding" => {
            let field = match args.first().map(String::as_str) {
                Some("food") => FeedingField::Food,
                Some("schedule") => FeedingField::Schedule,
                Some("notes") => FeedingField::Notes,
                Some(other) => return Err(invalid_field(other, "food, schedule or notes")),
                None => return Err(missing("feeding", "a field")),
            };
            Input::Event(Event::EditFeeding(field, tail(line, 2)))
        }
        "litter" => {
            let field = match args.first().map(String::as_str) {
                Some("type") => LitterField::Type,
                Some("last-cleaned" | "last_cleaned") => LitterField::LastCleaned,
                Some("notes") => LitterField::Notes,
                Some(other) => return Err(invalid_field(other, "type, last-cleaned or notes")),
                None => return Err(missing("litter", "a field")),
            };
            Input::Event(Event::EditLitter(field, tail(line, 2)))
        }
        "med" => Input::Event(Event::AddMedication {
            name: arg(0),
            dosage: arg(1),
            frequency: tail(line, 3),
        }),
        "vet" => {
            let date = args.first().ok_or_else(|| missing("vet", "a date"))?;
            Input::Event(Event::AddVetVisit {
                date: parse_date(date)?,
                reason: tail(line, 2),
            })
        }
        "delete" => Input::Event(Event::DeleteCat),
        "show" => Input::Show,
        "help" | "?" => Input::Help,
        "quit" | "exit" => Input::Quit,
        other => return Err(ShellError::UnknownCommand(other.to_string())),
    };
    Ok(Some(input))
}

fn parse_destination(args: &[String], name: &str) -> Result<Destination, ShellError> {
    match args.first().map(String::as_str) {
        Some("home") => Ok(Destination::Home),
        Some("faq") => Ok(Destination::Faq),
        Some("feral" | "feral-care") => Ok(Destination::FeralCare),
        Some("cat") => {
            if name.is_empty() {
                Err(missing("go cat", "a cat name"))
            } else {
                Ok(Destination::Cat(name.to_string()))
            }
        }
        Some(other) => Err(ShellError::InvalidValue {
            what: "destination",
            value: other.to_string(),
            expected: "home, faq, feral or cat <name>",
        }),
        None => Err(missing("go", "a destination")),
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, ShellError> {
    if value.eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ShellError::InvalidDate(value.to_string()))
}

/// Free text after the first `skip` words of `line`, spacing preserved.
/// A tail that is a single quoted word is unquoted.
fn tail(line: &str, skip: usize) -> String {
    let mut rest = line.trim_start();
    for _ in 0..skip {
        rest = skip_word(rest).trim_start();
    }
    let rest = rest.trim_end();
    match shell_words::split(rest) {
        Ok(words) if words.len() == 1 => words.into_iter().next().unwrap_or_default(),
        _ => rest.to_string(),
    }
}

/// `s` after its first shell word. Quotes and backslashes follow shell rules.
fn skip_word(s: &str) -> &str {
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, c) {
            (None | Some('"'), '\\') => escaped = true,
            (None, '\'' | '"') => quote = Some(c),
            (Some(open), _) if c == open => quote = None,
            (None, _) if c.is_whitespace() => return &s[i..],
            _ => {}
        }
    }
    ""
}

fn missing(command: &'static str, argument: &'static str) -> ShellError {
    ShellError::MissingArgument { command, argument }
}

fn invalid_field(value: &str, expected: &'static str) -> ShellError {
    ShellError::InvalidValue {
        what: "field",
        value: value.to_string(),
        expected,
    }
}

/// Drive `session` from `input` until EOF or `quit`, writing views and
/// messages to `output`.
///
/// Parse and validation errors are reported and the loop continues.
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: &mut W,
    format: OutputFormat,
) -> crate::Result<()> {
    info!("Session started");
    render(session, output, format)?;

    for line in input.lines() {
        let line = line?;
        let parsed = match parse_line(&line, session.default_cat_type()) {
            Ok(Some(parsed)) => parsed,
            Ok(None) => continue,
            Err(err) => {
                message(output, format, &err.to_string())?;
                continue;
            }
        };

        match parsed {
            Input::Event(event) => match session.handle(event) {
                Ok(Outcome::Changed) => render(session, output, format)?,
                Ok(Outcome::Ignored) => message(output, format, "Nothing to do on this page.")?,
                Err(err) => {
                    debug!("Input rejected: {err}");
                    message(output, format, &err.to_string())?;
                }
            },
            Input::Show => render(session, output, format)?,
            Input::Help => write!(output, "{HELP}")?,
            Input::Quit => break,
        }
    }

    info!("Session ended with {} cat(s)", session.store().len());
    Ok(())
}

fn render<W: Write>(session: &Session, output: &mut W, format: OutputFormat) -> crate::Result<()> {
    let view = session.view();
    match format {
        OutputFormat::Plain => writeln!(output, "{view}")?,
        OutputFormat::Json => writeln!(output, "{}", serde_json::to_string(&view)?)?,
    }
    Ok(())
}

fn message<W: Write>(output: &mut W, format: OutputFormat, text: &str) -> crate::Result<()> {
    match format {
        OutputFormat::Plain => writeln!(output, "! {text}")?,
        OutputFormat::Json => writeln!(output, "{}", serde_json::json!({ "message": text }))?,
    }
    Ok(())
}
