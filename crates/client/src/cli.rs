//! Command-line parsing for the `raildash` binary.
//!
//! ```text
//! raildash [list] [QUERY...]     dashboard, optionally filtered
//! raildash show <TRAIN_ID>       one report
//! raildash help
//! ```

pub const USAGE: &str = "\
Usage:
  raildash [list] [QUERY...]   Show the dashboard, filtering rows by train ID or route
  raildash show <TRAIN_ID>     Show one train's fault report
  raildash help                Print this message

Environment:
  API_BASE           Backend base URL (default: http://localhost:3000)
  HTTP_TIMEOUT_SECS  Request timeout in seconds (default: 30)
  RUST_LOG           Log filter (default: raildash_client=warn)
";

/// A parsed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List { query: String },
    Show { train_id: String },
    Help,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CliError {
    #[error("missing train ID for `show`")]
    MissingTrainId,

    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    match args.next().as_deref() {
        None => Ok(Command::List {
            query: String::new(),
        }),
        Some("help" | "-h" | "--help") => Ok(Command::Help),
        Some("list") => Ok(Command::List {
            query: args.collect::<Vec<_>>().join(" "),
        }),
        Some("show") => {
            let train_id = args.next().ok_or(CliError::MissingTrainId)?;
            if let Some(extra) = args.next() {
                return Err(CliError::UnexpectedArgument(extra));
            }
            Ok(Command::Show { train_id })
        }
        Some(first) => {
            let mut words = vec![first.to_string()];
            words.extend(args);
            Ok(Command::List {
                query: words.join(" "),
            })
        }
    }
}
