//! Shell command grammar: one input line in, one command out.

use camino::Utf8PathBuf;
use thiserror::Error as ThisError;

///
/// CommandError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum CommandError {
    #[error("unknown command '{0}'; try 'help'")]
    Unknown(String),

    #[error("'{command}' takes {expected}")]
    Usage {
        command: &'static str,
        expected: &'static str,
    },

    #[error("unknown export format '{0}'; expected json, csv, or txt")]
    UnknownFormat(String),
}

///
/// ExportFormat
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExportFormat {
    Json,
    Csv,
    List,
}

impl ExportFormat {
    fn parse(raw: &str) -> Result<Self, CommandError> {
        match raw {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "txt" | "list" => Ok(Self::List),
            other => Err(CommandError::UnknownFormat(other.to_string())),
        }
    }
}

///
/// ShellCommand
///
/// `skus` text for preview/merge is the rest of the line verbatim; when it
/// is empty the shell prompts for pasted lines instead.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ShellCommand {
    Load { path: Utf8PathBuf },
    Paste,
    Promos,
    Rows,
    Preview { promo: String, skus: String },
    Merge { promo: String, skus: String },
    Export {
        format: ExportFormat,
        path: Option<Utf8PathBuf>,
    },
    Stats { reset: bool },
    Help,
    Quit,
}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let trimmed = line.trim();
        let (head, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (trimmed, ""),
        };

        match head {
            "load" => {
                if rest.is_empty() {
                    return Err(usage("load", "a file path"));
                }
                Ok(Self::Load {
                    path: Utf8PathBuf::from(rest),
                })
            }
            "paste" => bare(Self::Paste, "paste", rest),
            "promos" => bare(Self::Promos, "promos", rest),
            "rows" => bare(Self::Rows, "rows", rest),
            "preview" => target_and_skus(rest, "preview")
                .map(|(promo, skus)| Self::Preview { promo, skus }),
            "merge" => {
                target_and_skus(rest, "merge").map(|(promo, skus)| Self::Merge { promo, skus })
            }
            "export" => {
                if rest.is_empty() {
                    return Err(usage("export", "a format (json, csv, or txt)"));
                }
                let (format, path) = match rest.split_once(char::is_whitespace) {
                    Some((format, path)) => (format, Some(Utf8PathBuf::from(path.trim()))),
                    None => (rest, None),
                };

                Ok(Self::Export {
                    format: ExportFormat::parse(format)?,
                    path,
                })
            }
            "stats" => match rest {
                "" => Ok(Self::Stats { reset: false }),
                "reset" => Ok(Self::Stats { reset: true }),
                _ => Err(usage("stats", "no arguments or 'reset'")),
            },
            "help" | "?" => bare(Self::Help, "help", rest),
            "quit" | "exit" => bare(Self::Quit, "quit", rest),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

const fn usage(command: &'static str, expected: &'static str) -> CommandError {
    CommandError::Usage { command, expected }
}

fn bare(command: ShellCommand, name: &'static str, rest: &str) -> Result<ShellCommand, CommandError> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(usage(name, "no arguments"))
    }
}

// Promo keys are arbitrary JSON strings, so a quoted key may contain
// whitespace; bare keys end at the first whitespace.
fn target_and_skus(rest: &str, command: &'static str) -> Result<(String, String), CommandError> {
    if rest.is_empty() {
        return Err(usage(command, "a promo key"));
    }
    if let Some(quoted) = rest.strip_prefix('"') {
        let Some((promo, skus)) = quoted.split_once('"') else {
            return Err(usage(command, "a matched quote around the promo key"));
        };
        if promo.is_empty() {
            return Err(usage(command, "a promo key"));
        }

        return Ok((promo.to_string(), skus.trim().to_string()));
    }
    let (promo, skus) = match rest.split_once(char::is_whitespace) {
        Some((promo, skus)) => (promo, skus.trim()),
        None => (rest, ""),
    };

    Ok((promo.to_string(), skus.to_string()))
}
