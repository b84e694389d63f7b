//! Interactive operator shell around a [`Session`].
//!
//! The shell owns the line editor and the session; every command either
//! prints a result on stdout or a recoverable complaint on stderr, and the
//! loop keeps going until `quit` or end of input.

use crate::{
    command::{ExportFormat, ShellCommand},
    render,
};
use anyhow::Result;
use camino::Utf8Path;
use rustyline::{DefaultEditor, error::ReadlineError};
use skustitch_core::{
    session::{Session, SessionError},
    types::PromoKey,
};
use std::fs;
use tracing::info;

const PROMPT: &str = "skustitch> ";
const PASTE_TERMINATOR: &str = ".";
const PASS_ATTEMPTS: usize = 3;

const HELP: &str = "\
commands:
  load <file>             read promo JSON from a file
  paste                   read promo JSON typed or pasted into the terminal
  promos                  list loaded promos
  rows                    show the flat promo/SKU table
  preview <promo> [skus]  dry-run a merge without applying it
  merge <promo> [skus]    merge SKUs into a promo (prompts when no inline text)
  export <fmt> [file]     render json, csv, or txt output
  stats [reset]           show or clear session counters
  help                    show this help
  quit                    leave the shell

quote a promo key that contains spaces: merge \"spring bundle\" 225807";

///
/// Shell
///

pub struct Shell {
    editor: DefaultEditor,
    session: Session,
}

impl Shell {
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            session: Session::new(),
        })
    }

    /// Ask for the operator passphrase, allowing a few attempts. Ctrl-C or
    /// Ctrl-D counts as giving up.
    pub fn authenticate(&mut self, expected: &str) -> Result<bool> {
        for attempt in 1..=PASS_ATTEMPTS {
            match self.editor.readline("passphrase: ") {
                Ok(entered) => {
                    if entered == expected {
                        return Ok(true);
                    }
                    if attempt < PASS_ATTEMPTS {
                        eprintln!("passphrase mismatch; try again");
                    }
                }
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(false),
                Err(err) => return Err(err.into()),
            }
        }

        Ok(false)
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run(&mut self, preload: Option<&Utf8Path>) -> Result<()> {
        if let Some(path) = preload {
            self.load_file(path);
        }

        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(line);
                    match ShellCommand::parse(line) {
                        Ok(command) => {
                            if !self.dispatch(command) {
                                break;
                            }
                        }
                        Err(err) => eprintln!("{err}"),
                    }
                }
                // Ctrl-C drops the current line, Ctrl-D leaves the shell.
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err.into()),
            }
        }

        Ok(())
    }

    /// Returns false when the shell should exit.
    fn dispatch(&mut self, command: ShellCommand) -> bool {
        match command {
            ShellCommand::Load { path } => self.load_file(&path),
            ShellCommand::Paste => match self.gather_lines("json> ") {
                Ok(Some(text)) => self.load_text(&text),
                Ok(None) => eprintln!("cancelled"),
                Err(err) => eprintln!("{err}"),
            },
            ShellCommand::Promos => match self.session.store() {
                Some(store) => println!("{}", render::promo_summary(store)),
                None => eprintln!("no promo data loaded"),
            },
            ShellCommand::Rows => {
                if self.session.has_store() {
                    println!("{}", render::rows_table(&self.session.rows()));
                } else {
                    eprintln!("no promo data loaded");
                }
            }
            ShellCommand::Preview { promo, skus } => match self.resolve_skus(skus) {
                Ok(Some(text)) => self.preview(&PromoKey::from(promo), &text),
                Ok(None) => eprintln!("cancelled"),
                Err(err) => eprintln!("{err}"),
            },
            ShellCommand::Merge { promo, skus } => match self.resolve_skus(skus) {
                Ok(Some(text)) => self.merge(&PromoKey::from(promo), &text),
                Ok(None) => eprintln!("cancelled"),
                Err(err) => eprintln!("{err}"),
            },
            ShellCommand::Export { format, path } => self.export(format, path.as_deref()),
            ShellCommand::Stats { reset } => {
                if reset {
                    self.session.reset_counters();
                    println!("counters reset");
                } else {
                    println!("{}", render::counters(self.session.counters()));
                }
            }
            ShellCommand::Help => println!("{HELP}"),
            ShellCommand::Quit => return false,
        }

        true
    }

    fn load_file(&mut self, path: &Utf8Path) {
        match fs::read_to_string(path) {
            Ok(text) => self.load_text(&text),
            Err(err) => eprintln!("failed to read {path}: {err}"),
        }
    }

    fn load_text(&mut self, text: &str) {
        match self.session.load_json(text) {
            Ok(report) => {
                info!(promos = report.accepted.len(), "store installed");
                println!("{}", render::load_report(&report));
            }
            Err(SessionError::NoPromos(report)) => {
                eprintln!("no promos found in input");
                eprintln!("{}", render::no_promos(&report));
            }
            Err(err) => eprintln!("{err}"),
        }
    }

    fn preview(&self, key: &PromoKey, sku_text: &str) {
        match self.session.preview_merge(key, sku_text) {
            Ok(outcome) => {
                println!("{}", render::merge_report(outcome.report()));
                if let Some(record) = outcome.store().get(key) {
                    println!("would leave {} with {} SKUs", key.as_str(), record.sku_count());
                }
                println!("preview only; nothing applied");
            }
            Err(err) => eprintln!("{err}"),
        }
    }

    fn merge(&mut self, key: &PromoKey, sku_text: &str) {
        match self.session.merge(key, sku_text) {
            Ok(report) => {
                info!(
                    promo = key.as_str(),
                    added = report.added.len(),
                    skipped = report.skipped.len(),
                    "merge applied"
                );
                println!("{}", render::merge_report(&report));
            }
            Err(err) => eprintln!("{err}"),
        }
    }

    fn export(&mut self, format: ExportFormat, path: Option<&Utf8Path>) {
        let rendered = match format {
            ExportFormat::Json => self.session.export_json(),
            ExportFormat::Csv => self.session.export_csv(),
            ExportFormat::List => self.session.export_list(),
        };
        let text = match rendered {
            Ok(text) => text,
            Err(err) => {
                eprintln!("{err}");
                return;
            }
        };

        match path {
            Some(path) => match fs::write(path, &text) {
                Ok(()) => {
                    info!(bytes = text.len(), path = path.as_str(), "export written");
                    println!("wrote {} bytes to {path}", text.len());
                }
                Err(err) => eprintln!("failed to write {path}: {err}"),
            },
            None => println!("{text}"),
        }
    }

    /// Inline SKU text wins; otherwise prompt for pasted lines. `None`
    /// means the operator cancelled.
    fn resolve_skus(&mut self, inline: String) -> Result<Option<String>> {
        if inline.is_empty() {
            self.gather_lines("skus> ")
        } else {
            Ok(Some(inline))
        }
    }

    fn gather_lines(&mut self, prompt: &str) -> Result<Option<String>> {
        println!("end with '{PASTE_TERMINATOR}' on its own line (ctrl-c cancels)");
        let mut lines = Vec::new();
        loop {
            match self.editor.readline(prompt) {
                Ok(line) => {
                    if line.trim() == PASTE_TERMINATOR {
                        return Ok(Some(lines.join("\n")));
                    }
                    lines.push(line);
                }
                Err(ReadlineError::Interrupted) => return Ok(None),
                Err(ReadlineError::Eof) => return Ok(Some(lines.join("\n"))),
                Err(err) => return Err(err.into()),
            }
        }
    }
}
