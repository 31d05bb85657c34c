//! ntree REPL — an interactive shell over the namespace tree.
//!
//! Every command maps 1:1 onto an `ntree-core` operation:
//!
//! - `mkdir [-p] <path>` — create a directory
//! - `touch <path>` — create an empty file
//! - `rm <path>` — delete a file or directory (recursive)
//! - `mv <src> <dest>` — move/rename
//! - `cp <src> <dest>` — copy
//! - `ls [-l] [path]` — list children
//! - `tree [path]` — render the hierarchy
//! - `help`, `quit`/`exit`
//!
//! The tree lives only for the session; nothing is persisted except the
//! line-editor history.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

use ntree_core::{NamespaceTree, NodeKind};

pub mod paths;

/// REPL state: the namespace plus the exit flag.
pub struct Repl {
    tree: NamespaceTree,
    done: bool,
}

impl Repl {
    /// Create a REPL with an empty namespace (root only).
    pub fn new() -> Self {
        Self {
            tree: NamespaceTree::new(),
            done: false,
        }
    }

    /// True once `quit`/`exit` has been processed.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// The underlying namespace, for inspection.
    pub fn tree(&self) -> &NamespaceTree {
        &self.tree
    }

    /// Process a single line of input.
    ///
    /// Returns `Ok(Some(text))` for output, `Ok(None)` for silence
    /// (blank lines, comments, `quit`). Tree failures come back as
    /// `Err` so the caller can style them.
    pub fn process_line(&mut self, line: &str) -> Result<Option<String>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }
        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        let Some((&cmd, args)) = parts.split_first() else {
            return Ok(None);
        };

        match cmd {
            "mkdir" => self.mkdir(args),
            "touch" => self.touch(args),
            "rm" => self.rm(args),
            "mv" => self.mv(args),
            "cp" => self.cp(args),
            "ls" => self.ls(args),
            "tree" => self.tree_cmd(args),
            "help" => Ok(Some(HELP_TEXT.to_string())),
            "quit" | "exit" => {
                self.done = true;
                Ok(None)
            }
            _ => Ok(Some(format!(
                "unknown command: {cmd}\nType `help` for available commands."
            ))),
        }
    }

    fn mkdir(&mut self, args: &[&str]) -> Result<Option<String>> {
        match args {
            ["-p", path] => {
                self.tree.create_dir_all(path)?;
                Ok(Some(format!("created directory {path}")))
            }
            [path] => {
                self.tree.create(path, NodeKind::Directory)?;
                Ok(Some(format!("created directory {path}")))
            }
            _ => Ok(Some("usage: mkdir [-p] <path>".into())),
        }
    }

    fn touch(&mut self, args: &[&str]) -> Result<Option<String>> {
        match args {
            [path] => {
                self.tree.create(path, NodeKind::File)?;
                Ok(Some(format!("created file {path}")))
            }
            _ => Ok(Some("usage: touch <path>".into())),
        }
    }

    fn rm(&mut self, args: &[&str]) -> Result<Option<String>> {
        match args {
            [path] => {
                self.tree.delete(path)?;
                Ok(Some(format!("deleted {path}")))
            }
            _ => Ok(Some("usage: rm <path>".into())),
        }
    }

    fn mv(&mut self, args: &[&str]) -> Result<Option<String>> {
        match args {
            [src, dest] => {
                self.tree.rename(src, dest)?;
                Ok(Some(format!("moved {src} -> {dest}")))
            }
            _ => Ok(Some("usage: mv <src> <dest>".into())),
        }
    }

    fn cp(&mut self, args: &[&str]) -> Result<Option<String>> {
        match args {
            [src, dest] => {
                self.tree.copy(src, dest)?;
                Ok(Some(format!("copied {src} -> {dest}")))
            }
            _ => Ok(Some("usage: cp <src> <dest>".into())),
        }
    }

    fn ls(&self, args: &[&str]) -> Result<Option<String>> {
        let (long, rest) = match args {
            ["-l", rest @ ..] => (true, rest),
            rest => (false, rest),
        };
        let path = rest.first().copied().unwrap_or("/");
        let entries = self.tree.list(path)?;

        let lines: Vec<String> = if long {
            entries
                .iter()
                .map(|e| {
                    let kind_char = match e.kind {
                        NodeKind::Directory => 'd',
                        NodeKind::File => '-',
                    };
                    format!("{}  {}", kind_char, e.name)
                })
                .collect()
        } else {
            entries.iter().map(|e| e.name.clone()).collect()
        };
        Ok(Some(lines.join("\n")))
    }

    fn tree_cmd(&self, args: &[&str]) -> Result<Option<String>> {
        let rendered = match args {
            [] => self.tree.render(),
            [path] => self.tree.render_at(path)?,
            _ => return Ok(Some("usage: tree [path]".into())),
        };
        Ok(Some(rendered))
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}

const HELP_TEXT: &str = r#"ntree — in-memory namespace shell

Commands:
  mkdir [-p] <path>   Create a directory (-p creates missing parents)
  touch <path>        Create an empty file
  rm <path>           Delete a file or directory, subtree included
  mv <src> <dest>     Move/rename a file or directory
  cp <src> <dest>     Copy a file or directory
  ls [-l] [path]      List children of a directory (default /)
  tree [path]         Render the hierarchy (default /)
  help                Show this help
  quit, exit          Leave the shell

Paths are absolute and slash-delimited: /docs/notes.txt
The namespace is transient; it starts empty and vanishes on exit."#;

/// Run the REPL.
pub fn run() -> Result<()> {
    println!("ntree v{} — in-memory namespace shell", env!("CARGO_PKG_VERSION"));
    println!("Type `help` for commands, `quit` to exit.\n");

    let mut rl: Editor<(), DefaultHistory> =
        Editor::new().context("failed to create line editor")?;

    let history_path = paths::history_path();
    if rl.load_history(&history_path).is_err() {
        tracing::debug!(path = %history_path.display(), "no existing history");
    }

    let mut repl = Repl::new();

    loop {
        match rl.readline("ntree> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());

                match repl.process_line(&line) {
                    Ok(Some(output)) => println!("{output}"),
                    Ok(None) => {}
                    Err(e) => eprintln!("{}: {e}", "error".red()),
                }

                if repl.is_done() {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                eprintln!("{}: {err}", "error".red());
                break;
            }
        }
    }

    // Save history
    if let Some(parent) = history_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let _ = rl.save_history(&history_path);

    Ok(())
}
