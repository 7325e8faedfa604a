//! CLI: compare | search | session
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::Value;

use json_compare::{input, ComparisonReport, ReportOptions, SessionStore};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// compare two JSON documents path by path, search them, and keep named sessions
#[derive(Parser, Debug)]
#[command(name = "json-compare", version)]
pub struct CommandLineInterface {
    /// disable colored output
    #[arg(long, global = true, default_value_t = false)]
    no_color: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// compare two documents and print statistics (or a JSON report)
    Compare(CompareOut),
    /// print the paths matching a query, one JSON Pointer per line
    Search(SearchOut),
    /// manage saved left/right sessions
    Session(SessionOut),
}

#[derive(Args, Debug, Clone)]
struct ReportSettings {
    /// list every path with its classification
    #[arg(long, default_value_t = false)]
    paths: bool,

    /// highlight paths matching this query on both sides
    #[arg(long)]
    search: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(clap::Parser, Debug)]
struct CompareOut {
    /// left document ('-' for stdin)
    #[arg(long, short)]
    left: PathBuf,

    /// right document ('-' for stdin)
    #[arg(long, short)]
    right: PathBuf,

    /// JSON Pointer to select a subnode of both documents (e.g. /data/items/0)
    #[arg(long)]
    json_pointer: Option<String>,

    #[command(flatten)]
    report: ReportSettings,
}

#[derive(clap::Parser, Debug)]
struct SearchOut {
    /// document to search ('-' for stdin)
    #[arg(long, short)]
    input: PathBuf,

    #[arg(long, short)]
    query: String,

    /// JSON Pointer to select a subnode before searching
    #[arg(long)]
    json_pointer: Option<String>,
}

#[derive(clap::Parser, Debug)]
struct SessionOut {
    /// session store file
    #[arg(long, env = "JSON_COMPARE_SESSIONS", default_value = "json-compare-sessions.json")]
    store: PathBuf,

    #[command(subcommand)]
    cmd: SessionCommand,
}

#[derive(Subcommand, Debug)]
enum SessionCommand {
    /// save the two files as a named session
    Save {
        #[arg(long)]
        name: String,
        #[arg(long, short)]
        left: PathBuf,
        #[arg(long, short)]
        right: PathBuf,
    },
    /// list saved sessions, newest first
    List,
    /// print the stored texts of a session
    Show { id: String },
    /// compare the two sides of a saved session
    Compare {
        id: String,
        #[command(flatten)]
        report: ReportSettings,
    },
    /// delete a session by id
    Delete { id: String },
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> Result<()> {
        if self.no_color {
            colored::control::set_override(false);
        }
        match &self.cmd {
            Command::Compare(target) => {
                let pointer = target.json_pointer.as_deref();
                let left = input::load(&target.left, pointer).context("failed to load left document")?;
                let right = input::load(&target.right, pointer).context("failed to load right document")?;
                target.report.emit(left, right)
            }
            Command::Search(target) => {
                let root = input::load(&target.input, target.json_pointer.as_deref())
                    .context("failed to load document")?;
                let lines = json_compare::search(&root, &target.query)
                    .iter()
                    .map(|path| path.to_string())
                    .collect::<Vec<_>>();
                write_output(None, &lines.join("\n"))
            }
            Command::Session(target) => target.run(),
        }
    }
}

impl SessionOut {
    fn run(&self) -> Result<()> {
        let mut store = SessionStore::open(&self.store)
            .with_context(|| format!("failed to open session store {}", self.store.display()))?;
        match &self.cmd {
            SessionCommand::Save { name, left, right } => {
                let left = input::read_source(left)?;
                let right = input::read_source(right)?;
                let session = store.save(name, &left, &right)?;
                println!("{}", session.id);
            }
            SessionCommand::List => {
                for session in store.list() {
                    println!("{}\t{}\t{}", session.id, session.timestamp.to_rfc3339(), session.name);
                }
            }
            SessionCommand::Show { id } => {
                let session = store.get(id)?;
                println!("{}", serde_json::to_string_pretty(session)?);
            }
            SessionCommand::Compare { id, report } => {
                let session = store.get(id)?;
                let (left, right) = session.parse()?;
                report.emit(left, right)?;
            }
            SessionCommand::Delete { id } => {
                let removed = store.delete(id)?;
                eprintln!("deleted session {:?}", removed.name);
            }
        }
        Ok(())
    }
}

impl ReportSettings {
    fn emit(&self, left: Value, right: Value) -> Result<()> {
        let options = ReportOptions { include_paths: self.paths, query: self.search.clone() };
        let report = ComparisonReport::build(left, right, &options);
        let rendered = match self.format {
            OutputFormat::Text => report.render_text(),
            OutputFormat::Json => report.to_json_pretty()?,
        };
        write_output(self.out.as_ref(), &rendered)
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn write_output(out: Option<&PathBuf>, rendered: &str) -> Result<()> {
    match out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(out, rendered).with_context(|| format!("failed to write {}", out.display()))?;
            log::info!("wrote {}", out.display());
        }
        None if rendered.is_empty() => {}
        None => println!("{}", rendered.trim_end()),
    }
    Ok(())
}
