//! The interactive REPL.
//!
//! Each line is one command. `save`, `create` and `delete` feed a synthetic
//! file event through the session exactly as the watcher would; the other
//! commands query the current state.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use rasalint_engine::{FileEvent, FsSource, SourceProvider, TreeKind};
use rasalint_foundation::{Declaration, Result};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::render::{diagnostics_text, published_text, relative, tree_text};
use crate::session::Session;

/// Command names offered for completion.
const COMMANDS: [&str; 9] = [
    "save",
    "create",
    "delete",
    "diagnostics",
    "intents",
    "actions",
    "tree",
    "help",
    "quit",
];

/// One parsed REPL line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Treat a file as saved.
    Save(PathBuf),
    /// Treat a file as created.
    Create(PathBuf),
    /// Treat a file as deleted.
    Delete(PathBuf),
    /// Show diagnostics, for one file or all of them.
    Diagnostics(Option<PathBuf>),
    /// List declared intents with their usage.
    Intents,
    /// List declared actions and responses with their usage.
    Actions,
    /// Print one tree, or both.
    Tree(Option<TreeKind>),
    /// Print the command list.
    Help,
    /// Leave the REPL.
    Quit,
}

impl Command {
    /// Parses one line. Path arguments are returned as written.
    ///
    /// # Errors
    ///
    /// Returns a message naming the problem for unknown commands and
    /// missing or surplus arguments.
    pub fn parse(line: &str) -> std::result::Result<Self, String> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err("empty command".to_string());
        };
        let arg = words.next();
        if let Some(extra) = words.next() {
            return Err(format!("unexpected argument `{extra}`"));
        }

        let path = |arg: Option<&str>| {
            arg.map(PathBuf::from)
                .ok_or_else(|| format!("`{name}` needs a file path"))
        };
        let bare = |command: Self| match arg {
            Some(a) => Err(format!("`{name}` takes no arguments, got `{a}`")),
            None => Ok(command),
        };

        match name {
            "save" | "s" => path(arg).map(Self::Save),
            "create" | "c" => path(arg).map(Self::Create),
            "delete" | "d" => path(arg).map(Self::Delete),
            "diagnostics" | "diag" => Ok(Self::Diagnostics(arg.map(PathBuf::from))),
            "intents" => bare(Self::Intents),
            "actions" => bare(Self::Actions),
            "tree" => match arg {
                None => Ok(Self::Tree(None)),
                Some("domain") => Ok(Self::Tree(Some(TreeKind::Domain))),
                Some("training" | "data") => Ok(Self::Tree(Some(TreeKind::TrainingData))),
                Some(other) => Err(format!("unknown tree `{other}` (domain or training)")),
            },
            "help" | "?" => bare(Self::Help),
            "quit" | "exit" | "q" => bare(Self::Quit),
            other => Err(format!("unknown command `{other}` (type `help`)")),
        }
    }
}

/// What evaluating a line produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Text for stdout.
    Output(String),
    /// A message for stderr.
    Error(String),
    /// The user asked to leave.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor, P: SourceProvider = FsSource> {
    /// The line editor for input.
    editor: E,

    /// The project being checked.
    session: Session<P>,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor, FsSource> {
    /// Creates a REPL over `session` with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor, P: SourceProvider> Repl<E, P> {
    /// Creates a REPL with the given editor.
    pub fn with_editor(mut editor: E, session: Session<P>) -> Self {
        editor.set_keywords(COMMANDS.iter().map(ToString::to_string).collect());
        Self {
            editor,
            session,
            show_banner: true,
            prompt: "rasalint> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session<P> {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session<P> {
        &mut self.session
    }

    /// Runs the REPL loop until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        while self.read_eval_print()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let line = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        if line.trim().is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&line);

        match self.eval(&line) {
            Reply::Output(text) => {
                print!("{text}");
                let _ = io::stdout().flush();
            }
            Reply::Error(message) => eprintln!("\x1b[31mError: {message}\x1b[0m"),
            Reply::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Evaluates one line against the session.
    pub fn eval(&mut self, line: &str) -> Reply {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(message) => return Reply::Error(message),
        };

        let root = self.session.root().to_path_buf();
        let output = match command {
            Command::Save(path) => self.event(FileEvent::Saved(resolve(&root, &path))),
            Command::Create(path) => self.event(FileEvent::Created(resolve(&root, &path))),
            Command::Delete(path) => self.event(FileEvent::Deleted(resolve(&root, &path))),
            Command::Diagnostics(None) => diagnostics_text(self.session.state(), &root),
            Command::Diagnostics(Some(path)) => {
                let file = resolve(&root, &path);
                let diagnostics = self.session.state().diagnostics_for(&file).to_vec();
                published_text(&[(file, diagnostics)], &root)
            }
            Command::Intents => self.intents(),
            Command::Actions => self.actions(),
            Command::Tree(kind) => self.trees(kind),
            Command::Help => help_text(),
            Command::Quit => return Reply::Quit,
        };
        Reply::Output(output)
    }

    fn event(&mut self, event: FileEvent) -> String {
        let published = self.session.handle(event);
        if published.is_empty() {
            "nothing to publish\n".to_string()
        } else {
            published_text(&published, self.session.root())
        }
    }

    fn intents(&self) -> String {
        let state = self.session.state();
        let used = state.training.used_intents();
        let trained = state.training.trained_intents();
        let mut out = String::new();
        for decl in state.domain.intent_declarations() {
            let mut notes = Vec::new();
            if !used.contains(&decl.name.as_str()) {
                notes.push("unused");
            }
            if !trained.contains(&decl.name.as_str()) {
                notes.push("untrained");
            }
            self.listing(&mut out, decl, &notes);
        }
        out
    }

    fn actions(&self) -> String {
        let state = self.session.state();
        let used = state.training.used_actions();
        let mut out = String::new();
        for decl in state.domain.action_declarations() {
            let notes: &[&str] = if used.contains(&decl.name.as_str()) {
                &[]
            } else {
                &["unused"]
            };
            self.listing(&mut out, decl, notes);
        }
        out
    }

    fn listing(&self, out: &mut String, decl: &Declaration, notes: &[&str]) {
        let at = format!(
            "{}:{}",
            relative(self.session.root(), &decl.file).display(),
            decl.position
        );
        if notes.is_empty() {
            let _ = writeln!(out, "{:<24} {at}", decl.name);
        } else {
            let _ = writeln!(out, "{:<24} {at}  ({})", decl.name, notes.join(", "));
        }
    }

    fn trees(&self, kind: Option<TreeKind>) -> String {
        let root = self.session.root();
        let mut out = String::new();
        if kind != Some(TreeKind::TrainingData) {
            out.push_str(&tree_text(self.session.domain_tree(), root));
        }
        if kind != Some(TreeKind::Domain) {
            out.push_str(&tree_text(self.session.training_tree(), root));
        }
        out
    }

    /// Prints the welcome banner.
    fn print_banner(&self) {
        println!("\x1b[1;36mrasalint\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!("Project: {}", self.session.root().display());
        println!("Type `help` for commands. Use Ctrl+D to exit.\n");
        let _ = io::stdout().flush();
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

fn help_text() -> String {
    "\
save <file>          rescan a file as if it was saved
create <file>        rescan a file as if it was created
delete <file>        forget a file as if it was deleted
diagnostics [file]   show current diagnostics
intents              list declared intents
actions              list declared actions and responses
tree [domain|training]
                     print the tree views
help                 show this list
quit                 leave
"
    .to_string()
}
