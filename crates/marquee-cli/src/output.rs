use clap::ValueEnum;
use owo_colors::OwoColorize;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

/// User-facing output, routed through the selected format. Status messages
/// become `{type, message}` records in the JSON modes so scripted callers
/// never have to parse prose; `--quiet` drops everything except errors.
pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        let human = format!("{} {}", "✓".green(), msg.as_ref());
        self.status("success", &human, msg.as_ref());
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        let human = format!("{} {}", "⚠".yellow(), msg.as_ref());
        self.status("warning", &human, msg.as_ref());
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        self.status("info", msg.as_ref(), msg.as_ref());
    }

    /// A plain continuation line; an info record in the JSON modes.
    pub fn println(&self, msg: impl AsRef<str>) {
        self.info(msg);
    }

    /// Errors go to stderr and are shown even with `--quiet`.
    pub fn error(&self, msg: impl AsRef<str>) {
        match self.format {
            OutputFormat::Human => eprintln!("{} {}", "✗".red(), msg.as_ref()),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": "error", "message": msg.as_ref() }));
            }
        }
    }

    /// Structured command output. Ignored in quiet non-human runs.
    pub fn json(&self, data: &serde_json::Value) {
        if self.quiet && self.format != OutputFormat::Human {
            return;
        }
        self.print_json(data);
    }

    fn status(&self, kind: &str, human: &str, plain: &str) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => println!("{}", human),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": kind, "message": plain }));
            }
        }
    }

    fn print_json(&self, data: &serde_json::Value) {
        let rendered = match self.format {
            OutputFormat::JsonPretty => serde_json::to_string_pretty(data),
            _ => serde_json::to_string(data),
        };
        println!("{}", rendered.unwrap_or_default());
    }
}
