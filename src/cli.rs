//! Minimal CLI: documents → session → rendered schema descriptor
use std::path::PathBuf;
use clap::{Parser, Subcommand, Args};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::path_de::{decode_documents, select_pointer};
use crate::render::to_json;
use crate::session::Session;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// sketch the shape of JSON samples as a small schema descriptor
#[derive(Parser, Debug)]
#[command(version)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// infer and print the schema descriptor of the last sample
    Schema(SchemaOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// treat input as newline-delimited JSON (NDJSON)
    #[arg(long, default_value_t = false)]
    ndjson: bool,

    /// JSON Pointer to select a subnode in each document (e.g. /data/items/0/payload)
    #[arg(long)]
    json_pointer: Option<String>,

    /// JQ pre-process filter for each document; every output is one sample
    #[arg(long)]
    jq_expr: Option<String>,

    /// One or more inputs. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(clap::Parser, Debug)]
struct SchemaOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// pretty-print the descriptor as indented JSON
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load_process(&self, mut apply: impl FnMut(Value)) -> Result<()> {
        let source_paths = resolve_file_path_patterns(&self.input)?;
        if source_paths.is_empty() {
            return Err(Error::EmptyInput);
        }
        for source_path in source_paths {
            let origin = source_path.to_string_lossy().to_string();
            debug!(path = %origin, "reading input");
            let source = std::fs::read_to_string(&source_path)
                .map_err(|source| Error::Io { path: source_path.clone(), source })?;
            for doc in decode_documents(&source, &origin, self.ndjson)? {
                let doc = select_pointer(doc, self.json_pointer.as_deref(), &origin)?;
                match self.jq_expr.as_ref() {
                    None => apply(doc),
                    Some(jq_expr) => {
                        for value in crate::jq_exec::run_jaq(jq_expr, &doc)? {
                            apply(value);
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Schema(target) => {
                let mut session = Session::new();
                target.input_settings.load_process(|value| {
                    session.receive_sample(&value);
                })?;
                let out = target.format(&session)?;
                info!(samples = session.samples_seen(), "rendered schema of the last sample");
                match target.out.as_ref() {
                    Some(path) => {
                        if let Some(parent) = path.parent() {
                            std::fs::create_dir_all(parent)
                                .map_err(|source| Error::Io { path: parent.to_path_buf(), source })?;
                        }
                        std::fs::write(path, &out)
                            .map_err(|source| Error::Io { path: path.clone(), source })?;
                    }
                    None => println!("{out}"),
                }
                Ok(())
            }
        }
    }
}

impl SchemaOut {
    fn format(&self, session: &Session) -> Result<String> {
        if !self.pretty {
            return session.render();
        }
        let schema = session.schema().ok_or(Error::EmptyState)?;
        Ok(serde_json::to_string_pretty(&to_json(schema))?)
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{' ))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let before = out.len();
            for entry in glob::glob(pattern)? {
                out.push(entry?);
            }
            if out.len() == before {
                return Err(Error::NoMatches(pattern.to_string()));
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    fn schema_cli(args: &[&str]) -> CommandLineInterface {
        let mut argv = vec!["json-sketch", "schema"];
        argv.extend_from_slice(args);
        CommandLineInterface::try_parse_from(argv).unwrap()
    }

    fn target(cli: &CommandLineInterface) -> &SchemaOut {
        let Command::Schema(t) = &cli.cmd;
        t
    }

    fn collect(cli: &CommandLineInterface) -> Result<Vec<Value>> {
        let mut seen = Vec::new();
        target(cli).input_settings.load_process(|v| seen.push(v))?;
        Ok(seen)
    }

    #[test]
    fn glob_inputs_feed_every_file() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir, "a.json", r#"{"id": 42}"#);
        write(&dir, "b.json", r#"{"tags": ["foo"]}"#);
        let pattern = format!("{}/*.json", dir.path().display());
        let cli = schema_cli(&["--input", pattern.as_str()]);
        assert_eq!(collect(&cli).unwrap().len(), 2);
    }

    #[test]
    fn glob_matching_nothing_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let pattern = format!("{}/*.json", dir.path().display());
        let cli = schema_cli(&["--input", pattern.as_str()]);
        assert!(matches!(collect(&cli), Err(Error::NoMatches(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let cli = schema_cli(&["--input", missing.to_str().unwrap()]);
        assert!(matches!(collect(&cli), Err(Error::Io { .. })));
    }

    #[test]
    fn ndjson_pointer_and_jq_compose() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "feed.ndjson",
            "{\"data\": {\"rows\": [1, 2]}}\n{\"data\": {\"rows\": [\"x\"]}}\n",
        );
        let cli = schema_cli(&[
            "--input", path.to_str().unwrap(),
            "--ndjson",
            "--json-pointer", "/data",
            "--jq-expr", ".rows[]",
        ]);
        let seen = collect(&cli).unwrap();
        assert_eq!(seen, vec![serde_json::json!(1), serde_json::json!(2), serde_json::json!("x")]);
    }

    #[test]
    fn run_writes_last_sample_schema_to_out_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "samples.ndjson", "{\"id\": 42}\n{\"id\": \"abc\", \"ok\": true}\n");
        let out = dir.path().join("nested/schema.txt");
        let cli = schema_cli(&[
            "--input", path.to_str().unwrap(),
            "--ndjson",
            "--out", out.to_str().unwrap(),
        ]);
        cli.run().unwrap();
        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            r#"{ "type": "map", "properties": { "id": { "type": "string" }, "ok": { "type": "boolean" } } }"#,
        );
    }

    #[test]
    fn pretty_output_is_indented_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "one.json", r#"[1, "a"]"#);
        let cli = schema_cli(&["--input", path.to_str().unwrap(), "--pretty"]);
        let mut session = Session::new();
        target(&cli).input_settings.load_process(|v| session.receive_sample(&v)).unwrap();
        let out = target(&cli).format(&session).unwrap();
        assert!(out.contains('\n'));
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["oneOf"][1]["type"], "string");
    }

    #[test]
    fn empty_ndjson_file_leaves_nothing_to_render() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "empty.ndjson", "\n\n");
        let cli = schema_cli(&["--input", path.to_str().unwrap(), "--ndjson"]);
        assert!(matches!(cli.run(), Err(Error::EmptyState)));
    }
}
