use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use casc_diff::compare_maps;
use casc_query::{query, Pattern};
use casc_rules::RulesConfig;
use casc_types::{ChangeRecord, Map, Value};
use colored::Colorize;

use crate::cli::{Cli, Command, DiffArgs, OutputFormat, QueryArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Command::Diff(args) => cmd_diff(args, &cli.format),
        Command::Query(args) => cmd_query(args, &cli.format),
    }
}

fn cmd_diff(args: DiffArgs, format: &OutputFormat) -> anyhow::Result<ExitCode> {
    let old = load_tree(&args.old)?;
    let new = load_tree(&args.new)?;
    let mut output = compare_maps(&old, &new);

    let config = match &args.rules {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading rules file {}", path.display()))?;
            RulesConfig::from_toml_str(&raw)
                .with_context(|| format!("parsing rules file {}", path.display()))?
        }
        None => RulesConfig::default(),
    };
    let pipeline = config.build_pipeline()?;
    let report = pipeline.run(&mut output.diffs);
    tracing::debug!(
        rules = pipeline.rule_count(),
        removed = report.total_removed(),
        "filtering complete"
    );

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&render_map(&output.diffs))?);
        }
        OutputFormat::Text => print_summary(&output.diffs),
    }

    // Batch-tool contract: nonzero exit while diffs remain.
    if output.diffs.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn cmd_query(args: QueryArgs, format: &OutputFormat) -> anyhow::Result<ExitCode> {
    let tree = load_tree(&args.file)?;
    let pattern = Pattern::parse(&args.pattern)?;

    let mut hits = 0usize;
    for (path, value) in query(&tree, &pattern, args.only_maps)? {
        hits += 1;
        match format {
            OutputFormat::Json => println!(
                "{}",
                serde_json::json!({"path": path.to_string(), "value": render(value)})
            ),
            OutputFormat::Text => {
                println!("{} = {}", path.to_string().yellow(), render(value))
            }
        }
    }
    if matches!(format, OutputFormat::Text) {
        println!("{} hits", hits.to_string().bold());
    }
    Ok(ExitCode::SUCCESS)
}

/// Load a JSON snapshot file as a mapping tree.
fn load_tree(path: &Path) -> anyhow::Result<Map> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    let json: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("parsing snapshot {}", path.display()))?;
    match Value::from(json) {
        Value::Map(map) => Ok(map),
        other => anyhow::bail!(
            "{}: snapshot root must be an object, got {}",
            path.display(),
            other.kind()
        ),
    }
}

fn print_summary(diffs: &Map) {
    println!("###########");
    if diffs.is_empty() {
        println!("{} no diffs left", "✓".green().bold());
        println!("###########");
        return;
    }

    println!("Num diffs: {}", diffs.len().to_string().bold());
    println!("Changed keys:");
    for key in diffs.keys() {
        println!("  {}", key.to_string().yellow());
    }
    if let Some((key, value)) = diffs.iter().next() {
        println!("First diff: {}", key.to_string().yellow().bold());
        match serde_json::to_string_pretty(&render(value)) {
            Ok(text) => println!("{text}"),
            Err(_) => println!("{value:?}"),
        }
    }
    println!("###########");
}

/// Render a tree value as reader-friendly JSON. Change records become
/// small tagged objects instead of serde's enum encoding.
fn render(value: &Value) -> serde_json::Value {
    match value {
        Value::Absent | Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::json!(b),
        Value::Int(i) => serde_json::json!(i),
        Value::Float(f) => serde_json::json!(f),
        Value::Str(s) => serde_json::json!(s),
        Value::Sym(s) => serde_json::json!(s),
        Value::Seq(items) => serde_json::Value::Array(items.iter().map(render).collect()),
        Value::Map(map) => render_map(map),
        Value::Change(record) => match record.as_ref() {
            ChangeRecord::Added(new) => serde_json::json!({"+added": render(new)}),
            ChangeRecord::Removed(old) => serde_json::json!({"-removed": render(old)}),
            ChangeRecord::Changed { old, new } => {
                serde_json::json!({"~changed": {"old": render(old), "new": render(new)}})
            }
        },
    }
}

fn render_map(map: &Map) -> serde_json::Value {
    serde_json::Value::Object(
        map.iter()
            .map(|(key, value)| (key.to_string(), render(value)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use casc_types::Key;
    use std::io::Write;

    fn write_snapshot(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_tree_reads_json_object() {
        let file = write_snapshot(r#"{"A": {"0": 1}}"#);
        let tree = load_tree(file.path()).unwrap();
        let a = tree.get(&Key::from("A")).and_then(Value::as_map).unwrap();
        assert_eq!(a.get(&Key::Index(0)), Some(&Value::Int(1)));
    }

    #[test]
    fn load_tree_rejects_non_object_root() {
        let file = write_snapshot("[1, 2, 3]");
        let err = load_tree(file.path()).unwrap_err();
        assert!(err.to_string().contains("must be an object"));
    }

    #[test]
    fn load_tree_rejects_invalid_json() {
        let file = write_snapshot("{not json");
        assert!(load_tree(file.path()).is_err());
    }

    #[test]
    fn render_tags_change_records() {
        let value = Value::change(ChangeRecord::Changed {
            old: Value::Int(1),
            new: Value::Int(2),
        });
        assert_eq!(
            render(&value),
            serde_json::json!({"~changed": {"old": 1, "new": 2}})
        );

        let added = Value::change(ChangeRecord::Added(Value::Str("x".into())));
        assert_eq!(render(&added), serde_json::json!({"+added": "x"}));
    }

    #[test]
    fn render_maps_use_plain_keys() {
        let mut map = Map::new();
        map.insert(Key::Index(3), Value::Bool(true));
        map.insert(Key::from("name"), Value::Null);
        assert_eq!(
            render_map(&map),
            serde_json::json!({"3": true, "name": null})
        );
    }
}
