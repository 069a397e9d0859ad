//! Answer and stroke files

use anyhow::{bail, Context};
use regform_core::{Answer, Point};
use std::collections::BTreeMap;
use std::path::Path;

/// Field name → answer, parsed by file extension (`.json`, `.yaml`/`.yml`, else TOML)
pub fn load_answers(path: &Path) -> anyhow::Result<BTreeMap<String, Answer>> {
    let content = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_answers(&content, extension(path))
        .with_context(|| format!("parsing {}", path.display()))
}

pub fn parse_answers(content: &str, extension: &str) -> anyhow::Result<BTreeMap<String, Answer>> {
    Ok(match extension {
        "json" => serde_json::from_str(content)?,
        "yaml" | "yml" => serde_yaml::from_str(content)?,
        _ => toml::from_str(content)?,
    })
}

/// Strokes as `[[{"x":..,"y":..}, ..], ..]`
pub fn load_strokes(path: &Path) -> anyhow::Result<Vec<Vec<Point>>> {
    let content = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let strokes: Vec<Vec<Point>> =
        serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
    if strokes.iter().all(Vec::is_empty) {
        bail!("{} contains no points", path.display());
    }
    Ok(strokes)
}

fn extension(path: &Path) -> &str {
    path.extension().and_then(|ext| ext.to_str()).unwrap_or("")
}
