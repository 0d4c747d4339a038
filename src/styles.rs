//! Loading the tag → attributes table from a styles file.
//!
//! `.toml` files use one table per tag:
//!
//! ```toml
//! [tags.em]
//! font = "Georgia-Italic"
//! font-size = 14
//! ```
//!
//! Any other extension is read as rule syntax (`em { font: Georgia-Italic }`).

use crate::cli::CliError;
use std::fs;
use std::path::Path;
use styled_text::syntax::declarations_to_attributes;
use styled_text::{AttributeTable, Declaration};

pub fn load_table(path: &Path) -> Result<AttributeTable, CliError> {
    let content = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: Some(path.to_path_buf()),
        source,
    })?;
    let table = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => table_from_toml(&content).map_err(|message| CliError::Styles {
            path: path.to_path_buf(),
            message,
        })?,
        _ => AttributeTable::from_stylesheet(&content),
    };
    log::debug!(
        target: "tagstring.styles",
        "loaded {} tag styles from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

fn table_from_toml(content: &str) -> Result<AttributeTable, String> {
    let root: toml::Table = toml::from_str(content).map_err(|err| err.to_string())?;
    let Some(tags) = root.get("tags") else {
        return Ok(AttributeTable::new());
    };
    let tags = tags
        .as_table()
        .ok_or_else(|| "`tags` must be a table".to_string())?;
    let mut table = AttributeTable::new();
    for (tag, properties) in tags {
        let properties = properties
            .as_table()
            .ok_or_else(|| format!("`tags.{tag}` must be a table"))?;
        let mut declarations = Vec::with_capacity(properties.len());
        for (name, value) in properties {
            let raw = match value {
                toml::Value::String(text) => text.clone(),
                toml::Value::Integer(number) => number.to_string(),
                toml::Value::Float(number) => number.to_string(),
                other => {
                    return Err(format!(
                        "`tags.{tag}.{name}` has unsupported type {}",
                        other.type_str()
                    ));
                }
            };
            declarations.push(Declaration::from((name.as_str(), raw.as_str())));
        }
        table.merge(tag.as_str(), &declarations_to_attributes(declarations));
    }
    Ok(table)
}
