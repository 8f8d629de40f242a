//! Tables and JSON for decoded variables.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use serde::Serialize;

use rxmq_core::{INVENTORY_TAG, MemoryStore, Outcome, VariableStore};

/// How a value is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "encoding", content = "value", rename_all = "lowercase")]
pub enum Rendered {
    Text(String),
    Hex(String),
}

impl Rendered {
    /// Printable ASCII as text, anything else as hex.
    #[must_use]
    pub fn of(value: &[u8]) -> Self {
        if value.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
            Self::Text(String::from_utf8_lossy(value).into_owned())
        } else {
            Self::Hex(hex::encode(value))
        }
    }

    fn cell(&self) -> Cell {
        match self {
            Self::Text(text) => Cell::new(text),
            Self::Hex(hex) => Cell::new(format!("0x{hex}")).fg(Color::DarkGrey),
        }
    }
}

/// One output variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub tag: String,
    pub listed: bool,
    #[serde(flatten)]
    pub value: Rendered,
}

/// Everything a decoding command prints.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Engine result; absent for commands that are not entry points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    pub rows: Vec<Row>,
}

impl Report {
    /// Whether the command should exit successfully.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.outcome.as_ref().is_none_or(Outcome::is_ok)
    }
}

/// Variables under `stem`: inventory order first, then the unlisted ones.
#[must_use]
pub fn collect_rows(store: &MemoryStore, stem: &str) -> Vec<Row> {
    let inventory = store
        .get_str(&format!("{stem}{INVENTORY_TAG}"))
        .unwrap_or_default();
    let listed: Vec<&str> = inventory.split_whitespace().collect();

    let mut rows: Vec<Row> = listed
        .iter()
        .filter_map(|tag| {
            let value = store.get(&format!("{stem}{tag}"))?;
            Some(Row {
                tag: (*tag).to_string(),
                listed: true,
                value: Rendered::of(&value),
            })
        })
        .collect();
    for (path, value) in store.with_prefix(stem) {
        let tag = &path[stem.len()..];
        if tag == INVENTORY_TAG || listed.contains(&tag) {
            continue;
        }
        rows.push(Row {
            tag: tag.to_string(),
            listed: false,
            value: Rendered::of(value),
        });
    }
    rows
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

#[must_use]
pub fn rows_table(rows: &[Row]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Tag"), header_cell("Value")]);
    apply_table_style(&mut table);
    for row in rows {
        let tag = if row.listed {
            Cell::new(&row.tag)
        } else {
            Cell::new(&row.tag).fg(Color::DarkGrey)
        };
        table.add_row(vec![tag, row.value.cell()]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_values_become_hex() {
        assert_eq!(Rendered::of(b"APP.INPUT "), Rendered::Text("APP.INPUT ".into()));
        assert_eq!(Rendered::of(&[0, 1, 0xFF]), Rendered::Hex("0001ff".into()));
    }

    #[test]
    fn test_rows_follow_inventory() {
        let mut store = MemoryStore::new();
        store.set_str("OUT.ZLIST", "TYPE NAME");
        store.set_str("OUT.NAME", "DLH");
        store.set_str("OUT.TYPE", "DLH");
        store.set("OUT.PL", &[0, 0]);

        let rows = collect_rows(&store, "OUT.");
        let tags: Vec<(&str, bool)> = rows.iter().map(|r| (r.tag.as_str(), r.listed)).collect();
        assert_eq!(tags, vec![("TYPE", true), ("NAME", true), ("PL", false)]);
        insta::assert_json_snapshot!(rows[2], @r#"
        {
          "tag": "PL",
          "listed": false,
          "encoding": "hex",
          "value": "0000"
        }
        "#);
    }
}
