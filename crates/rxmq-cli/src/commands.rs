//! Subcommand implementations.
//!
//! Each decoding command loads the file into a [`MemoryStore`] the way a
//! script would have it (`IN.0` / `IN.1`), runs the engine entry point and
//! reports what landed under `OUT.`.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{debug, info_span};

use rxmq_core::{
    ConnectionContext, Engine, EngineOptions, MemoryStore, Outcome, RecordKind, VariableStore,
};
use rxmq_symbols::{SymbolKind, SymbolTable, default_symbols};

use crate::cli::{EventArgs, InputArgs, RecordArgs, SymbolsArgs, TriggerArgs};
use crate::render::{Report, apply_table_style, collect_rows};

const INPUT_STEM: &str = "IN.";
const OUTPUT_STEM: &str = "OUT.";

fn read_message(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("read {}", path.display()))
}

/// Store holding `data` as an input stem.
fn input_store(data: &[u8]) -> MemoryStore {
    let mut store = MemoryStore::new();
    store.set_str(&format!("{INPUT_STEM}0"), &data.len().to_string());
    store.set(&format!("{INPUT_STEM}1"), data);
    store
}

fn stem_args() -> [Option<&'static [u8]>; 2] {
    [
        Some(INPUT_STEM.as_bytes()),
        Some(OUTPUT_STEM.as_bytes()),
    ]
}

fn report(store: &MemoryStore, outcome: Outcome) -> Report {
    Report {
        rows: collect_rows(store, OUTPUT_STEM),
        outcome: Some(outcome),
    }
}

pub fn run_event(options: EngineOptions, args: &EventArgs) -> Result<Report> {
    let path = &args.input.file;
    let span = info_span!("event", file = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let data = read_message(path)?;
    let engine = Engine::new(options).context("load symbol table")?;
    let mut store = input_store(&data);
    let outcome = engine.event(&mut store, &stem_args());
    debug!(
        bytes = data.len(),
        rc = outcome.status.rc,
        duration_ms = start.elapsed().as_millis(),
        "event command complete"
    );
    Ok(report(&store, outcome))
}

pub fn run_hxt(options: EngineOptions, args: &InputArgs) -> Result<Report> {
    let span = info_span!("hxt", file = %args.file.display());
    let _guard = span.enter();

    let data = read_message(&args.file)?;
    let engine = Engine::new(options).context("load symbol table")?;
    let mut store = input_store(&data);
    let outcome = engine.hxt(&mut store, &stem_args());
    Ok(report(&store, outcome))
}

pub fn run_tm(options: EngineOptions, args: &TriggerArgs) -> Result<Report> {
    let path = &args.input.file;
    let span = info_span!("tm", file = %path.display(), compact = args.compact);
    let _guard = span.enter();

    let data = read_message(path)?;
    let engine = Engine::new(options).context("load symbol table")?;
    let ctx = args.qmgr.as_deref().map(ConnectionContext::connected);
    let (store, outcome) = if args.compact {
        let mut store = MemoryStore::new();
        let outcome = engine.tm(
            &mut store,
            ctx.as_ref(),
            &[Some(data.as_slice()), Some(OUTPUT_STEM.as_bytes())],
        );
        (store, outcome)
    } else {
        let mut store = input_store(&data);
        let outcome = engine.tm(&mut store, ctx.as_ref(), &stem_args());
        (store, outcome)
    };
    Ok(report(&store, outcome))
}

/// Split `TAG=VALUE`.
fn parse_assignment(text: &str) -> Result<(&str, &str)> {
    match text.split_once('=') {
        Some((tag, value)) if !tag.is_empty() => Ok((tag, value)),
        _ => bail!("expected TAG=VALUE, got {text:?}"),
    }
}

pub fn run_record(args: &RecordArgs) -> Result<Report> {
    let kind = RecordKind::from(args.kind);
    let span = info_span!("record", kind = %kind);
    let _guard = span.enter();

    let mut store = MemoryStore::new();
    for assignment in &args.set {
        let (tag, value) = parse_assignment(assignment)?;
        store.set_str(&format!("{INPUT_STEM}{tag}"), value);
    }
    let inventory = kind
        .normalize(&mut store, INPUT_STEM, OUTPUT_STEM)
        .with_context(|| format!("normalize {kind} record"))?;
    debug!(fields = inventory.len(), "record normalized");
    Ok(Report {
        rows: collect_rows(&store, OUTPUT_STEM),
        outcome: None,
    })
}

/// Symbol rows, optionally of one kind, ordered by kind then value.
#[must_use]
pub fn symbols_table(table: &SymbolTable, kind: Option<SymbolKind>) -> Table {
    let mut symbols: Vec<_> = match kind {
        Some(kind) => table.of_kind(kind).collect(),
        None => table.iter().collect(),
    };
    symbols.sort_by_key(|symbol| (symbol.kind.as_str(), symbol.value));

    let mut out = Table::new();
    out.set_header(vec!["Kind", "Name", "Value", "Published as"]);
    apply_table_style(&mut out);
    for symbol in symbols {
        let published = symbol.kind.map_name().map_or_else(String::new, |map| {
            let name = match symbol.kind {
                SymbolKind::Attribute => symbol.short_name(),
                _ => symbol.name.as_str(),
            };
            format!("{map}.{}={name}", symbol.value)
        });
        out.add_row(vec![
            symbol.kind.to_string(),
            symbol.name.clone(),
            symbol.value.to_string(),
            published,
        ]);
    }
    out
}

pub fn run_symbols(args: &SymbolsArgs) -> Result<Table> {
    let table = default_symbols().context("load symbol table")?;
    Ok(symbols_table(table, args.kind.map(SymbolKind::from)))
}
