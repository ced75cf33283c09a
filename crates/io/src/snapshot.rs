//! Snapshot document codec.
//!
//! The portable form of the registry is a JSON object mapping sheet name
//! to `{ "data": { "row-col": text, ... }, "displayField": "name"|"content" }`.
//! Top-level key order is semantic: the first key becomes the active sheet
//! on import (hence serde_json's `preserve_order` feature).
//!
//! Export is canonical: header-row entries are dropped and the remaining
//! keys are re-emitted sorted by row then column, so round-tripped files
//! are byte-comparable across runs for the same content.
//!
//! Import is strict: per-sheet entries that are not objects, non-string
//! cell values, unparseable cell keys, and unknown `displayField` values
//! are all rejected with `MalformedDocument`, leaving the caller's
//! registry untouched. Missing `data` is fine (empty sheet); whatever the
//! document held at (0,0)/(0,1) is silently replaced by the structural
//! header labels.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde_json::{Map, Value};

use qrgrid_engine::coord::Coord;
use qrgrid_engine::sheet::{DisplayField, Sheet};
use qrgrid_engine::workbook::Workbook;

use crate::error::SnapshotError;

fn display_field_str(field: DisplayField) -> &'static str {
    match field {
        DisplayField::Name => "name",
        DisplayField::Content => "content",
    }
}

/// Encode the registry as a snapshot document. Never mutates live state.
pub fn encode(workbook: &Workbook) -> Map<String, Value> {
    let mut doc = Map::new();
    for sheet in workbook.sheets() {
        let mut entries: Vec<(Coord, &str)> = sheet
            .entries()
            .filter(|(coord, _)| !coord.is_header())
            .collect();
        entries.sort_by_key(|(coord, _)| *coord);

        let mut data = Map::new();
        for (coord, text) in entries {
            data.insert(coord.to_key(), Value::String(text.to_string()));
        }

        let mut sheet_doc = Map::new();
        sheet_doc.insert("data".to_string(), Value::Object(data));
        sheet_doc.insert(
            "displayField".to_string(),
            Value::String(display_field_str(sheet.display_field).to_string()),
        );
        doc.insert(sheet.name.clone(), Value::Object(sheet_doc));
    }
    doc
}

/// Pretty-printed export document.
pub fn to_json_string(workbook: &Workbook) -> Result<String, SnapshotError> {
    serde_json::to_string_pretty(&Value::Object(encode(workbook)))
        .map_err(|e| SnapshotError::Io(e.to_string()))
}

fn decode_display_field(sheet_name: &str, value: &Value) -> Result<DisplayField, SnapshotError> {
    match value {
        Value::String(s) if s == "name" => Ok(DisplayField::Name),
        Value::String(s) if s == "content" => Ok(DisplayField::Content),
        other => Err(SnapshotError::MalformedDocument(format!(
            "sheet '{sheet_name}': displayField must be \"name\" or \"content\", got {other}"
        ))),
    }
}

fn decode_sheet(name: &str, value: &Value) -> Result<Sheet, SnapshotError> {
    let obj = value.as_object().ok_or_else(|| {
        SnapshotError::MalformedDocument(format!("sheet '{name}' is not an object"))
    })?;

    let mut sheet = Sheet::new(name);

    if let Some(field) = obj.get("displayField") {
        sheet.display_field = decode_display_field(name, field)?;
    }

    match obj.get("data") {
        None => {}
        Some(Value::Object(data)) => {
            for (key, cell) in data {
                let coord: Coord = key.parse().map_err(|_| {
                    SnapshotError::MalformedDocument(format!(
                        "sheet '{name}': bad cell key '{key}'"
                    ))
                })?;
                let text = cell.as_str().ok_or_else(|| {
                    SnapshotError::MalformedDocument(format!(
                        "sheet '{name}', cell '{key}': value is not a string"
                    ))
                })?;
                sheet.set(coord, text);
            }
        }
        Some(other) => {
            return Err(SnapshotError::MalformedDocument(format!(
                "sheet '{name}': data must be an object, got {other}"
            )));
        }
    }

    // Forced normalization, not a merge: header cells come from us,
    // whatever the document said
    sheet.seed_headers();
    Ok(sheet)
}

/// Decode a snapshot document into a fresh sheet list, first key first.
///
/// All-or-nothing: any error returns without producing sheets, so the
/// caller's registry is never partially updated.
pub fn decode(document: &Value) -> Result<Vec<Sheet>, SnapshotError> {
    let doc = document
        .as_object()
        .ok_or_else(|| SnapshotError::MalformedDocument("top level is not an object".into()))?;
    if doc.is_empty() {
        return Err(SnapshotError::EmptyImport);
    }

    let mut sheets = Vec::with_capacity(doc.len());
    for (name, value) in doc {
        sheets.push(decode_sheet(name, value)?);
    }
    Ok(sheets)
}

/// Decode from JSON text. Unparseable JSON is a malformed document.
pub fn parse_document(text: &str) -> Result<Vec<Sheet>, SnapshotError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| SnapshotError::MalformedDocument(e.to_string()))?;
    decode(&value)
}

/// Read and decode a snapshot file.
pub fn read_document(path: &Path) -> Result<Vec<Sheet>, SnapshotError> {
    let text = std::fs::read_to_string(path).map_err(|e| SnapshotError::Io(e.to_string()))?;
    parse_document(&text)
}

/// Encode and write a snapshot file (pretty-printed).
pub fn write_document(workbook: &Workbook, path: &Path) -> Result<(), SnapshotError> {
    let file = File::create(path).map_err(|e| SnapshotError::Io(e.to_string()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &Value::Object(encode(workbook)))
        .map_err(|e| SnapshotError::Io(e.to_string()))
}
