//! Source-specific payloads → canonical interaction table.
//!
//! # Overview
//!
//! BioGRID and STRING describe the same thing (a pair of interacting
//! proteins) with different JSON shapes and field names:
//!
//! | Source  | Payload shape                        | Fields                                  |
//! |---------|--------------------------------------|-----------------------------------------|
//! | BioGRID | object keyed by interaction ID       | `OFFICIAL_SYMBOL_A` / `OFFICIAL_SYMBOL_B` |
//! | STRING  | array of row objects                 | `preferredName_A` / `preferredName_B`   |
//!
//! Both are mapped onto [`InteractionRecord`] (`protein1`, `protein2`). All
//! other columns are discarded.
//!
//! ## No-data handling
//!
//! An absent payload, a payload of the wrong shape, and rows lacking the
//! expected fields all produce an empty [`InteractionTable`]. These are
//! "no data" conditions for the caller, not errors.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

// ---------------------------------------------------------------------------
// SourceSchema
// ---------------------------------------------------------------------------

/// Upstream database a payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceSchema {
    /// BioGRID REST `interactions` endpoint.
    #[serde(rename = "BioGRID")]
    BioGrid,
    /// STRING REST `network` endpoint.
    #[serde(rename = "STRING")]
    StringDb,
}

/// Field names a source uses for the two interacting proteins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMap {
    /// Source column mapped onto `protein1`.
    pub protein1: &'static str,
    /// Source column mapped onto `protein2`.
    pub protein2: &'static str,
}

impl SourceSchema {
    /// Every supported source, in menu order.
    pub const ALL: [Self; 2] = [Self::BioGrid, Self::StringDb];

    /// The field-mapping table for this source.
    #[must_use]
    pub const fn fields(self) -> FieldMap {
        match self {
            Self::BioGrid => FieldMap {
                protein1: "OFFICIAL_SYMBOL_A",
                protein2: "OFFICIAL_SYMBOL_B",
            },
            Self::StringDb => FieldMap {
                protein1: "preferredName_A",
                protein2: "preferredName_B",
            },
        }
    }

    /// Display name as the database itself spells it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BioGrid => "BioGRID",
            Self::StringDb => "STRING",
        }
    }
}

impl fmt::Display for SourceSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a source name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown interaction source '{0}' (expected 'biogrid' or 'string')")]
pub struct UnknownSource(pub String);

impl FromStr for SourceSchema {
    type Err = UnknownSource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "biogrid" => Ok(Self::BioGrid),
            "string" | "string-db" => Ok(Self::StringDb),
            _ => Err(UnknownSource(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// InteractionRecord / InteractionTable
// ---------------------------------------------------------------------------

/// One interaction between two proteins, by symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub protein1: String,
    pub protein2: String,
}

impl InteractionRecord {
    #[must_use]
    pub fn new(protein1: impl Into<String>, protein2: impl Into<String>) -> Self {
        Self {
            protein1: protein1.into(),
            protein2: protein2.into(),
        }
    }

    /// `true` when a protein is recorded as interacting with itself.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.protein1 == self.protein2
    }
}

/// Interaction records in the order the source returned them.
///
/// Not deduplicated: repeated pairs and self-interactions are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InteractionTable {
    records: Vec<InteractionRecord>,
}

impl InteractionTable {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: InteractionRecord) {
        self.records.push(record);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> &[InteractionRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InteractionRecord> {
        self.records.iter()
    }

    /// The first `n` records (all of them when `n >= len`).
    #[must_use]
    pub fn head(&self, n: usize) -> Self {
        Self {
            records: self.records.iter().take(n).cloned().collect(),
        }
    }

    /// Every distinct protein symbol appearing in either column.
    #[must_use]
    pub fn proteins(&self) -> BTreeSet<&str> {
        self.records
            .iter()
            .flat_map(|r| [r.protein1.as_str(), r.protein2.as_str()])
            .collect()
    }
}

impl FromIterator<InteractionRecord> for InteractionTable {
    fn from_iter<I: IntoIterator<Item = InteractionRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a InteractionTable {
    type Item = &'a InteractionRecord;
    type IntoIter = std::slice::Iter<'a, InteractionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// ---------------------------------------------------------------------------
// RawPayload
// ---------------------------------------------------------------------------

/// A payload as retrieved from one source, tagged by its schema.
#[derive(Debug, Clone, PartialEq)]
pub enum RawPayload {
    /// Interaction ID → row object.
    BioGrid(Map<String, Value>),
    /// Row objects.
    StringDb(Vec<Value>),
}

impl RawPayload {
    /// Interpret `value` under `schema`.
    ///
    /// A value whose shape does not fit the schema (including `null`) becomes
    /// an empty payload of that schema.
    #[must_use]
    pub fn from_json(schema: SourceSchema, value: Value) -> Self {
        match (schema, value) {
            (SourceSchema::BioGrid, Value::Object(map)) => Self::BioGrid(map),
            (SourceSchema::StringDb, Value::Array(rows)) => Self::StringDb(rows),
            (schema, other) => {
                log_unusable(schema, &other);
                Self::empty(schema)
            }
        }
    }

    #[must_use]
    pub fn empty(schema: SourceSchema) -> Self {
        match schema {
            SourceSchema::BioGrid => Self::BioGrid(Map::new()),
            SourceSchema::StringDb => Self::StringDb(Vec::new()),
        }
    }

    #[must_use]
    pub const fn schema(&self) -> SourceSchema {
        match self {
            Self::BioGrid(_) => SourceSchema::BioGrid,
            Self::StringDb(_) => SourceSchema::StringDb,
        }
    }

    /// Number of raw rows, before any field checks.
    #[must_use]
    pub fn row_count(&self) -> usize {
        match self {
            Self::BioGrid(map) => map.len(),
            Self::StringDb(rows) => rows.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Map every row onto the canonical `(protein1, protein2)` pair.
    #[must_use]
    pub fn normalize(&self) -> InteractionTable {
        match self {
            Self::BioGrid(map) => collect_rows(map.values(), self.schema()),
            Self::StringDb(rows) => collect_rows(rows.iter(), self.schema()),
        }
    }
}

/// Normalize a raw JSON payload from `schema` into an [`InteractionTable`].
///
/// Never fails: an absent, empty, or mismatched payload yields an empty table.
#[must_use]
pub fn normalize(payload: &Value, schema: SourceSchema) -> InteractionTable {
    match (schema, payload) {
        (SourceSchema::BioGrid, Value::Object(map)) => collect_rows(map.values(), schema),
        (SourceSchema::StringDb, Value::Array(rows)) => collect_rows(rows.iter(), schema),
        (schema, other) => {
            log_unusable(schema, other);
            InteractionTable::new()
        }
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn collect_rows<'a>(
    rows: impl ExactSizeIterator<Item = &'a Value>,
    schema: SourceSchema,
) -> InteractionTable {
    let total = rows.len();
    if total == 0 {
        debug!(%schema, "empty payload; no interactions");
        return InteractionTable::new();
    }

    let fields = schema.fields();
    let table: InteractionTable = rows
        .filter_map(|row| record_from_row(row, fields))
        .collect();

    if table.is_empty() {
        warn!(
            %schema,
            rows = total,
            field_a = fields.protein1,
            field_b = fields.protein2,
            "no row carries the expected fields; treating payload as empty"
        );
    } else if table.len() < total {
        debug!(
            %schema,
            kept = table.len(),
            dropped = total - table.len(),
            "dropped rows missing a protein symbol"
        );
    }

    table
}

fn record_from_row(row: &Value, fields: FieldMap) -> Option<InteractionRecord> {
    let obj = row.as_object()?;
    let symbol = |key: &str| {
        obj.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    };
    Some(InteractionRecord::new(
        symbol(fields.protein1)?,
        symbol(fields.protein2)?,
    ))
}

fn log_unusable(schema: SourceSchema, value: &Value) {
    if value.is_null() {
        debug!(%schema, "absent payload; no interactions");
    } else {
        warn!(
            %schema,
            kind = json_kind(value),
            "payload shape does not match source schema; treating as empty"
        );
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn biogrid_single_row() {
        let payload = json!({
            "103": {
                "BIOGRID_INTERACTION_ID": 103,
                "OFFICIAL_SYMBOL_A": "A",
                "OFFICIAL_SYMBOL_B": "B",
                "EXPERIMENTAL_SYSTEM": "Two-hybrid"
            }
        });
        let table = normalize(&payload, SourceSchema::BioGrid);
        assert_eq!(table.records(), &[InteractionRecord::new("A", "B")]);
    }

    #[test]
    fn biogrid_keeps_payload_key_order() {
        let payload = json!({
            "900": { "OFFICIAL_SYMBOL_A": "TP53", "OFFICIAL_SYMBOL_B": "MDM2" },
            "12": { "OFFICIAL_SYMBOL_A": "TP53", "OFFICIAL_SYMBOL_B": "EP300" },
            "450": { "OFFICIAL_SYMBOL_A": "ATM", "OFFICIAL_SYMBOL_B": "TP53" }
        });
        let table = normalize(&payload, SourceSchema::BioGrid);
        let partners: Vec<&str> = table.iter().map(|r| r.protein2.as_str()).collect();
        assert_eq!(partners, vec!["MDM2", "EP300", "TP53"]);
    }

    #[test]
    fn string_single_row() {
        let payload = json!([{
            "stringId_A": "9606.ENSP00000269305",
            "preferredName_A": "X",
            "preferredName_B": "Y",
            "score": 0.999
        }]);
        let table = normalize(&payload, SourceSchema::StringDb);
        assert_eq!(table.records(), &[InteractionRecord::new("X", "Y")]);
    }

    #[test]
    fn absent_or_empty_payload_is_empty_table() {
        for schema in SourceSchema::ALL {
            assert!(normalize(&Value::Null, schema).is_empty());
            assert!(normalize(&json!({}), schema).is_empty());
            assert!(normalize(&json!([]), schema).is_empty());
        }
    }

    #[test]
    fn wrong_schema_fields_yield_empty_table() {
        let string_rows = json!([{ "preferredName_A": "X", "preferredName_B": "Y" }]);
        assert!(normalize(&string_rows, SourceSchema::BioGrid).is_empty());

        let biogrid_map = json!({ "1": { "OFFICIAL_SYMBOL_A": "A", "OFFICIAL_SYMBOL_B": "B" } });
        assert!(normalize(&biogrid_map, SourceSchema::StringDb).is_empty());

        let renamed = json!([{ "nameA": "X", "nameB": "Y" }]);
        assert!(normalize(&renamed, SourceSchema::StringDb).is_empty());
    }

    #[test]
    fn rows_missing_a_symbol_are_dropped() {
        let payload = json!([
            { "preferredName_A": "X", "preferredName_B": "Y" },
            { "preferredName_A": "X" },
            { "preferredName_A": "", "preferredName_B": "Z" },
            { "preferredName_A": 7, "preferredName_B": "Z" },
            "not-a-row",
            { "preferredName_A": "Y", "preferredName_B": "Z" }
        ]);
        let table = normalize(&payload, SourceSchema::StringDb);
        assert_eq!(
            table.records(),
            &[InteractionRecord::new("X", "Y"), InteractionRecord::new("Y", "Z")]
        );
    }

    #[test]
    fn duplicates_and_self_loops_pass_through() {
        let payload = json!([
            { "preferredName_A": "X", "preferredName_B": "Y" },
            { "preferredName_A": "X", "preferredName_B": "Y" },
            { "preferredName_A": "Z", "preferredName_B": "Z" }
        ]);
        let table = normalize(&payload, SourceSchema::StringDb);
        assert_eq!(table.len(), 3);
        assert!(table.records()[2].is_self_loop());
    }

    #[test]
    fn raw_payload_dispatches_by_tag() {
        let raw = RawPayload::from_json(
            SourceSchema::BioGrid,
            json!({ "1": { "OFFICIAL_SYMBOL_A": "A", "OFFICIAL_SYMBOL_B": "B" } }),
        );
        assert_eq!(raw.schema(), SourceSchema::BioGrid);
        assert_eq!(raw.row_count(), 1);
        assert_eq!(raw.normalize().len(), 1);
    }

    #[test]
    fn raw_payload_wrong_shape_becomes_empty() {
        let raw = RawPayload::from_json(SourceSchema::BioGrid, json!([1, 2, 3]));
        assert_eq!(raw, RawPayload::empty(SourceSchema::BioGrid));
        assert!(raw.normalize().is_empty());
    }

    #[test]
    fn head_truncates_in_order() {
        let table: InteractionTable = (0..15)
            .map(|i| InteractionRecord::new(format!("P{i}"), "HUB"))
            .collect();
        let head = table.head(10);
        assert_eq!(head.len(), 10);
        assert_eq!(head.records()[9].protein1, "P9");
        assert_eq!(table.head(100).len(), 15);
    }

    #[test]
    fn proteins_is_union_of_columns() {
        let table: InteractionTable = [("A", "B"), ("B", "C"), ("A", "A")]
            .into_iter()
            .map(|(a, b)| InteractionRecord::new(a, b))
            .collect();
        let proteins: Vec<&str> = table.proteins().into_iter().collect();
        assert_eq!(proteins, vec!["A", "B", "C"]);
    }

    #[test]
    fn source_schema_parses_case_insensitively() {
        assert_eq!("BioGRID".parse::<SourceSchema>(), Ok(SourceSchema::BioGrid));
        assert_eq!("string".parse::<SourceSchema>(), Ok(SourceSchema::StringDb));
        assert_eq!("STRING".parse::<SourceSchema>(), Ok(SourceSchema::StringDb));
        assert!("intact".parse::<SourceSchema>().is_err());
    }
}
