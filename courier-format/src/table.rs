//! Specifies logic to persist a trained policy table in json format.

#[cfg(test)]
#[path = "../tests/unit/table_test.rs"]
mod table_test;

use courier_core::learning::{NamedQTable, QTableStore};
use courier_core::utils::{Float, GenericError, GenericResult};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::PathBuf;

/// A single estimate of the policy table.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct TableEntry {
    /// A location where the action is taken.
    pub state: String,
    /// A location to move to.
    pub action: String,
    /// An estimated value.
    pub value: Float,
}

/// Deserializes a policy table in json format from `BufReader`.
pub fn deserialize_table<R: Read>(reader: BufReader<R>) -> GenericResult<NamedQTable> {
    let entries: Vec<TableEntry> = serde_json::from_reader(reader)
        .map_err(|err| GenericError::Data(format!("cannot deserialize policy table: '{err}'")))?;

    Ok(entries.into_iter().map(|entry| (entry.state, entry.action, entry.value)).collect())
}

/// Serializes a policy table in json format into `BufWriter`. Entries are sorted by state and
/// action, so the same table is always written the same way.
pub fn serialize_table<W: Write>(table: &NamedQTable, mut writer: BufWriter<W>) -> GenericResult<()> {
    let mut entries = table
        .iter()
        .map(|(state, action, value)| TableEntry { state: state.clone(), action: action.clone(), value })
        .collect::<Vec<_>>();
    entries.sort_by(|a, b| a.state.cmp(&b.state).then_with(|| a.action.cmp(&b.action)));

    serde_json::to_writer_pretty(&mut writer, &entries)
        .map_err(|err| GenericError::Data(format!("cannot serialize policy table: '{err}'")))?;

    writer.flush().map_err(GenericError::from)
}

/// Keeps a policy table in a json file.
#[derive(Clone, Debug)]
pub struct JsonQTableStore {
    path: PathBuf,
}

impl JsonQTableStore {
    /// Creates a new instance of `JsonQTableStore`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl QTableStore for JsonQTableStore {
    fn save(&self, table: &NamedQTable) -> GenericResult<()> {
        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        serialize_table(table, BufWriter::new(File::create(&self.path)?))
    }

    fn load(&self) -> GenericResult<NamedQTable> {
        let file = File::open(&self.path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => {
                GenericError::NotFound(format!("no saved policy table found at '{}'", self.path.display()))
            }
            _ => GenericError::from(err),
        })?;

        deserialize_table(BufReader::new(file))
    }
}
