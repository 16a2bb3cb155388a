//! Month-grouped activity index over the record filenames.

use chamada_model::{RecordId, ValidationError};
use std::collections::BTreeMap;

/// Groups record filenames by the `YYYY-MM` of their encoded start date.
/// `BTreeMap` keeps months ascending (lexicographic equals chronological for
/// ISO dates); filenames within a month are sorted for stable rendering.
///
/// Fails on any filename the store did not produce; the caller surfaces
/// that as a server error rather than guessing.
pub fn build_index(
    mut file_names: Vec<String>,
) -> Result<BTreeMap<String, Vec<String>>, ValidationError> {
    file_names.sort();
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for name in file_names {
        let id = RecordId::parse_file_name(&name)?;
        grouped.entry(id.month_key().to_string()).or_default().push(name);
    }
    Ok(grouped)
}
