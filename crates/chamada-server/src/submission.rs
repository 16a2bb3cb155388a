//! The single write path: resolve selected tribes to members, derive one
//! presence flag per member from the form fields, and shape the rows the
//! store persists.

use chamada_model::{AttendanceRow, Presence, RecordId, Roster, ValidationError};
use std::collections::HashMap;

/// Form field prefix for per-member presence checkboxes.
pub const PRESENCE_FIELD_PREFIX: &str = "presenca_";

/// Ordered name-keyed accumulation over the selected tribes (tribe order,
/// then registry order within a tribe). The first occurrence of a name fixes
/// its row position; a duplicate occurrence overwrites the presence value in
/// place. The roster invariant makes duplicates impossible in practice, but
/// the override semantics are part of the observed contract and kept as is.
#[must_use]
pub fn collect_attendance(
    roster: &Roster,
    selected_tribes: &str,
    form: &HashMap<String, String>,
) -> Vec<(String, Presence)> {
    let mut order: Vec<String> = Vec::new();
    let mut presence: HashMap<String, Presence> = HashMap::new();
    for tribe_id in selected_tribes.split(',') {
        for member in roster.members_of(tribe_id) {
            let value = form
                .get(&format!("{PRESENCE_FIELD_PREFIX}{member}"))
                .map(String::as_str);
            let flag = Presence::from_form_marker(value);
            if presence.insert(member.clone(), flag).is_none() {
                order.push(member.clone());
            }
        }
    }
    order
        .into_iter()
        .map(|name| {
            let flag = presence.remove(&name).unwrap_or(Presence::Absent);
            (name, flag)
        })
        .collect()
}

/// Builds the record identity and its denormalized rows. The rows carry the
/// RAW activity title; only the filename uses the sanitized token.
pub fn build_record(
    activity: &str,
    start_date: &str,
    end_date: &str,
    attendance: &[(String, Presence)],
) -> Result<(RecordId, Vec<AttendanceRow>), ValidationError> {
    let id = RecordId::new(activity, start_date, end_date)?;
    let rows = attendance
        .iter()
        .map(|(member, flag)| AttendanceRow::new(activity, start_date, end_date, member, *flag))
        .collect();
    Ok((id, rows))
}
