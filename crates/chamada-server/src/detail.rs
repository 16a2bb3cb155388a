//! Tribe-grouped view of one stored record.

use chamada_model::{AttendanceRow, Roster, TribeId};

/// Re-derives the tribe of every row's member via the roster and groups the
/// rows per tribe, in roster order, with empty groups included. Rows keep
/// file order within a group; members the roster does not know are dropped.
#[must_use]
pub fn group_by_tribe(
    roster: &Roster,
    rows: &[AttendanceRow],
) -> Vec<(TribeId, Vec<(String, String)>)> {
    let mut groups: Vec<(TribeId, Vec<(String, String)>)> = roster
        .tribes()
        .iter()
        .map(|t| (t.id.clone(), Vec::new()))
        .collect();
    for row in rows {
        let Some(tribe) = roster.tribe_of(&row.member) else {
            continue;
        };
        if let Some((_, entries)) = groups.iter_mut().find(|(id, _)| id == tribe) {
            entries.push((row.member.clone(), row.present.clone()));
        }
    }
    groups
}
