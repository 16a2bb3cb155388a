#![forbid(unsafe_code)]
//! Chamada model SSOT: tribes and rosters, attendance rows, record identity
//! and the activity-name sanitizer. Everything here is pure data; persistence
//! lives in `chamada-store` and the HTTP surface in `chamada-server`.

mod record;
mod roster;

pub use record::{
    sanitize_activity, AttendanceRow, Presence, RecordId, ABSENT_FIELD, PRESENT_FIELD,
    RECORD_EXTENSION, RECORD_HEADER,
};
pub use roster::{Roster, Tribe, TribeId, ValidationError};

pub const CRATE_NAME: &str = "chamada-model";
