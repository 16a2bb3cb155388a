use crate::roster::ValidationError;

pub const RECORD_EXTENSION: &str = ".csv";

/// Header row of every record file, preserved verbatim for file
/// compatibility.
pub const RECORD_HEADER: [&str; 5] = ["Activity", "Start Date", "End Date", "Member", "Present"];

/// Localized yes/no literals used in the `Present` column. `Sim` doubles as
/// the form marker for a checked presence box.
pub const PRESENT_FIELD: &str = "Sim";
pub const ABSENT_FIELD: &str = "Não";

const ACCENTED_ALLOWED: [char; 20] = [
    'á', 'é', 'í', 'ó', 'ú', 'ã', 'õ', 'à', 'è', 'ù', 'ç', 'Á', 'É', 'Í', 'Ó', 'Ú', 'À', 'È', 'Ù',
    'Ç',
];

fn is_allowed_activity_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-' | '@') || ACCENTED_ALLOWED.contains(&c)
}

/// Maps an activity title to a filesystem-safe token: every character
/// outside the allow-list becomes an underscore. Total and idempotent.
#[must_use]
pub fn sanitize_activity(raw: &str) -> String {
    raw.chars()
        .map(|c| if is_allowed_activity_char(c) { c } else { '_' })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Present,
    Absent,
}

impl Presence {
    #[must_use]
    pub const fn as_field(self) -> &'static str {
        match self {
            Self::Present => PRESENT_FIELD,
            Self::Absent => ABSENT_FIELD,
        }
    }

    /// Presence of a per-member form field: only the exact marker literal
    /// counts as present; a missing field or any other value is absent.
    #[must_use]
    pub fn from_form_marker(value: Option<&str>) -> Self {
        if value == Some(PRESENT_FIELD) {
            Self::Present
        } else {
            Self::Absent
        }
    }
}

/// One stored row. The activity/start/end triple is denormalized per row.
/// `present` stays a raw field string on the read path so files round-trip
/// byte-for-byte; the write path produces it from [`Presence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRow {
    pub activity: String,
    pub start_date: String,
    pub end_date: String,
    pub member: String,
    pub present: String,
}

impl AttendanceRow {
    #[must_use]
    pub fn new(activity: &str, start_date: &str, end_date: &str, member: &str, presence: Presence) -> Self {
        Self {
            activity: activity.to_string(),
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
            member: member.to_string(),
            present: presence.as_field().to_string(),
        }
    }

    #[must_use]
    pub fn from_fields(fields: [String; 5]) -> Self {
        let [activity, start_date, end_date, member, present] = fields;
        Self {
            activity,
            start_date,
            end_date,
            member,
            present,
        }
    }

    #[must_use]
    pub fn fields(&self) -> [&str; 5] {
        [
            &self.activity,
            &self.start_date,
            &self.end_date,
            &self.member,
            &self.present,
        ]
    }
}

/// Identity of one record: sanitized activity token plus ISO date range.
/// The filename is the primary key; two submissions with the same triple
/// collide and the later write wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordId {
    activity_token: String,
    start_date: String,
    end_date: String,
}

impl RecordId {
    pub fn new(activity: &str, start_date: &str, end_date: &str) -> Result<Self, ValidationError> {
        if !is_iso_date(start_date) {
            return Err(ValidationError(format!(
                "start date {start_date:?} is not an ISO calendar date"
            )));
        }
        if !is_iso_date(end_date) {
            return Err(ValidationError(format!(
                "end date {end_date:?} is not an ISO calendar date"
            )));
        }
        Ok(Self {
            activity_token: sanitize_activity(activity),
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
        })
    }

    /// `<token>_<start>_a_<end>.csv`
    #[must_use]
    pub fn file_name(&self) -> String {
        format!(
            "{}_{}_a_{}{RECORD_EXTENSION}",
            self.activity_token, self.start_date, self.end_date
        )
    }

    /// Decodes a record filename. Parsing walks from the END of the stem:
    /// the sanitizer maps disallowed characters to underscore, so the
    /// activity token itself may contain underscores, while the two trailing
    /// date segments and the literal `a` separator cannot.
    pub fn parse_file_name(name: &str) -> Result<Self, ValidationError> {
        let malformed = || ValidationError(format!("malformed record filename {name:?}"));
        let stem = name.strip_suffix(RECORD_EXTENSION).ok_or_else(malformed)?;
        let mut tail = stem.rsplitn(3, '_');
        let end_date = tail.next().ok_or_else(malformed)?;
        let separator = tail.next().ok_or_else(malformed)?;
        let rest = tail.next().ok_or_else(malformed)?;
        let (activity_token, start_date) = rest.rsplit_once('_').ok_or_else(malformed)?;
        if separator != "a" || !is_iso_date(start_date) || !is_iso_date(end_date) {
            return Err(malformed());
        }
        Ok(Self {
            activity_token: activity_token.to_string(),
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
        })
    }

    #[must_use]
    pub fn activity_token(&self) -> &str {
        &self.activity_token
    }

    #[must_use]
    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    #[must_use]
    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    /// `YYYY-MM` of the start date; lexicographic order is chronological.
    #[must_use]
    pub fn month_key(&self) -> &str {
        &self.start_date[..7]
    }
}

fn is_iso_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| matches!(i, 4 | 7) || b.is_ascii_digit())
}
