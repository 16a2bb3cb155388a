#![forbid(unsafe_code)]
//! Flat-file record store: one CSV file per attendance record in a single
//! directory. The directory is the system's only ledger; there is no index
//! beyond the filenames themselves.

mod csv;

use chamada_model::{AttendanceRow, RecordId, RECORD_EXTENSION, RECORD_HEADER};
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const CRATE_NAME: &str = "chamada-store";

const BOM: char = '\u{feff}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorCode {
    NotFound,
    Validation,
    Malformed,
    Io,
}

impl StoreErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Validation => "validation_error",
            Self::Malformed => "malformed_record",
            Self::Io => "io_error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    pub code: StoreErrorCode,
    pub message: String,
}

impl StoreError {
    #[must_use]
    pub fn new(code: StoreErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for StoreError {}

pub trait RecordStore {
    /// Creates or unconditionally replaces the record file for `id`.
    /// Last writer wins; there is no merge.
    fn write(&self, id: &RecordId, rows: &[AttendanceRow]) -> Result<(), StoreError>;

    /// Every record filename in the storage directory, unordered.
    fn list_file_names(&self) -> Result<Vec<String>, StoreError>;

    /// Header row plus all data rows of one record. Rows without exactly
    /// five fields are silently skipped.
    fn read(&self, file_name: &str) -> Result<(Vec<String>, Vec<AttendanceRow>), StoreError>;
}

pub struct LocalFsStore {
    root: PathBuf,
}

impl LocalFsStore {
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Like [`LocalFsStore::new`] but creates the storage directory,
    /// matching the create-on-startup contract.
    pub fn open(root: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&root).map_err(|e| {
            StoreError::new(
                StoreErrorCode::Io,
                format!("create records dir {}: {e}", root.display()),
            )
        })?;
        Ok(Self { root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    // Record names never contain path separators; refusing them keeps every
    // read and write inside the storage directory.
    fn record_path(&self, file_name: &str) -> Result<PathBuf, StoreError> {
        if file_name.contains(['/', '\\']) {
            return Err(StoreError::new(
                StoreErrorCode::Validation,
                format!("record name {file_name:?} contains a path separator"),
            ));
        }
        Ok(self.root.join(file_name))
    }
}

impl RecordStore for LocalFsStore {
    fn write(&self, id: &RecordId, rows: &[AttendanceRow]) -> Result<(), StoreError> {
        let path = self.record_path(&id.file_name())?;
        let mut out = String::new();
        out.push(BOM);
        out.push_str(&csv::encode_line(&RECORD_HEADER));
        for row in rows {
            out.push_str(&csv::encode_line(&row.fields()));
        }
        fs::write(&path, out.as_bytes()).map_err(|e| {
            StoreError::new(
                StoreErrorCode::Io,
                format!("write record {}: {e}", path.display()),
            )
        })
    }

    fn list_file_names(&self) -> Result<Vec<String>, StoreError> {
        let entries = fs::read_dir(&self.root).map_err(|e| {
            StoreError::new(
                StoreErrorCode::Io,
                format!("list records dir {}: {e}", self.root.display()),
            )
        })?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                StoreError::new(
                    StoreErrorCode::Io,
                    format!("list records dir {}: {e}", self.root.display()),
                )
            })?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if name.ends_with(RECORD_EXTENSION) {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }

    fn read(&self, file_name: &str) -> Result<(Vec<String>, Vec<AttendanceRow>), StoreError> {
        let path = self.record_path(file_name)?;
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::new(
                    StoreErrorCode::NotFound,
                    format!("record {file_name} not found"),
                ));
            }
            Err(e) => {
                return Err(StoreError::new(
                    StoreErrorCode::Io,
                    format!("read record {}: {e}", path.display()),
                ));
            }
        };
        let raw = raw.strip_prefix(BOM).unwrap_or(&raw);
        let mut lines = csv::parse(raw);
        if lines.is_empty() {
            return Err(StoreError::new(
                StoreErrorCode::Malformed,
                format!("record {file_name} has no header row"),
            ));
        }
        let header = lines.remove(0);
        let rows = lines
            .into_iter()
            .filter_map(|fields| {
                let fields: [String; 5] = fields.try_into().ok()?;
                Some(AttendanceRow::from_fields(fields))
            })
            .collect();
        Ok((header, rows))
    }
}
