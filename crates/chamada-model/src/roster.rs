use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ValidationError {}

pub const TRIBE_ID_MAX_LEN: usize = 32;

/// Identifier of one tribe: trimmed, non-empty, lowercase ASCII letters,
/// digits or underscore.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct TribeId(String);

impl TribeId {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ValidationError("tribe id must not be empty".to_string()));
        }
        if s.len() > TRIBE_ID_MAX_LEN {
            return Err(ValidationError(format!(
                "tribe id exceeds max length {TRIBE_ID_MAX_LEN}"
            )));
        }
        if !s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(ValidationError(
                "tribe id must be lowercase ASCII letters, digits or underscore".to_string(),
            ));
        }
        Ok(Self(s.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for TribeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One tribe with its ordered member list. Member order is the order the
/// submission form renders and the order rows are written in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tribe {
    pub id: TribeId,
    pub members: Vec<String>,
}

impl Tribe {
    #[must_use]
    pub fn new(id: TribeId, members: Vec<String>) -> Self {
        Self { id, members }
    }
}

/// The membership registry: an ordered, immutable set of tribes, injected at
/// startup and shared read-only for the process lifetime.
///
/// Invariant (checked by [`Roster::validate`]): tribe ids are unique and no
/// member name appears in two tribes, so a tribe can be re-derived from a
/// name alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    tribes: Vec<Tribe>,
}

impl Roster {
    pub fn new(tribes: Vec<Tribe>) -> Result<Self, ValidationError> {
        let roster = Self { tribes };
        roster.validate()?;
        Ok(roster)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut ids = BTreeSet::new();
        let mut names = BTreeSet::new();
        for tribe in &self.tribes {
            // Re-parse ids so rosters deserialized from a file get the same
            // checks as ones built in code.
            TribeId::parse(tribe.id.as_str())?;
            if !ids.insert(tribe.id.as_str()) {
                return Err(ValidationError(format!("duplicate tribe id {}", tribe.id)));
            }
            for member in &tribe.members {
                if member.trim().is_empty() {
                    return Err(ValidationError(format!(
                        "tribe {} has an empty member name",
                        tribe.id
                    )));
                }
                if !names.insert(member.as_str()) {
                    return Err(ValidationError(format!(
                        "member {member} appears in more than one tribe"
                    )));
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn tribes(&self) -> &[Tribe] {
        &self.tribes
    }

    /// Members of one tribe, in registry order. Unknown ids yield an empty
    /// slice, never an error.
    #[must_use]
    pub fn members_of(&self, tribe_id: &str) -> &[String] {
        self.tribes
            .iter()
            .find(|t| t.id.as_str() == tribe_id)
            .map_or(&[], |t| t.members.as_slice())
    }

    /// Tribe a member name belongs to, or `None` for names the roster does
    /// not know. Callers drop such names from tribe-grouped views.
    #[must_use]
    pub fn tribe_of(&self, member: &str) -> Option<&TribeId> {
        self.tribes
            .iter()
            .find(|t| t.members.iter().any(|m| m == member))
            .map(|t| &t.id)
    }

    /// The deployment-time roster the system ships with.
    #[must_use]
    pub fn default_roster() -> Self {
        let tribe = |id: &str, members: &[&str]| Tribe {
            id: TribeId(id.to_string()),
            members: members.iter().map(|m| (*m).to_string()).collect(),
        };
        Self {
            tribes: vec![
                tribe(
                    "benenson",
                    &[
                        "Tiago Costa",
                        "Filipa Moreno",
                        "Inês Caetano",
                        "Maria Farropas",
                        "Ana Sofia Matos",
                        "Rodrigo Morais",
                    ],
                ),
                tribe(
                    "dunant",
                    &[
                        "Diana Moreno",
                        "Leonor Cera",
                        "Filipe Mendes",
                        "Gonçalo Silvestre",
                        "Maria Canto",
                        "Leandro Alberto",
                        "Diogo Caetano",
                    ],
                ),
                tribe(
                    "leonor",
                    &[
                        "António Faustino",
                        "Rafael Ferreira",
                        "Lara Serra",
                        "Marta Mendes",
                        "Mariana Quitério",
                        "Joana Caetano",
                    ],
                ),
            ],
        }
    }
}
