use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Identifier for a project on the board
///
/// Ids travel through drag payloads as plain text, so the textual form is
/// just the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(u32);

impl ProjectId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the numeric value
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl FromStr for ProjectId {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| crate::error::BoardError::InvalidProjectId(s.to_string()))
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which list a project is shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Finished,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 2] = [ProjectStatus::Active, ProjectStatus::Finished];

    /// Lowercase key used in element ids (e.g. `active-projects`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// Heading shown above the list
    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.as_str().to_uppercase())
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            _ => Err(crate::error::BoardError::InvalidStatus(s.to_string())),
        }
    }
}

/// A project card
///
/// Everything except `status` is fixed at creation. Status changes go
/// through [`crate::store::ProjectStore::set_status`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub people: f64,
    pub status: ProjectStatus,
}

impl Project {
    pub fn new(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<f64>,
        status: ProjectStatus,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            people: people.into(),
            status,
        }
    }

    /// Label such as "1 person assigned." or "3 people assigned."
    pub fn people_assigned_message(&self) -> String {
        let noun = if self.people > 1.0 { "people" } else { "person" };
        format!("{} {} assigned.", self.people, noun)
    }
}
