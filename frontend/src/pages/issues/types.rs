use leptos_router::ParamsMap;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;

const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IssueStatus {
    Open,
    Resolved,
    /// Token outside the known set, kept verbatim.
    Other(String),
}

impl IssueStatus {
    pub fn from_token(token: &str) -> Self {
        match token {
            "open" => Self::Open,
            "resolved" => Self::Resolved,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_token(&self) -> &str {
        match self {
            Self::Open => "open",
            Self::Resolved => "resolved",
            Self::Other(token) => token,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IssueLevel {
    Error,
    Warning,
    Info,
    Other(String),
}

impl IssueLevel {
    pub fn from_token(token: &str) -> Self {
        match token {
            "error" => Self::Error,
            "warning" => Self::Warning,
            "info" => Self::Info,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_token(&self) -> &str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Other(token) => token,
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl fmt::Display for IssueLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub status: Option<IssueStatus>,
    pub level: Option<IssueLevel>,
    pub project: Option<String>,
}

/// Partial update. An outer `None` leaves the field alone, `Some(None)`
/// clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub status: Option<Option<IssueStatus>>,
    pub level: Option<Option<IssueLevel>>,
    pub project: Option<Option<String>>,
}

impl FilterUpdate {
    pub fn status(status: Option<IssueStatus>) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn level(level: Option<IssueLevel>) -> Self {
        Self {
            level: Some(level),
            ..Default::default()
        }
    }

    pub fn project(project: Option<String>) -> Self {
        Self {
            project: Some(project),
            ..Default::default()
        }
    }
}

impl FilterState {
    pub fn apply(&mut self, update: FilterUpdate) {
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(level) = update.level {
            self.level = level;
        }
        if let Some(project) = update.project {
            self.project = project.filter(|p| !p.is_empty());
        }
    }

    pub fn from_query(params: &ParamsMap) -> Self {
        // Inverse of `to_query_string`: values are not trimmed.
        let token = |key: &str| {
            params
                .get(key)
                .map(|value| value.to_lowercase())
                .filter(|value| !value.is_empty())
        };
        Self {
            status: token("status").map(|t| IssueStatus::from_token(&t)),
            level: token("level").map(|t| IssueLevel::from_token(&t)),
            project: token("project"),
        }
    }

    pub fn to_query_string(&self) -> String {
        let pairs: Vec<String> = [
            ("status", self.status.as_ref().map(IssueStatus::as_token)),
            ("level", self.level.as_ref().map(IssueLevel::as_token)),
            ("project", self.project.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .filter(|v| !v.is_empty())
                .map(|v| format!("{key}={}", utf8_percent_encode(v, QUERY_VALUE)))
        })
        .collect();
        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }

    pub fn active_count(&self) -> usize {
        usize::from(self.status.is_some())
            + usize::from(self.level.is_some())
            + usize::from(self.project.is_some())
    }

    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(status) = &self.status {
            parts.push(format!("status: {status}"));
        }
        if let Some(level) = &self.level {
            parts.push(format!("level: {level}"));
        }
        if let Some(project) = &self.project {
            parts.push(format!("project: \"{project}\""));
        }
        if parts.is_empty() {
            "Showing all issues".to_string()
        } else {
            format!("Filtered by {}", parts.join(", "))
        }
    }
}
