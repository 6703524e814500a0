use crate::pages::issues::types::{FilterState, IssueLevel, IssueStatus};
use crate::utils::text::capitalize;

pub const STATUS_PLACEHOLDER: &str = "Status";
pub const LEVEL_PLACEHOLDER: &str = "Level";
pub const PROJECT_LABEL: &str = "project name";
pub const PROJECT_PLACEHOLDER: &str = "Project Name";
pub const SEARCH_ICON_SRC: &str = "/icons/search-icon.svg";

pub const UNRESOLVED_LABEL: &str = "Unresolved";
pub const RESOLVED_LABEL: &str = "Resolved";
pub const STATUS_OPTIONS: [&str; 2] = [UNRESOLVED_LABEL, RESOLVED_LABEL];
pub const LEVEL_OPTIONS: [&str; 3] = ["Error", "Warning", "Info"];

pub fn status_label(filters: &FilterState) -> String {
    let label = match &filters.status {
        None => STATUS_PLACEHOLDER,
        Some(status) if status.as_token().is_empty() => STATUS_PLACEHOLDER,
        Some(IssueStatus::Open) => UNRESOLVED_LABEL,
        Some(_) => RESOLVED_LABEL,
    };
    label.to_string()
}

pub fn level_label(filters: &FilterState) -> String {
    match &filters.level {
        Some(level) if !level.as_token().is_empty() => capitalize(level.as_token()),
        _ => LEVEL_PLACEHOLDER.to_string(),
    }
}

/// `"Unresolved"` is the only label that differs from its token; anything
/// else is lower-cased as is.
pub fn status_from_label(label: Option<&str>) -> Option<IssueStatus> {
    match label.filter(|l| !l.is_empty())? {
        UNRESOLVED_LABEL => Some(IssueStatus::Open),
        other => {
            let status = IssueStatus::from_token(&other.to_lowercase());
            if let IssueStatus::Other(token) = &status {
                log::warn!("unrecognised status label mapped to token {token:?}");
            }
            Some(status)
        }
    }
}

pub fn level_from_label(label: Option<&str>) -> Option<IssueLevel> {
    let level = IssueLevel::from_token(&label.filter(|l| !l.is_empty())?.to_lowercase());
    if let IssueLevel::Other(token) = &level {
        log::warn!("unrecognised level label mapped to token {token:?}");
    }
    Some(level)
}

pub fn project_filter_value(text: &str) -> String {
    text.to_lowercase()
}
