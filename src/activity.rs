//! Activity Log
//!
//! Timestamped record of what happened during a session. Secret values
//! never reach this log.

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityAction {
    Start,
    Focus,
    Submit,
    SubmitIgnored,
    Reveal,
    Conceal,
    ClearField,
    ResetDelivered,
    ResetSkipped,
    Navigate,
    Config,
}

impl ActivityAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Focus => "focus",
            Self::Submit => "submit",
            Self::SubmitIgnored => "submit_ignored",
            Self::Reveal => "reveal",
            Self::Conceal => "conceal",
            Self::ClearField => "clear_field",
            Self::ResetDelivered => "reset_delivered",
            Self::ResetSkipped => "reset_skipped",
            Self::Navigate => "navigate",
            Self::Config => "config",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub timestamp: DateTime<Local>,
    pub action: ActivityAction,
    pub details: Option<String>,
}

impl ActivityEntry {
    pub fn new(action: ActivityAction, details: Option<String>) -> Self {
        Self {
            timestamp: Local::now(),
            action,
            details,
        }
    }

    /// One-line rendering used by the log popup
    pub fn line(&self) -> String {
        format!(
            "{}  {:<15}  {}",
            self.timestamp.format("%H:%M:%S"),
            self.action.as_str(),
            self.details.as_deref().unwrap_or("")
        )
    }
}

/// Bounded log; the oldest entries fall off first
#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
    capacity: usize,
}

impl ActivityLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn record(&mut self, action: ActivityAction, details: Option<&str>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries
            .push_back(ActivityEntry::new(action, details.map(|s| s.to_string())));
    }

    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &ActivityEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&ActivityEntry> {
        self.entries.back()
    }

    pub fn count(&self, action: ActivityAction) -> usize {
        self.entries.iter().filter(|e| e.action == action).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_read_back() {
        let mut log = ActivityLog::new(10);
        log.record(ActivityAction::Start, None);
        log.record(ActivityAction::Submit, Some("a@b.com"));

        assert_eq!(log.len(), 2);
        let last = log.last().unwrap();
        assert_eq!(last.action, ActivityAction::Submit);
        assert_eq!(last.details.as_deref(), Some("a@b.com"));
        assert!(last.line().contains("submit"));
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut log = ActivityLog::new(2);
        log.record(ActivityAction::Start, None);
        log.record(ActivityAction::Focus, Some("identifier"));
        log.record(ActivityAction::Focus, Some("secret"));

        assert_eq!(log.len(), 2);
        assert_eq!(log.count(ActivityAction::Start), 0);
        assert_eq!(log.count(ActivityAction::Focus), 2);
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let mut log = ActivityLog::new(0);
        log.record(ActivityAction::Start, None);
        log.record(ActivityAction::Navigate, Some("welcome"));
        assert_eq!(log.len(), 1);
        assert_eq!(log.last().unwrap().action, ActivityAction::Navigate);
    }

    #[test]
    fn test_entry_serializes_action_name() {
        let entry = ActivityEntry::new(ActivityAction::ResetSkipped, None);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"reset_skipped\""));
    }

    #[test]
    fn test_display_name_matches_serialized_name() {
        let actions = [
            ActivityAction::Start,
            ActivityAction::Focus,
            ActivityAction::Submit,
            ActivityAction::SubmitIgnored,
            ActivityAction::Reveal,
            ActivityAction::Conceal,
            ActivityAction::ClearField,
            ActivityAction::ResetDelivered,
            ActivityAction::ResetSkipped,
            ActivityAction::Navigate,
            ActivityAction::Config,
        ];
        for action in actions {
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, format!("\"{}\"", action.as_str()));
        }
    }
}
