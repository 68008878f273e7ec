//! View Rendering Helpers
//!
//! Pure mappings from ticket data to what the components display.

use chrono::{DateTime, NaiveDateTime};

use crate::config::LIST_DESCRIPTION_LIMIT;
use crate::models::{TicketPriority, TicketStatus};

/// Label and CSS class for a badge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeStyle {
    pub label: String,
    pub class: &'static str,
}

pub fn status_badge(status: &TicketStatus) -> BadgeStyle {
    let (label, class) = match status {
        TicketStatus::Open => ("Open", "status-open"),
        TicketStatus::InProgress => ("In Progress", "status-in-progress"),
        TicketStatus::Closed => ("Closed", "status-closed"),
        TicketStatus::Other(raw) => (raw.as_str(), "status-default"),
    };
    BadgeStyle {
        label: label.to_string(),
        class,
    }
}

pub fn priority_badge(priority: &TicketPriority) -> BadgeStyle {
    let (label, class) = match priority {
        TicketPriority::Low => ("Low", "priority-low"),
        TicketPriority::Medium => ("Medium", "priority-medium"),
        TicketPriority::High => ("High", "priority-high"),
        TicketPriority::Other(raw) => (raw.as_str(), "priority-default"),
    };
    BadgeStyle {
        label: label.to_string(),
        class,
    }
}

/// Shorten a description for list cards
pub fn truncate_description(description: &str) -> String {
    truncate_chars(description, LIST_DESCRIPTION_LIMIT)
}

fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// "March 5, 2025 at 2:07 PM". Unparseable input is returned unchanged.
pub fn format_created_at(raw: &str) -> String {
    const DISPLAY: &str = "%B %-d, %Y at %-I:%M %p";

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return with_offset.naive_local().format(DISPLAY).to_string();
    }
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(naive) => naive.format(DISPLAY).to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_status_maps_to_label_and_class() {
        let badge = status_badge(&TicketStatus::InProgress);
        assert_eq!(badge.label, "In Progress");
        assert_eq!(badge.class, "status-in-progress");
        assert_eq!(status_badge(&TicketStatus::Closed).class, "status-closed");
    }

    #[test]
    fn unknown_values_fall_back_to_default_class() {
        let badge = status_badge(&TicketStatus::from("blocked".to_string()));
        assert_eq!(badge.label, "blocked");
        assert_eq!(badge.class, "status-default");

        let badge = priority_badge(&TicketPriority::from("urgent".to_string()));
        assert_eq!(badge.label, "urgent");
        assert_eq!(badge.class, "priority-default");
    }

    #[test]
    fn priority_labels() {
        assert_eq!(priority_badge(&TicketPriority::High).label, "High");
        assert_eq!(priority_badge(&TicketPriority::Low).class, "priority-low");
    }

    #[test]
    fn short_description_is_untouched() {
        assert_eq!(truncate_description("Printer jam"), "Printer jam");
        let exact = "a".repeat(100);
        assert_eq!(truncate_description(&exact), exact);
    }

    #[test]
    fn long_description_is_cut_at_100_chars() {
        let long = "x".repeat(150);
        let shown = truncate_description(&long);
        assert_eq!(shown.len(), 103);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let text = "é".repeat(101);
        let shown = truncate_description(&text);
        assert_eq!(shown.chars().count(), 103);
    }

    #[test]
    fn formats_naive_server_timestamp() {
        assert_eq!(format_created_at("2025-03-05T14:07:00.123456"), "March 5, 2025 at 2:07 PM");
        assert_eq!(format_created_at("2024-12-31T00:05:00"), "December 31, 2024 at 12:05 AM");
    }

    #[test]
    fn formats_timestamp_with_offset() {
        assert_eq!(format_created_at("2025-03-05T09:30:00Z"), "March 5, 2025 at 9:30 AM");
    }

    #[test]
    fn unparseable_date_passes_through() {
        assert_eq!(format_created_at("yesterday"), "yesterday");
    }
}
