//! The complaint record: the one durable entity of the intake core.
//!
//! RULE: after creation only `status` may ever change, and nothing in this
//! crate changes it. Every other field is written exactly once at
//! submission and is immutable from then on.

use crate::error::IntakeError;
use crate::types::TicketId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Timestamp format used in the persisted tabular file (local time,
/// second precision).
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplaintRecord {
    pub id: TicketId,
    pub name: String,
    pub batch: Batch,
    pub category: Category,
    pub priority: Priority,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub status: Status,
}

/// Cohort label chosen by the submitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Batch {
    #[serde(rename = "Batch A")]
    A,
    #[serde(rename = "Batch B")]
    B,
    #[serde(rename = "Batch C")]
    C,
}

impl Batch {
    pub const ALL: [Batch; 3] = [Batch::A, Batch::B, Batch::C];

    pub fn label(self) -> &'static str {
        match self {
            Batch::A => "Batch A",
            Batch::B => "Batch B",
            Batch::C => "Batch C",
        }
    }
}

impl fmt::Display for Batch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Batch {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Batch::ALL
            .into_iter()
            .find(|b| b.label() == s)
            .ok_or_else(|| IntakeError::InvalidEnumValue {
                kind: "batch",
                value: s.to_string(),
            })
    }
}

/// Complaint category. Fixed-choice submissions pick from the full set;
/// inference never produces `Food` (no keyword group maps to it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Food,
    Hostel,
    Laundry,
    Academic,
    Misc,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Hostel,
        Category::Laundry,
        Category::Academic,
        Category::Misc,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Hostel => "Hostel",
            Category::Laundry => "Laundry",
            Category::Academic => "Academic",
            Category::Misc => "Misc",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| IntakeError::InvalidEnumValue {
                kind: "category",
                value: s.to_string(),
            })
    }
}

/// Priority label attached to a complaint. One label space covers both
/// deployment variants: the severity scale (Minor/Medium/Major) used by
/// fixed-choice submissions and the urgency scale (Low/Medium/High)
/// produced by inference. `Medium` belongs to both scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Minor,
    Low,
    Medium,
    Major,
    High,
}

impl Priority {
    /// The closed set a fixed-choice submitter picks from.
    pub const SEVERITY_SCALE: [Priority; 3] =
        [Priority::Minor, Priority::Medium, Priority::Major];

    /// The closed set inference produces.
    pub const URGENCY_SCALE: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn label(self) -> &'static str {
        match self {
            Priority::Minor => "Minor",
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::Major => "Major",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Priority::Minor,
            Priority::Low,
            Priority::Medium,
            Priority::Major,
            Priority::High,
        ]
        .into_iter()
        .find(|p| p.label() == s)
        .ok_or_else(|| IntakeError::InvalidEnumValue {
            kind: "priority",
            value: s.to_string(),
        })
    }
}

/// Lifecycle status. Records are created as `Submitted`; the later labels
/// exist for the external admin collaborator, which owns all transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Submitted,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Submitted => "Submitted",
            Status::InProgress => "In Progress",
            Status::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Status::Submitted, Status::InProgress, Status::Resolved]
            .into_iter()
            .find(|st| st.label() == s)
            .ok_or_else(|| IntakeError::InvalidEnumValue {
                kind: "status",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_str() {
        for batch in Batch::ALL {
            assert_eq!(batch.label().parse::<Batch>().unwrap(), batch);
        }
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>().unwrap(), category);
        }
        assert_eq!("In Progress".parse::<Status>().unwrap(), Status::InProgress);
    }

    #[test]
    fn unknown_label_is_invalid_enum_value() {
        let err = "Batch Z".parse::<Batch>().unwrap_err();
        assert!(
            matches!(err, IntakeError::InvalidEnumValue { kind: "batch", .. }),
            "expected InvalidEnumValue for unknown batch, got {err:?}"
        );
    }

    #[test]
    fn medium_belongs_to_both_priority_scales() {
        assert!(Priority::SEVERITY_SCALE.contains(&Priority::Medium));
        assert!(Priority::URGENCY_SCALE.contains(&Priority::Medium));
    }
}
