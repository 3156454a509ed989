// SPDX-License-Identifier: MIT

//! Application pipeline status.
//!
//! A status is a free-standing field, not a state machine: any status may
//! be set to any other status at any time. Tests pin this down explicitly.

use serde::{Deserialize, Serialize};

/// Pipeline stage of a tracked application.
///
/// Pipeline order is `saved → applied → screening → interview → offer`,
/// with `rejected` and `withdrawn` as terminal side-states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Saved,
    Applied,
    Screening,
    Interview,
    Offer,
    Rejected,
    Withdrawn,
}

crate::simple_display! {
    Status {
        Saved => "saved",
        Applied => "applied",
        Screening => "screening",
        Interview => "interview",
        Offer => "offer",
        Rejected => "rejected",
        Withdrawn => "withdrawn",
    }
}

impl Status {
    /// Every status, in fixed label order (drives the stats breakdown).
    pub const ALL: [Status; 7] = [
        Status::Saved,
        Status::Applied,
        Status::Screening,
        Status::Interview,
        Status::Offer,
        Status::Rejected,
        Status::Withdrawn,
    ];

    /// Board columns, in display order. `withdrawn` records are tracked
    /// and counted but do not get a column of their own.
    pub const COLUMNS: [Status; 6] = [
        Status::Saved,
        Status::Applied,
        Status::Screening,
        Status::Interview,
        Status::Offer,
        Status::Rejected,
    ];

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Saved => "Saved",
            Status::Applied => "Applied",
            Status::Screening => "Screening",
            Status::Interview => "Interview",
            Status::Offer => "Offer",
            Status::Rejected => "Rejected",
            Status::Withdrawn => "Withdrawn",
        }
    }

    /// Parse a lowercase wire name back into a status.
    pub fn parse(s: &str) -> Option<Status> {
        Status::ALL.iter().copied().find(|st| st.to_string() == s)
    }
}

impl std::str::FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::parse(&s.to_lowercase()).ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Error for an unrecognized status name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status '{0}' (expected one of: saved, applied, screening, interview, offer, rejected, withdrawn)")]
pub struct UnknownStatus(pub String);

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
