// SPDX-License-Identifier: MIT

//! The tracked job application record and its progress updates.
//!
//! Serialized form uses camelCase field names and RFC 3339 timestamps so
//! exported files stay interchangeable with earlier dumps of the same data.

use crate::clock::Clock;
use crate::status::Status;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Unique identifier for a tracked application.
    ///
    /// Assigned once at creation and never reassigned; imports preserve
    /// foreign ids as-is.
    pub struct RecordId("job-");
}

crate::define_id! {
    /// Unique identifier for a progress update attached to a record.
    pub struct UpdateId("upd-");
}

/// Where a posting came from. Free-form, but these are offered as defaults.
pub const SUGGESTED_SOURCES: &[&str] = &[
    "LinkedIn",
    "Indeed",
    "Glassdoor",
    "Company Website",
    "Referral",
    "Recruiter",
    "AngelList",
    "HackerNews",
    "Other",
];

/// Resume variants offered as defaults for the required `resume_used` field.
pub const RESUME_PRESETS: &[&str] = &[
    "Standard Resume",
    "Technical Resume",
    "Product Manager Resume",
    "Designer Resume",
    "Marketing Resume",
    "Sales Resume",
    "Custom Resume A",
    "Custom Resume B",
    "Other",
];

/// Validation failures on record creation or note editing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("required field '{0}' must not be empty")]
    MissingField(&'static str),
    #[error("update message must not be empty")]
    EmptyMessage,
}

/// One timestamped free-text progress note attached to a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobUpdate {
    pub id: UpdateId,
    pub date: DateTime<Utc>,
    pub message: String,
}

/// One tracked job application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub id: RecordId,
    pub company_name: String,
    pub job_title: String,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub job_url: Option<String>,
    pub source: String,
    pub resume_used: String,
    pub status: Status,
    #[serde(
        default,
        deserialize_with = "empty_as_none_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_applied: Option<NaiveDate>,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub salary: Option<String>,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<String>,
    #[serde(default)]
    pub notes: String,
    /// Progress notes, newest first.
    #[serde(default)]
    pub updates: Vec<JobUpdate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobRecord {
    /// Create a record from a validated draft. `created_at == updated_at`.
    pub fn new(draft: RecordDraft, clock: &impl Clock) -> Result<Self, ValidationError> {
        draft.validate()?;
        let now = clock.now();
        Ok(Self {
            id: RecordId::new(),
            company_name: draft.company_name,
            job_title: draft.job_title,
            job_url: draft.job_url,
            source: draft.source,
            resume_used: draft.resume_used,
            status: draft.status,
            date_applied: draft.date_applied,
            salary: draft.salary,
            location: draft.location,
            notes: draft.notes,
            updates: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Merge the present fields of a patch into this record and refresh
    /// `updated_at`. `id` and `created_at` are not expressible in a patch.
    pub fn apply(&mut self, patch: RecordPatch, clock: &impl Clock) {
        let RecordPatch {
            company_name,
            job_title,
            job_url,
            source,
            resume_used,
            status,
            date_applied,
            salary,
            location,
            notes,
            updates,
        } = patch;

        if let Some(v) = company_name {
            self.company_name = v;
        }
        if let Some(v) = job_title {
            self.job_title = v;
        }
        if let Some(v) = job_url {
            self.job_url = v;
        }
        if let Some(v) = source {
            self.source = v;
        }
        if let Some(v) = resume_used {
            self.resume_used = v;
        }
        if let Some(v) = status {
            self.status = v;
        }
        if let Some(v) = date_applied {
            self.date_applied = v;
        }
        if let Some(v) = salary {
            self.salary = v;
        }
        if let Some(v) = location {
            self.location = v;
        }
        if let Some(v) = notes {
            self.notes = v;
        }
        if let Some(v) = updates {
            self.updates = v;
        }
        self.updated_at = clock.now();
    }

    /// Prepend a progress note with a fresh id and the current timestamp.
    ///
    /// Does not touch `updated_at`; note edits are folded into the
    /// enclosing record save, which refreshes it once.
    pub fn push_update(
        &mut self,
        message: &str,
        clock: &impl Clock,
    ) -> Result<&JobUpdate, ValidationError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ValidationError::EmptyMessage);
        }
        self.updates.insert(
            0,
            JobUpdate {
                id: UpdateId::new(),
                date: clock.now(),
                message: message.to_string(),
            },
        );
        Ok(&self.updates[0])
    }

    /// Find an update by id or unique prefix. Same resolution rules as
    /// record lookup: an exact id wins, an ambiguous prefix matches
    /// nothing.
    pub fn find_update(&self, id: &str) -> Option<&JobUpdate> {
        if id.is_empty() {
            return None;
        }
        if let Some(update) = self.updates.iter().find(|u| u.id == *id) {
            return Some(update);
        }
        let mut matches = self
            .updates
            .iter()
            .filter(|u| u.id.as_str().starts_with(id) || u.id.suffix().starts_with(id));
        match (matches.next(), matches.next()) {
            (Some(update), None) => Some(update),
            _ => None,
        }
    }

    /// Remove exactly one update by id. Returns false (and leaves the list
    /// untouched) when no update matches.
    pub fn remove_update(&mut self, update_id: &str) -> bool {
        match self.updates.iter().position(|u| u.id == *update_id) {
            Some(idx) => {
                self.updates.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Date shown for recency: `date_applied` when present, otherwise the
    /// creation date (a record with no explicit applied date is "not yet
    /// applied").
    pub fn effective_date(&self) -> NaiveDate {
        self.date_applied.unwrap_or_else(|| self.created_at.date_naive())
    }
}

// Form-based exporters write "" for unset optional fields; treat that
// the same as absent so their dumps load and import cleanly.
fn empty_as_none<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(de)?.filter(|s| !s.is_empty()))
}

fn empty_as_none_date<'de, D>(de: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<String>::deserialize(de)?.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Input for creating a new record. Required fields up front, everything
/// else via setters.
#[derive(Debug, Clone)]
pub struct RecordDraft {
    pub company_name: String,
    pub job_title: String,
    pub resume_used: String,
    pub job_url: Option<String>,
    pub source: String,
    pub status: Status,
    pub date_applied: Option<NaiveDate>,
    pub salary: Option<String>,
    pub location: Option<String>,
    pub notes: String,
}

impl RecordDraft {
    pub fn new(
        company_name: impl Into<String>,
        job_title: impl Into<String>,
        resume_used: impl Into<String>,
    ) -> Self {
        Self {
            company_name: company_name.into(),
            job_title: job_title.into(),
            resume_used: resume_used.into(),
            job_url: None,
            source: SUGGESTED_SOURCES[0].to_string(),
            status: Status::Saved,
            date_applied: None,
            salary: None,
            location: None,
            notes: String::new(),
        }
    }

    crate::setters! {
        into {
            source: String,
            notes: String,
        }
        set {
            status: Status,
        }
        option {
            job_url: String,
            date_applied: NaiveDate,
            salary: String,
            location: String,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.company_name.trim().is_empty() {
            return Err(ValidationError::MissingField("company_name"));
        }
        if self.job_title.trim().is_empty() {
            return Err(ValidationError::MissingField("job_title"));
        }
        if self.resume_used.trim().is_empty() {
            return Err(ValidationError::MissingField("resume_used"));
        }
        Ok(())
    }
}

/// Partial update for an existing record. `None` fields are left alone;
/// optional record fields use a nested `Option` so they can be cleared.
#[derive(Debug, Clone, Default)]
pub struct RecordPatch {
    pub company_name: Option<String>,
    pub job_title: Option<String>,
    pub job_url: Option<Option<String>>,
    pub source: Option<String>,
    pub resume_used: Option<String>,
    pub status: Option<Status>,
    pub date_applied: Option<Option<NaiveDate>>,
    pub salary: Option<Option<String>>,
    pub location: Option<Option<String>>,
    pub notes: Option<String>,
    pub updates: Option<Vec<JobUpdate>>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        self.company_name.is_none()
            && self.job_title.is_none()
            && self.job_url.is_none()
            && self.source.is_none()
            && self.resume_used.is_none()
            && self.status.is_none()
            && self.date_applied.is_none()
            && self.salary.is_none()
            && self.location.is_none()
            && self.notes.is_none()
            && self.updates.is_none()
    }

    /// Patch that only changes the pipeline status.
    pub fn status_change(status: Status) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

crate::builder! {
    pub struct JobRecordBuilder => JobRecord {
        into {
            company_name: String = "Acme Corp",
            job_title: String = "Software Engineer",
            source: String = "LinkedIn",
            resume_used: String = "Standard Resume",
            notes: String = "",
        }
        set {
            id: RecordId = RecordId::new(),
            status: Status = Status::Saved,
            updates: Vec<JobUpdate> = Vec::new(),
            created_at: DateTime<Utc> = Utc::now(),
            updated_at: DateTime<Utc> = Utc::now(),
        }
        option {
            job_url: String = None,
            date_applied: NaiveDate = None,
            salary: String = None,
            location: String = None,
        }
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
