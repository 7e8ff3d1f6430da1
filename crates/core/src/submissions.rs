//! Form submission kinds, statuses, and administrator transitions.
//!
//! Every submission is written once by a visitor and afterwards only its
//! status changes, through the admin dashboard.

use crate::booking;
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Initial status for contact messages and feedback.
pub const STATUS_NEW: &str = "new";
/// An administrator has read the message.
pub const STATUS_REVIEWED: &str = "reviewed";

/// Initial status for ambassador applications.
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_APPROVED: &str = "approved";
pub const STATUS_REJECTED: &str = "rejected";

// ---------------------------------------------------------------------------
// Kinds
// ---------------------------------------------------------------------------

/// The submission collections exposed on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    Contact,
    Feedback,
    Booking,
    AmbassadorApplication,
}

impl SubmissionKind {
    /// Parse the URL segment used by the admin routes.
    pub fn from_path(segment: &str) -> Result<Self, CoreError> {
        match segment {
            "contacts" => Ok(SubmissionKind::Contact),
            "feedback" => Ok(SubmissionKind::Feedback),
            "bookings" => Ok(SubmissionKind::Booking),
            "ambassador-applications" => Ok(SubmissionKind::AmbassadorApplication),
            other => Err(CoreError::Validation(format!(
                "Invalid submission kind '{other}'. Must be one of: \
                 contacts, feedback, bookings, ambassador-applications"
            ))),
        }
    }

    /// Entity name used in not-found errors.
    pub fn entity_name(self) -> &'static str {
        match self {
            SubmissionKind::Contact => "Contact",
            SubmissionKind::Feedback => "Feedback",
            SubmissionKind::Booking => "Booking",
            SubmissionKind::AmbassadorApplication => "AmbassadorApplication",
        }
    }

    /// Status assigned on creation.
    pub fn initial_status(self) -> &'static str {
        match self {
            SubmissionKind::Contact | SubmissionKind::Feedback => STATUS_NEW,
            SubmissionKind::Booking => booking::STATUS_PENDING,
            SubmissionKind::AmbassadorApplication => STATUS_PENDING,
        }
    }

    /// All statuses a submission of this kind can hold.
    pub fn valid_statuses(self) -> &'static [&'static str] {
        match self {
            SubmissionKind::Contact | SubmissionKind::Feedback => &[STATUS_NEW, STATUS_REVIEWED],
            SubmissionKind::Booking => booking::VALID_STATUSES,
            SubmissionKind::AmbassadorApplication => {
                &[STATUS_PENDING, STATUS_APPROVED, STATUS_REJECTED]
            }
        }
    }

    /// Returns the set of statuses that `from_status` may transition to.
    ///
    /// - contact / feedback: `new` <-> `reviewed`
    /// - booking: see [`booking::valid_transitions`]
    /// - ambassador application: `pending` -> `approved` | `rejected`
    pub fn valid_transitions(self, from_status: &str) -> &'static [&'static str] {
        match self {
            SubmissionKind::Contact | SubmissionKind::Feedback => match from_status {
                STATUS_NEW => &[STATUS_REVIEWED],
                STATUS_REVIEWED => &[STATUS_NEW],
                _ => &[],
            },
            SubmissionKind::Booking => booking::valid_transitions(from_status),
            SubmissionKind::AmbassadorApplication => match from_status {
                STATUS_PENDING => &[STATUS_APPROVED, STATUS_REJECTED],
                _ => &[],
            },
        }
    }
}

/// Validate that a status string is known for this kind.
pub fn validate_status(kind: SubmissionKind, status: &str) -> Result<(), CoreError> {
    let valid = kind.valid_statuses();
    if valid.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid {} status '{}'. Must be one of: {:?}",
            kind.entity_name(),
            status,
            valid
        )))
    }
}

/// Validate that a status transition from `current` to `next` is allowed.
pub fn validate_transition(
    kind: SubmissionKind,
    current: &str,
    next: &str,
) -> Result<(), CoreError> {
    let allowed = kind.valid_transitions(current);
    if allowed.contains(&next) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Cannot transition {} from '{}' to '{}'. Allowed transitions: {:?}",
            kind.entity_name(),
            current,
            next,
            allowed
        )))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
