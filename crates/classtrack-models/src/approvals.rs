//! Assignable records: approvals and the kinds of records that carry an
//! assignee.
//!
//! An assignable record is actionable by its direct assignee or by a
//! privileged role; which roles count as privileged is declared per
//! [`AssignableKind`] by the authorization layer, not per record.

use crate::ids::{ApprovalId, UserId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The kinds of records that carry an `assigned_to` field.
///
/// Each kind declares its own privileged-role override set on the
/// authorization side; adding a kind here without a policy entry is a
/// compile error there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AssignableKind {
    Approval,
    AttendanceCorrection,
    PayrollAdjustment,
}

/// Lifecycle state of an approval record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    /// Whether the record still accepts a decision.
    pub const fn is_actionable(&self) -> bool {
        matches!(self, ApprovalStatus::Pending)
    }
}

/// A record whose actionability depends on assignment or privileged role.
pub trait Assignable {
    /// The user the record is assigned to.
    fn assigned_to(&self) -> UserId;

    /// The record kind, used to select the privileged-role override set.
    fn kind(&self) -> AssignableKind;
}

/// A pending change (class data edit, attendance correction, ...) routed to a
/// reviewer for sign-off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Approval {
    pub id: ApprovalId,
    pub kind: AssignableKind,
    /// The reviewer this record is routed to.
    pub assigned_to: UserId,
    /// The user who raised the request, if recorded.
    pub requested_by: Option<UserId>,
    pub status: ApprovalStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Assignable for Approval {
    fn assigned_to(&self) -> UserId {
        self.assigned_to
    }

    fn kind(&self) -> AssignableKind {
        self.kind
    }
}
