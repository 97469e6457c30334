//! The static role → permission grant table.
//!
//! The table is data, not behavior: one explicit arm per role, enumerable and
//! checkable in tests. It is fixed for the life of the process; if it ever
//! becomes editable at runtime it must be replaced wholesale (swap the whole
//! table), never mutated in place, so readers cannot observe a
//! partially-updated mapping.

use crate::permissions::*;
use classtrack_models::Role;

/// The permissions granted to a role.
///
/// Pure lookup, deterministic across calls. A user's permission set is
/// exactly this set for their role; there are no per-user grants.
pub const fn permissions_for_role(role: Role) -> &'static [&'static str] {
    match role {
        Role::Admin => &[
            ATTENDANCE_VIEW_ALL,
            ATTENDANCE_VIEW_OWN,
            ATTENDANCE_MARK,
            ATTENDANCE_EDIT,
            VIEW_AUDIT_TRAILS,
            EXPORT_AUDIT_TRAILS,
            BIOMETRIC_MANAGE_DEVICES,
            BIOMETRIC_VIEW_LOGS,
            BIOMETRIC_ENROLL,
            PAYROLL_VIEW_ALL,
            PAYROLL_VIEW_OWN,
            PAYROLL_PROCESS,
            APPROVALS_REVIEW,
            APPROVALS_ASSIGN,
            EXAMS_SCHEDULE,
            EXAMS_GRADE,
            REPORTS_VIEW,
            REPORTS_EXPORT,
            USERS_MANAGE,
            SYSTEM_BACKUP,
            SYSTEM_SETTINGS,
        ],
        Role::Principal => &[
            ATTENDANCE_VIEW_ALL,
            ATTENDANCE_EDIT,
            VIEW_AUDIT_TRAILS,
            EXPORT_AUDIT_TRAILS,
            PAYROLL_VIEW_ALL,
            APPROVALS_REVIEW,
            APPROVALS_ASSIGN,
            EXAMS_SCHEDULE,
            REPORTS_VIEW,
            REPORTS_EXPORT,
        ],
        Role::Teacher => &[
            ATTENDANCE_VIEW_OWN,
            ATTENDANCE_MARK,
            PAYROLL_VIEW_OWN,
            EXAMS_GRADE,
            REPORTS_VIEW,
        ],
        Role::Accountant => &[
            PAYROLL_VIEW_ALL,
            PAYROLL_VIEW_OWN,
            PAYROLL_PROCESS,
            REPORTS_VIEW,
            REPORTS_EXPORT,
        ],
        Role::Student => &[ATTENDANCE_VIEW_OWN],
        Role::It => &[
            BIOMETRIC_MANAGE_DEVICES,
            BIOMETRIC_VIEW_LOGS,
            BIOMETRIC_ENROLL,
            SYSTEM_BACKUP,
        ],
        Role::ExamIncharge => &[EXAMS_SCHEDULE, EXAMS_GRADE, REPORTS_VIEW],
        Role::ClassTeacher => &[
            ATTENDANCE_VIEW_OWN,
            ATTENDANCE_MARK,
            ATTENDANCE_EDIT,
            PAYROLL_VIEW_OWN,
            EXAMS_GRADE,
            REPORTS_VIEW,
        ],
    }
}

/// Slug-keyed variant of [`permissions_for_role`] for callers holding raw
/// role strings (tokens, legacy rows). Unknown slugs resolve to the empty
/// set, never an error.
pub fn permissions_for_slug(slug: &str) -> &'static [&'static str] {
    match Role::from_slug(slug) {
        Some(role) => permissions_for_role(role),
        None => &[],
    }
}
