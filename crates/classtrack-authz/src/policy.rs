//! Assignment policies: which roles may act on an assignable record without
//! being its assignee.
//!
//! The privileged set is declared per record kind, not per call site, so a
//! new assignable kind gets its override roles in exactly one place.

use classtrack_models::{AssignableKind, Role};

/// The roles allowed to act on a record of some kind regardless of who it is
/// assigned to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentPolicy {
    privileged_roles: Vec<Role>,
}

impl AssignmentPolicy {
    /// Build a policy from an explicit privileged-role set.
    ///
    /// An empty set means assignment is the only path to access.
    pub fn new(privileged_roles: impl Into<Vec<Role>>) -> Self {
        Self {
            privileged_roles: privileged_roles.into(),
        }
    }

    /// The built-in policy for a record kind.
    pub fn for_kind(kind: AssignableKind) -> Self {
        match kind {
            AssignableKind::Approval => Self::new([Role::Admin, Role::Principal]),
            AssignableKind::AttendanceCorrection => {
                Self::new([Role::Admin, Role::Principal, Role::ClassTeacher])
            }
            AssignableKind::PayrollAdjustment => Self::new([Role::Admin, Role::Accountant]),
        }
    }

    /// The roles this policy privileges.
    pub fn privileged_roles(&self) -> &[Role] {
        &self.privileged_roles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_approval_policy() {
        let policy = AssignmentPolicy::for_kind(AssignableKind::Approval);
        assert_eq!(policy.privileged_roles(), &[Role::Admin, Role::Principal]);
    }

    #[test]
    fn test_builtin_attendance_correction_policy() {
        let policy = AssignmentPolicy::for_kind(AssignableKind::AttendanceCorrection);
        assert!(policy.privileged_roles().contains(&Role::ClassTeacher));
        assert!(!policy.privileged_roles().contains(&Role::Teacher));
    }

    #[test]
    fn test_builtin_payroll_adjustment_policy() {
        let policy = AssignmentPolicy::for_kind(AssignableKind::PayrollAdjustment);
        assert_eq!(policy.privileged_roles(), &[Role::Admin, Role::Accountant]);
    }

    #[test]
    fn test_custom_policy() {
        let policy = AssignmentPolicy::new([Role::It]);
        assert_eq!(policy.privileged_roles(), &[Role::It]);

        let empty = AssignmentPolicy::new([]);
        assert!(empty.privileged_roles().is_empty());
    }
}
