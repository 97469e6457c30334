use classtrack_authz::{
    AssignmentPolicy, can_act_on_assignment, has_permission, has_role, permissions,
    permissions_for_role, permissions_for_slug,
};
use classtrack_models::{
    Approval, ApprovalId, ApprovalStatus, AssignableKind, Role, User, UserId,
};

fn create_test_user(id: u128, role: Role) -> User {
    User::new(UserId::from_u128(id), role)
}

fn create_test_approval(assigned_to: u128) -> Approval {
    let now = chrono::Utc::now();
    Approval {
        id: ApprovalId::from_u128(1),
        kind: AssignableKind::Approval,
        assigned_to: UserId::from_u128(assigned_to),
        requested_by: None,
        status: ApprovalStatus::Pending,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_has_role_admin_in_mixed_set() {
    let user = create_test_user(1, Role::Admin);
    let allowed = [Role::Admin, Role::Principal, Role::ClassTeacher];
    assert!(has_role(&user, &allowed));
}

#[test]
fn test_has_role_not_in_set() {
    let user = create_test_user(1, Role::Teacher);
    let allowed = [Role::Admin, Role::Principal];
    assert!(!has_role(&user, &allowed));
}

#[test]
fn test_has_role_exact_equality_over_all_roles() {
    for role in Role::ALL {
        let user = create_test_user(1, role);
        for candidate in Role::ALL {
            assert_eq!(has_role(&user, &[candidate]), role == candidate);
        }
    }
}

#[test]
fn test_has_role_empty_set_always_denies() {
    for role in Role::ALL {
        let user = create_test_user(1, role);
        assert!(!has_role(&user, &[]));
    }
}

#[test]
fn test_has_role_no_hierarchy() {
    // Admin does not implicitly satisfy a teacher-only check.
    let admin = create_test_user(1, Role::Admin);
    assert!(!has_role(&admin, &[Role::Teacher]));
    assert!(!has_role(&admin, &[Role::ClassTeacher, Role::Student]));
}

#[test]
fn test_permissions_for_role_idempotent() {
    for role in Role::ALL {
        assert_eq!(permissions_for_role(role), permissions_for_role(role));
    }
}

#[test]
fn test_has_permission_matches_table_for_every_role() {
    for role in Role::ALL {
        let user = create_test_user(1, role);
        for permission in permissions_for_role(role) {
            assert!(has_permission(&user, permission));
        }
    }
}

#[test]
fn test_student_cannot_view_audit_trails() {
    let student = create_test_user(1, Role::Student);
    assert!(!has_permission(&student, permissions::VIEW_AUDIT_TRAILS));
}

#[test]
fn test_admin_can_view_audit_trails() {
    let admin = create_test_user(1, Role::Admin);
    assert!(has_permission(&admin, permissions::VIEW_AUDIT_TRAILS));
}

#[test]
fn test_permission_owned_by_no_role_always_denied() {
    for role in Role::ALL {
        let user = create_test_user(1, role);
        assert!(!has_permission(&user, "attendance.delete_everything"));
        assert!(!has_permission(&user, ""));
    }
}

#[test]
fn test_unknown_role_slug_has_no_permissions() {
    assert!(permissions_for_slug("superuser").is_empty());
    assert!(permissions_for_slug("ADMIN").is_empty());
}

#[test]
fn test_assignment_direct_assignee_overrides_role() {
    // A student assigned to the record may act on it.
    let user = create_test_user(42, Role::Student);
    let approval = create_test_approval(42);
    let policy = AssignmentPolicy::for_kind(AssignableKind::Approval);
    assert!(can_act_on_assignment(&user, &approval, &policy));
}

#[test]
fn test_assignment_privileged_role_overrides_assignee() {
    let user = create_test_user(42, Role::Admin);
    let approval = create_test_approval(7);
    let policy = AssignmentPolicy::new([Role::Admin, Role::Principal]);
    assert!(can_act_on_assignment(&user, &approval, &policy));
}

#[test]
fn test_assignment_neither_assignee_nor_privileged() {
    let user = create_test_user(42, Role::Teacher);
    let approval = create_test_approval(7);
    let policy = AssignmentPolicy::new([Role::Admin, Role::Principal]);
    assert!(!can_act_on_assignment(&user, &approval, &policy));
}

#[test]
fn test_assignment_empty_policy_only_assignee_may_act() {
    let policy = AssignmentPolicy::new([]);
    let approval = create_test_approval(7);

    let assignee = create_test_user(7, Role::Student);
    assert!(can_act_on_assignment(&assignee, &approval, &policy));

    let admin = create_test_user(42, Role::Admin);
    assert!(!can_act_on_assignment(&admin, &approval, &policy));
}

#[test]
fn test_assignment_policy_varies_by_kind() {
    let class_teacher = create_test_user(42, Role::ClassTeacher);
    let approval = create_test_approval(7);

    // Class teachers are privileged for attendance corrections but not for
    // generic approvals.
    let approvals = AssignmentPolicy::for_kind(AssignableKind::Approval);
    assert!(!can_act_on_assignment(&class_teacher, &approval, &approvals));

    let corrections = AssignmentPolicy::for_kind(AssignableKind::AttendanceCorrection);
    assert!(can_act_on_assignment(&class_teacher, &approval, &corrections));
}

#[test]
fn test_decision_composes_with_status() {
    let admin = create_test_user(1, Role::Admin);
    let mut approval = create_test_approval(7);
    let policy = AssignmentPolicy::for_kind(AssignableKind::Approval);

    assert!(can_act_on_assignment(&admin, &approval, &policy) && approval.status.is_actionable());

    approval.status = ApprovalStatus::Approved;
    assert!(!(can_act_on_assignment(&admin, &approval, &policy) && approval.status.is_actionable()));
}
