//! Authorization resolution predicates.
//!
//! Pure decision functions over a user, the static grant table, and (for
//! assignable records) an [`AssignmentPolicy`]. Every predicate is total:
//! unknown roles or permissions resolve to `false`, never to an error or a
//! panic. Translating a denial into a 403 or redirect belongs to the calling
//! layer.
//!
//! The caller supplies the user explicitly; nothing here reads session or
//! request state.

use crate::grants::permissions_for_role;
use crate::policy::AssignmentPolicy;
use classtrack_models::{Assignable, Role, User};
use tracing::trace;

/// Whether the user's role is one of the allowed roles.
///
/// Exact membership: no case folding, no hierarchy. An empty `allowed` set
/// denies everyone.
pub fn has_role(user: &User, allowed: &[Role]) -> bool {
    let granted = allowed.contains(&user.role);
    if !granted {
        trace!(user_id = %user.id, role = %user.role, ?allowed, "role check denied");
    }
    granted
}

/// Whether the user's role grants the named permission.
///
/// A permission owned by no role is `false` for every user.
pub fn has_permission(user: &User, permission: &str) -> bool {
    let granted = permissions_for_role(user.role).contains(&permission);
    if !granted {
        trace!(user_id = %user.id, role = %user.role, permission, "permission check denied");
    }
    granted
}

/// Whether the user may act on an assignable record.
///
/// Granted by direct assignment (`assigned_to == user.id`) or by holding one
/// of the policy's privileged roles; the two paths are independent. Status
/// checks (e.g. only pending approvals accept decisions) compose at the call
/// site.
pub fn can_act_on_assignment(
    user: &User,
    entity: &impl Assignable,
    policy: &AssignmentPolicy,
) -> bool {
    if entity.assigned_to() == user.id {
        return true;
    }
    let granted = has_role(user, policy.privileged_roles());
    if !granted {
        trace!(
            user_id = %user.id,
            role = %user.role,
            kind = ?entity.kind(),
            "assignment check denied"
        );
    }
    granted
}
