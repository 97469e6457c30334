//! # Classtrack Authz
//!
//! Role and permission resolution for the Classtrack API.
//!
//! This crate is the decision core behind the attendance, audit, biometric,
//! payroll, and approval endpoints: given an authenticated user it answers
//! "may this user do X" as a plain boolean. It is side-effect free and fails
//! closed — unrecognized roles or permissions deny rather than error.
//!
//! - [`permissions`]: Permission string constants
//! - [`grants`]: The static role → permission table
//! - [`policy`]: Per-kind privileged-role sets for assignable records
//! - [`resolver`]: The decision predicates
//!
//! # Example
//!
//! ```ignore
//! use classtrack_authz::{permissions, resolver, AssignmentPolicy};
//! use classtrack_models::{AssignableKind, Role, User, UserId};
//!
//! let principal = User::new(UserId::new(), Role::Principal);
//! assert!(resolver::has_permission(&principal, permissions::VIEW_AUDIT_TRAILS));
//!
//! let policy = AssignmentPolicy::for_kind(AssignableKind::Approval);
//! // resolver::can_act_on_assignment(&principal, &approval, &policy)
//! ```

pub mod grants;
pub mod permissions;
pub mod policy;
pub mod resolver;

// Re-export commonly used items at crate root
pub use grants::{permissions_for_role, permissions_for_slug};
pub use policy::AssignmentPolicy;
pub use resolver::{can_act_on_assignment, has_permission, has_role};
