//! # Classtrack Models
//!
//! Domain models for the Classtrack authorization core.
//!
//! # Modules
//!
//! - [`ids`]: Strongly-typed UUID newtypes for entities
//! - [`users`]: Users and the closed [`Role`] set
//! - [`approvals`]: Assignable records (approvals) and their kinds
//!
//! # Example
//!
//! ```ignore
//! use classtrack_models::{Role, User, UserId};
//!
//! let reviewer = User::new(UserId::new(), Role::Principal);
//! assert_eq!(reviewer.role.as_slug(), "principal");
//! ```

pub mod approvals;
pub mod ids;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use approvals::{Approval, ApprovalStatus, Assignable, AssignableKind};
pub use ids::{ApprovalId, UserId};
pub use users::{Role, RoleParseError, User};
