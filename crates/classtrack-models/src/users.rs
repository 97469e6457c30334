//! User and role domain models.
//!
//! A user carries exactly one [`Role`]; the role alone determines the user's
//! permission set. Roles form a closed set matched by exact slug equality —
//! there is no hierarchy, so `admin` does not implicitly satisfy a `teacher`
//! check unless both roles are listed by the caller.

use crate::ids::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Error type for role parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleParseError {
    /// The slug does not name a known role.
    UnknownRole(String),
}

impl std::error::Error for RoleParseError {}

impl fmt::Display for RoleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownRole(slug) => write!(f, "Unknown role: {}", slug),
        }
    }
}

/// A user's function within the institution.
///
/// The wire form is the snake_case slug (`admin`, `exam_incharge`, ...).
/// Matching is exact: no case folding, no implication between roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Principal,
    Teacher,
    Accountant,
    Student,
    It,
    ExamIncharge,
    ClassTeacher,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 8] = [
        Role::Admin,
        Role::Principal,
        Role::Teacher,
        Role::Accountant,
        Role::Student,
        Role::It,
        Role::ExamIncharge,
        Role::ClassTeacher,
    ];

    /// The snake_case slug stored in tokens and session records.
    pub const fn as_slug(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Principal => "principal",
            Role::Teacher => "teacher",
            Role::Accountant => "accountant",
            Role::Student => "student",
            Role::It => "it",
            Role::ExamIncharge => "exam_incharge",
            Role::ClassTeacher => "class_teacher",
        }
    }

    /// Resolve a slug to a role, or `None` if the slug is unrecognized.
    ///
    /// Unrecognized slugs (malformed or legacy data) are a normal outcome for
    /// callers, not an error: an unknown role holds no permissions and
    /// satisfies no role check.
    pub fn from_slug(slug: &str) -> Option<Role> {
        match slug {
            "admin" => Some(Role::Admin),
            "principal" => Some(Role::Principal),
            "teacher" => Some(Role::Teacher),
            "accountant" => Some(Role::Accountant),
            "student" => Some(Role::Student),
            "it" => Some(Role::It),
            "exam_incharge" => Some(Role::ExamIncharge),
            "class_teacher" => Some(Role::ClassTeacher),
            _ => None,
        }
    }

    /// Human-readable label for display surfaces.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Principal => "Principal",
            Role::Teacher => "Teacher",
            Role::Accountant => "Accountant",
            Role::Student => "Student",
            Role::It => "IT",
            Role::ExamIncharge => "Exam Incharge",
            Role::ClassTeacher => "Class Teacher",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_slug())
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slug(s).ok_or_else(|| RoleParseError::UnknownRole(s.to_string()))
    }
}

/// An authenticated user as seen by the authorization core.
///
/// The enclosing application stores the full profile; authorization only
/// needs the identity and the single assigned role, supplied explicitly by
/// the caller (never read from ambient session state).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: UserId,
    pub role: Role,
}

impl User {
    pub const fn new(id: UserId, role: Role) -> Self {
        Self { id, role }
    }
}
