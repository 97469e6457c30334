//! Permission constants for the Classtrack API.
//!
//! Centralized permission string constants for use across the codebase.
//! Using these constants instead of string literals ensures consistency and
//! makes refactoring easier.
//!
//! # Example
//!
//! ```ignore
//! use classtrack_authz::{permissions, resolver};
//!
//! if resolver::has_permission(&user, permissions::VIEW_AUDIT_TRAILS) {
//!     // Show the audit trail
//! }
//! ```

// =============================================================================
// Attendance permissions
// =============================================================================

/// Permission to view attendance across the whole school
pub const ATTENDANCE_VIEW_ALL: &str = "attendance.view_all";
/// Permission to view one's own attendance record
pub const ATTENDANCE_VIEW_OWN: &str = "attendance.view_own";
/// Permission to mark attendance
pub const ATTENDANCE_MARK: &str = "attendance.mark";
/// Permission to edit already-marked attendance
pub const ATTENDANCE_EDIT: &str = "attendance.edit";

// =============================================================================
// Audit trail permissions
// =============================================================================

/// Permission to view audit trails
pub const VIEW_AUDIT_TRAILS: &str = "view_audit_trails";
/// Permission to export audit trails
pub const EXPORT_AUDIT_TRAILS: &str = "export_audit_trails";

// =============================================================================
// Biometric device permissions
// =============================================================================

/// Permission to manage biometric devices
pub const BIOMETRIC_MANAGE_DEVICES: &str = "biometric.manage_devices";
/// Permission to view raw biometric punch logs
pub const BIOMETRIC_VIEW_LOGS: &str = "biometric.view_logs";
/// Permission to enroll users on biometric devices
pub const BIOMETRIC_ENROLL: &str = "biometric.enroll";

// =============================================================================
// Payroll permissions
// =============================================================================

/// Permission to view all salary records
pub const PAYROLL_VIEW_ALL: &str = "payroll.view_all";
/// Permission to view one's own salary record
pub const PAYROLL_VIEW_OWN: &str = "payroll.view_own";
/// Permission to run payroll processing
pub const PAYROLL_PROCESS: &str = "payroll.process";

// =============================================================================
// Approval permissions
// =============================================================================

/// Permission to review pending approvals
pub const APPROVALS_REVIEW: &str = "approvals.review";
/// Permission to reassign approvals to another reviewer
pub const APPROVALS_ASSIGN: &str = "approvals.assign";

// =============================================================================
// Exam permissions
// =============================================================================

/// Permission to schedule exams
pub const EXAMS_SCHEDULE: &str = "exams.schedule";
/// Permission to enter and amend exam grades
pub const EXAMS_GRADE: &str = "exams.grade";

// =============================================================================
// Reports permissions
// =============================================================================

/// Permission to view reports
pub const REPORTS_VIEW: &str = "reports.view";
/// Permission to export reports
pub const REPORTS_EXPORT: &str = "reports.export";

// =============================================================================
// Users permissions
// =============================================================================

/// Permission to manage user accounts
pub const USERS_MANAGE: &str = "users.manage";

// =============================================================================
// System permissions
// =============================================================================

/// Permission to trigger system backups
pub const SYSTEM_BACKUP: &str = "system.backup";
/// Permission to change system settings
pub const SYSTEM_SETTINGS: &str = "system.settings";
