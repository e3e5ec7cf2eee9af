//! # assetdesk RBAC
//!
//! Client-side role-based access control for the asset desk.
//!
//! ## Components
//!
//! - `Capability` - The capability table (capability -> allowed roles)
//! - `derive_permissions` - Role to `PermissionSet`, fail-closed
//! - `AccessGuard` - Conditional rendering keyed on role membership
//! - `views` - Declarative control visibility per screen
//! - `Session` - Explicit holder for the signed-in profile
//!
//! This is gating logic for the UI, not a security boundary.

pub mod capability;
pub mod permissions;
pub mod guard;
pub mod views;
pub mod session;

pub use capability::Capability;
pub use permissions::{derive_permissions, PermissionSet};
pub use guard::{AccessGuard, DenyReason, GuardDecision};
pub use views::{Control, ControlState, Screen};
pub use session::{ProfileChange, Session};
