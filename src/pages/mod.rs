//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (resources, form signals) and
//! delegates rendering details to `components`. `list` renders settled
//! list resources for the pages that load one.

pub mod about;
pub mod admin;
pub mod home;
pub mod list;
pub mod login;
pub mod not_found;
