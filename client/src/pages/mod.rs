//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (params, filters, document
//! metadata) and delegates rendering details to `components`.

pub mod about;
pub mod home;
pub mod not_found;
pub mod work;
pub mod work_detail;


use content::profile::OWNER;

/// Document title in the form `"<Owner> | <Page>"`.
pub fn page_title(page: &str) -> String {
    format!("{OWNER} | {page}")
}
