//! Route-level page components.

pub mod admin;
pub mod admin_branding;
pub mod home;
pub mod listing_form;
pub mod login;
pub mod profile;
