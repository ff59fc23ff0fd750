//! Well-known storage keys, event names, and route paths.
//!
//! SYSTEM CONTEXT
//! ==============
//! Other tabs and independently mounted components agree on these names, so
//! they live in one place instead of being repeated at call sites.

/// Tab-scoped (`sessionStorage`) key holding the path to resume after login.
pub const NEXT_AFTER_LOGIN_KEY: &str = "nextAfterLogin";

/// Durable (`localStorage`) key holding the serialized brand record.
pub const BRAND_STORAGE_KEY: &str = "houser.brand";

/// In-page event dispatched on `window` after the brand record is saved.
pub const BRAND_UPDATED_EVENT: &str = "houser:brand:updated";

/// Native cross-tab notification fired when another tab writes storage.
pub const STORAGE_EVENT: &str = "storage";

/// Application root; denied admins land here.
pub const ROOT_PATH: &str = "/";

/// Login route; accepts a `next` query parameter.
pub const LOGIN_PATH: &str = "/login";

/// Query parameter carrying the URL-encoded destination on the login route.
pub const NEXT_QUERY_PARAM: &str = "next";
