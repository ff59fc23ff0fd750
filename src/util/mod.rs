//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod branding;
pub mod broadcast;
pub mod guard;
pub mod next_destination;
pub mod share;
pub mod storage;
