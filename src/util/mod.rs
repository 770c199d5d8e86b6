//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, document
//! classes, location) from stores and pages so both can be tested natively.

pub mod dark_mode;
pub mod navigation;
pub mod storage;
