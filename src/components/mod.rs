//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render list items and chrome for the pages; they take plain
//! data props and report interactions through callbacks, leaving data
//! loading to the page that mounts them.

pub mod level_badge;
pub mod task_card;
pub mod wish_card;
