//! Shared client state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store is the only process-wide state; everything else lives
//! in page-local signals so views stay independently reloadable.

pub mod session;
