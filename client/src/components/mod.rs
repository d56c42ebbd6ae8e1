//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components own their element references and reactive state, and delegate
//! every decision to `state`.

pub mod guidelines_panel;
pub mod upload_form;
