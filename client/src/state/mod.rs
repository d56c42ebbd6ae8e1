//! Client-side state for the upload page.
//!
//! DESIGN
//! ======
//! Each piece of state is a plain `Copy` struct held in an `RwSignal` by the
//! component that renders it. Transitions live here and never touch the DOM.

pub mod guidelines;
pub mod upload_form;
