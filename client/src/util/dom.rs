//! Browser effects for the upload page.
//!
//! Everything here needs a `window`. SSR and native test builds compile the
//! same signatures as no-ops so components don't need their own `cfg` gates.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use leptos::html;
use leptos::prelude::*;

use crate::state::guidelines::PanelDisplay;
use crate::state::upload_form::GuardEffects;

/// [`GuardEffects`] backed by `window.alert` and the rendered file input.
pub struct BrowserEffects {
    file_input: NodeRef<html::Input>,
}

impl BrowserEffects {
    pub fn new(file_input: NodeRef<html::Input>) -> Self {
        Self { file_input }
    }
}

impl GuardEffects for BrowserEffects {
    fn alert(&mut self, message: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                log::warn!("no window; dropped alert: {message}");
                return;
            };
            if window.alert_with_message(message).is_err() {
                log::warn!("alert failed: {message}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = message;
        }
    }

    fn clear_selection(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = self.file_input.get_untracked() {
                input.set_value("");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self.file_input;
        }
    }
}

/// Name of the first file selected in `input`, if any.
pub fn selected_file_name(input: NodeRef<html::Input>) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        input
            .get_untracked()
            .and_then(|el| el.files())
            .and_then(|files| files.get(0))
            .map(|file| file.name())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        None
    }
}

/// Number of files currently held by `input`.
pub fn selected_file_count(input: NodeRef<html::Input>) -> u32 {
    #[cfg(feature = "hydrate")]
    {
        input
            .get_untracked()
            .and_then(|el| el.files())
            .map_or(0, |files| files.length())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        0
    }
}

/// Inline `display` of a rendered element, or `None` before hydration.
pub fn inline_display(el: NodeRef<html::Div>) -> Option<PanelDisplay> {
    #[cfg(feature = "hydrate")]
    {
        let el = el.get_untracked()?;
        let raw = el.style().get_property_value("display").ok()?;
        Some(PanelDisplay::from_css(&raw))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = el;
        None
    }
}
