#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn selection_queries_are_empty_without_a_browser() {
    Owner::new().with(|| {
        let input = NodeRef::<html::Input>::new();
        assert_eq!(selected_file_name(input), None);
        assert_eq!(selected_file_count(input), 0);
    });
}

#[test]
fn inline_display_is_unknown_without_a_browser() {
    Owner::new().with(|| {
        assert_eq!(inline_display(NodeRef::<html::Div>::new()), None);
    });
}

#[test]
fn browser_effects_are_noops_but_callable() {
    Owner::new().with(|| {
        let mut fx = BrowserEffects::new(NodeRef::new());
        fx.alert("Please select a file to upload.");
        fx.clear_selection();
    });
}
