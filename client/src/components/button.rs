//! Call-to-action link styled as a button.

use leptos::prelude::*;

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

/// Closed set of button styles. Adding a style means adding a variant here
/// and a class arm in `variant_class`; an unrecognized style is
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
}

/// Link rendered as a button. Always a full navigation to its destination,
/// never an in-page state change.
#[component]
pub fn LinkButton(
    href: &'static str,
    variant: ButtonVariant,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            class=variant_class(variant)
            href=href
            target="_blank"
            rel="noopener noreferrer"
        >
            {children()}
        </a>
    }
}

fn variant_class(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Primary => "button button--primary",
        ButtonVariant::Secondary => "button button--secondary",
    }
}
