//! Titled content block with consistent vertical rhythm.

use leptos::prelude::*;

/// Structural wrapper for one block of page content.
///
/// An `id` makes the block a scroll target for same-page nav links. When
/// `title` is absent no heading element is rendered, but the spacing
/// wrapper still applies.
#[component]
pub fn Section(
    #[prop(optional, into)] id: Option<&'static str>,
    #[prop(optional, into)] title: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="section" id=id>
            {title.map(|t| view! { <h2 class="section__title">{t}</h2> })}
            {children()}
        </section>
    }
}
