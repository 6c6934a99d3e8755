//! Rounded inline badge.

use leptos::prelude::*;

/// Small presentational label. No behavior.
#[component]
pub fn Pill(label: &'static str) -> impl IntoView {
    view! { <span class="pill">{label}</span> }
}
