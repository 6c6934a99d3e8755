//! Collapsible question/answer disclosure widget.

use leptos::prelude::*;

use crate::content::faq::FaqItem;

#[cfg(test)]
#[path = "faq_entry_test.rs"]
mod faq_entry_test;

/// One FAQ disclosure. The open flag is local to the widget: it starts
/// collapsed, toggling it never affects a neighboring entry, and nothing
/// survives a reload.
#[component]
pub fn FaqEntry(item: FaqItem) -> impl IntoView {
    let open = RwSignal::new(false);
    let on_toggle = move |_| open.update(|o| *o = !*o);

    view! {
        <div class="faq-entry" class:faq-entry--open=move || open.get()>
            <button
                class="faq-entry__question"
                on:click=on_toggle
                aria-expanded=move || expanded_state(open.get())
            >
                <span>{item.question}</span>
                <span class="faq-entry__chevron" aria-hidden="true">
                    {move || chevron(open.get())}
                </span>
            </button>
            <Show when=move || open.get()>
                <div class="faq-entry__answer">{item.answer}</div>
            </Show>
        </div>
    }
}

fn expanded_state(open: bool) -> &'static str {
    if open { "true" } else { "false" }
}

fn chevron(open: bool) -> &'static str {
    if open { "▲" } else { "▼" }
}
