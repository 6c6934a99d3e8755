//! Terms prose page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::chrome::{SiteFooter, SiteHeader};

/// `/terms` route.
#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <div class="page">
            <Title text="TaxClaw — Terms"/>
            <SiteHeader/>

            <main class="page__main page__main--narrow">
                <h1 class="page__heading">"Terms"</h1>
                <p class="page__lede">
                    "TaxClaw is provided \"as is\", without warranty of any kind."
                </p>

                <h2 class="prose__heading">"Not tax advice"</h2>
                <p class="prose__body">
                    "TaxClaw and this website do not provide tax, legal, or accounting advice. \
                    Verify all extracted values against source documents and consult a \
                    qualified professional."
                </p>

                <h2 class="prose__heading">"Local-first by default"</h2>
                <p class="prose__body">
                    "TaxClaw is designed to run locally by default. If you opt into cloud \
                    inference, document content is transmitted to the selected provider."
                </p>

                <div class="prose__back">
                    <a class="text-link" href="/">"← Back"</a>
                </div>
            </main>

            <SiteFooter/>
        </div>
    }
}
