//! Privacy prose page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::chrome::{SiteFooter, SiteHeader};

/// `/privacy` route.
#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <div class="page">
            <Title text="TaxClaw — Privacy"/>
            <SiteHeader/>

            <main class="page__main page__main--narrow">
                <h1 class="page__heading">"Privacy"</h1>
                <p class="page__lede">
                    "This site is a simple marketing page. We do not run third-party trackers \
                    by default."
                </p>

                <h2 class="prose__heading">"Data we collect"</h2>
                <p class="prose__body">"None intentionally."</p>

                <h2 class="prose__heading">"Hosting logs"</h2>
                <p class="prose__body">
                    "Like most websites, our hosting provider may record basic request logs \
                    (e.g., IP address, user agent) for security and reliability."
                </p>

                <h2 class="prose__heading">"TaxClaw app privacy"</h2>
                <p class="prose__body">
                    "TaxClaw is local-first. In local mode, nothing leaves your machine. If you \
                    opt into cloud inference, document content is sent to the selected provider."
                </p>

                <div class="prose__back">
                    <a class="text-link" href="/">"← Back"</a>
                </div>
            </main>

            <SiteFooter/>
        </div>
    }
}
