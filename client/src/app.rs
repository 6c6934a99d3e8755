//! Application shell and route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shell` produces the SSR document; `App` mounts the banner and the
//! router over the five site routes. Every route is GET-only and renders
//! independently; no state is shared between them.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::chrome::SkillBanner;
use crate::pages::digital_assets::DigitalAssetsPage;
use crate::pages::faq::FaqPage;
use crate::pages::home::HomePage;
use crate::pages::privacy::PrivacyPage;
use crate::pages::terms::TermsPage;

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// Paths served by the site, in nav order.
pub const ROUTE_PATHS: &[&str] = &["/", "/faq", "/digital-assets", "/privacy", "/terms"];

/// HTML document wrapper used by the server for SSR.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root component: site-wide banner + route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/taxclaw-site.css"/>
        <Title text="TaxClaw — Your taxes. Your machine. Your data."/>
        <Meta
            name="description"
            content="TaxClaw turns W-2s, 1099s, and K-1 PDFs into clean data — locally by default, without uploading your SSN to anyone."
        />

        <SkillBanner/>
        <Router>
            <Routes fallback=not_found>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/faq") view=FaqPage/>
                <Route path=path!("/digital-assets") view=DigitalAssetsPage/>
                <Route path=path!("/privacy") view=PrivacyPage/>
                <Route path=path!("/terms") view=TermsPage/>
            </Routes>
        </Router>
    }
}

fn not_found() -> impl IntoView {
    view! {
        <main class="page__main page__main--narrow">
            <h1 class="page__heading">"Page not found"</h1>
            <p class="page__lede">
                <a class="text-link" href="/">"← Back to TaxClaw"</a>
            </p>
        </main>
    }
}
