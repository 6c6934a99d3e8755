//! FAQ page: renders the catalog into collapsible entries.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::button::{ButtonVariant, LinkButton};
use crate::components::chrome::{SiteFooter, SiteHeader};
use crate::components::faq_entry::FaqEntry;
use crate::content::faq::{CATALOG, FaqSection};
use crate::content::links::CONTACT_FORM_URL;

/// FAQ route. Sections render in catalog order; items within a section in
/// authored order. A section with no items still renders its heading.
#[component]
pub fn FaqPage() -> impl IntoView {
    view! {
        <div class="page">
            <Title text="FAQ - TaxClaw"/>
            <Meta
                name="description"
                content="Answers to common questions about TaxClaw tax document extraction."
            />
            <SiteHeader/>

            <main class="page__main">
                <h1 class="page__heading">"FAQ"</h1>
                <p class="page__lede">
                    "Common questions about installation, privacy, extraction quality, and exports."
                </p>

                <div class="faq-groups">
                    {CATALOG.iter().map(faq_group).collect_view()}
                </div>

                <div class="faq-contact">
                    <div class="faq-contact__heading">"Still have questions?"</div>
                    <p class="faq-contact__body">
                        "Send us a note - bug reports and feature requests are welcome."
                    </p>
                    <div class="faq-contact__action">
                        <LinkButton href=CONTACT_FORM_URL variant=ButtonVariant::Primary>
                            "Contact us →"
                        </LinkButton>
                    </div>
                </div>
            </main>

            <SiteFooter/>
        </div>
    }
}

fn faq_group(section: &'static FaqSection) -> impl IntoView {
    view! {
        <section class="faq-group">
            <h2 class="faq-group__title">{section.title}</h2>
            <div class="faq-group__items">
                {section
                    .items
                    .iter()
                    .map(|item| view! { <FaqEntry item=*item/> })
                    .collect_view()}
            </div>
        </section>
    }
}
