//! Digital-assets sub-page: 1099-DA and cost-basis reconciliation.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::button::{ButtonVariant, LinkButton};
use crate::components::chrome::{SiteFooter, SiteHeader};
use crate::components::section::Section;
use crate::content::links::{GITHUB_URL, KOINLY_AFFILIATE_URL};

#[derive(Clone, Copy)]
struct ReasonCard {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const WHY_IT_MATTERS: &[ReasonCard] = &[
    ReasonCard {
        icon: "🎯",
        title: "The IRS cares about gains, not proceeds.",
        body: "Proceeds are just the sale amount. Cost basis is the proof of what you actually invested — so your taxable gain is correct.",
    },
    ReasonCard {
        icon: "⚠️",
        title: "Missing basis usually means you overpay.",
        body: "If basis is treated as $0, your \"gain\" becomes your entire proceeds. That can turn a small profit into a big tax bill.",
    },
    ReasonCard {
        icon: "🧩",
        title: "It won't be on your 1099-DA.",
        body: "Exchanges report what you sold. What you paid comes from wallet transfers, other exchanges, and older history — the stuff that lives outside this one form.",
    },
];

const PRACTICAL_REALITY: &[&str] = &[
    "• Proceeds are on the 1099-DA",
    "• Basis comes from your full history",
    "• Reconcile → calculate gains/losses",
    "• Export a filing-ready report",
];

/// `/digital-assets` route.
#[component]
pub fn DigitalAssetsPage() -> impl IntoView {
    view! {
        <div class="page">
            <Title text="1099-DA & Digital Asset Taxes — TaxClaw"/>
            <Meta
                name="description"
                content="You extracted your 1099-DA. Now get cost basis right. Without it, the IRS assumes $0 basis — and you pay taxes on your full proceeds."
            />
            <SiteHeader/>

            <main class="page__main">
                <Section>
                    <div class="hero">
                        <div>
                            <div class="hero__tagline">"Digital assets · 1099-DA"</div>

                            <h1 class="hero__heading">"You extracted your 1099-DA. Now finish the job."</h1>
                            <p class="hero__lede">
                                "A 1099-DA shows what you sold and the proceeds — " <b>"not"</b> " what \
                                you paid. Without cost basis, your gains can get reported as "
                                <b>"\"$0 basis\""</b> " (aka: taxed on the full proceeds)."
                            </p>

                            <div class="hero__actions">
                                <LinkButton href=KOINLY_AFFILIATE_URL variant=ButtonVariant::Primary>
                                    "Reconcile Cost Basis with Koinly"
                                </LinkButton>
                            </div>

                            <p class="hero__footnote">
                                "Runs in your browser. Import from wallets/exchanges. Export a tax report."
                            </p>
                        </div>

                        <div class="hero__panel">
                            <div class="hero__panel-title">"The practical reality"</div>
                            <div class="hero__panel-lines">
                                {PRACTICAL_REALITY
                                    .iter()
                                    .map(|line| view! { <div>{*line}</div> })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </Section>

                <Section title="Why this matters">
                    <div class="card-grid card-grid--three">
                        {WHY_IT_MATTERS
                            .iter()
                            .map(|card| {
                                view! {
                                    <div class="card">
                                        <div class="card__icon" aria-hidden="true">{card.icon}</div>
                                        <div class="card__title">{card.title}</div>
                                        <div class="card__body">{card.body}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </Section>

                <Section title="What Koinly does (the practical next step)">
                    <div class="card card--prose">
                        "Koinly connects to your wallets and exchanges, reconstructs your full \
                        transaction history, and calculates cost basis using methods like "
                        <b>"FIFO / HIFO / LIFO"</b> ". Then it generates a " <b>"tax-ready report"</b>
                        " you can use for filing."
                    </div>
                </Section>

                <Section title="How TaxClaw fits in">
                    <div class="card card--prose">
                        <p>
                            "TaxClaw extracts your 1099-DA data locally. Koinly reconciles cost \
                            basis. Together you have everything you need to file."
                        </p>

                        <div class="install">
                            <div class="install__title">"Install TaxClaw"</div>
                            <pre class="install__snippet">
                                <code>"openclaw skill install taxclaw"</code>
                            </pre>
                            <a
                                class="text-link"
                                href=GITHUB_URL
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                "View TaxClaw on GitHub →"
                            </a>
                        </div>
                    </div>
                </Section>

                <Section>
                    <div class="callout callout--cta">
                        <h2 class="callout__heading">"Get your cost basis right before you file."</h2>
                        <p class="callout__body">
                            "You already did step 1 with TaxClaw — this is the fast way to turn \
                            proceeds into " <b>"actual gains/losses"</b> "."
                        </p>
                        <div class="callout__action">
                            <LinkButton href=KOINLY_AFFILIATE_URL variant=ButtonVariant::Primary>
                                "Open Koinly →"
                            </LinkButton>
                        </div>
                    </div>
                </Section>

                <div class="affiliate-note">
                    <div class="affiliate-note__text">
                        "TaxClaw may earn a commission if you sign up for a paid Koinly plan via \
                        links on this page."
                    </div>
                    <div class="affiliate-note__back">
                        <a class="text-link" href="/">"← Back to TaxClaw"</a>
                    </div>
                </div>
            </main>

            <SiteFooter/>
        </div>
    }
}
