//! Home page: hero, product story, install, and pricing sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! The canonical landing route. Composes the shared chrome with the full
//! sequence of marketing sections; card grids are driven by const tables so
//! the markup loop stays in one place.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::button::{ButtonVariant, LinkButton};
use crate::components::chrome::{SiteFooter, SiteHeader};
use crate::components::pill::Pill;
use crate::components::section::Section;
use crate::content::links::GITHUB_URL;

#[derive(Clone, Copy)]
struct StepCard {
    title: &'static str,
    body: &'static str,
}

const HOW_STEPS: &[StepCard] = &[
    StepCard { title: "📥 Upload", body: "Drop your PDF (or let your agent do it)." },
    StepCard { title: "🤖 Extract", body: "AI reads the fields. Locally. No uploads to strangers." },
    StepCard { title: "✅ Review", body: "Check anything flagged. Edit if needed." },
    StepCard { title: "📤 Export", body: "Clean CSV or JSON. Hand it to your CPA or spreadsheet." },
];

const SUPPORTED_FORMS: &[&str] = &[
    "W-2",
    "1099-DA",
    "1099-NEC",
    "1099-INT",
    "1099-DIV",
    "1099-R",
    "1099-B",
    "1099-MISC",
    "1099-G",
    "1099-K",
    "K-1",
    "Consolidated brokerage 1099",
];

const AGENT_INBOX_LINES: &[&str] = &[
    "• New PDF received",
    "• Classified as: 1099-INT",
    "• Extracted fields (local)",
    "• Flagged: 2 low-confidence boxes",
    "• Ready: CSV / JSON",
];

#[derive(Clone, Copy)]
struct Screenshot {
    src: &'static str,
    caption: &'static str,
}

const SCREENSHOTS: &[Screenshot] = &[
    Screenshot {
        src: "/screenshots/review.png",
        caption: "Review extracted fields with per-box confidence.",
    },
    Screenshot {
        src: "/screenshots/inbox.png",
        caption: "Agent inbox: documents arrive already extracted.",
    },
    Screenshot {
        src: "/screenshots/exports.png",
        caption: "Exports: CSV (wide or long), JSON, or the original ZIP.",
    },
];

#[derive(Clone, Copy)]
struct PricingCard {
    title: &'static str,
    rows: &'static [(&'static str, &'static str)],
}

const PRICING_CARDS: &[PricingCard] = &[
    PricingCard {
        title: "🆓 Free",
        rows: &[
            ("Extraction mode", "Local Ollama (default)"),
            ("Documents", "Unlimited"),
            ("Exports", "CSV, JSON"),
            ("Broker PDFs", "Standard forms"),
            ("Power workflows", "—"),
        ],
    },
    PricingCard {
        title: "💼 Pro ($29/yr)",
        rows: &[
            ("Extraction mode", "Cloud model option (opt-in)"),
            ("Documents", "Unlimited"),
            ("Exports", "TurboTax 8949 export"),
            ("Broker PDFs", "Consolidated 1099 support"),
            ("Power workflows", "Batch/CPA mode"),
        ],
    },
];

/// Landing route.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <Title text="TaxClaw — Your taxes. Your machine. Your data."/>
            <Meta
                name="description"
                content="TaxClaw turns W-2s, 1099s, and K-1 PDFs into clean data — locally by default, without uploading your SSN to anyone."
            />
            <SiteHeader/>

            <main class="page__main">
                <Section id="hero">
                    <div class="hero">
                        <div>
                            <div class="hero__badge-row">
                                <div class="hero__mark">"🧾🦀"</div>
                                <div class="hero__tagline">"Local-first tax extraction"</div>
                            </div>

                            <h1 class="hero__heading">"Your taxes. Your machine. Your data."</h1>
                            <p class="hero__lede">
                                "TaxClaw turns W-2s, 1099s, and K-1 PDFs into clean data — locally \
                                by default, without uploading your SSN to anyone."
                            </p>

                            <div class="hero__actions">
                                <LinkButton href=GITHUB_URL variant=ButtonVariant::Primary>
                                    "Get TaxClaw free"
                                </LinkButton>
                                <LinkButton href=GITHUB_URL variant=ButtonVariant::Secondary>
                                    "View on GitHub"
                                </LinkButton>
                            </div>

                            <p class="hero__footnote">
                                "Runs on your machine. Exports CSV/JSON. No account required."
                            </p>
                        </div>

                        <div class="hero__panel">
                            <div class="hero__pills">
                                <Pill label="Local mode (default)"/>
                                <Pill label="CSV / JSON exports"/>
                                <Pill label="W-2 · 1099s · K-1"/>
                                <Pill label="1099-DA ready"/>
                            </div>
                            <div class="hero__terminal">
                                <div class="hero__terminal-cmd">"$ taxclaw ingest"</div>
                                <div>"→ extract fields (local)"</div>
                                <div>"→ flag anything uncertain"</div>
                                <div>"→ export clean CSV/JSON"</div>
                            </div>
                        </div>
                    </div>
                </Section>

                <Section id="problem" title="Why are we still retyping boxes in 2026?">
                    <ul class="problem-list">
                        <li>"You're handed a stack of PDFs and asked to become a human OCR engine."</li>
                        <li>"One fat-fingered digit can turn into hours of cleanup (or a notice)."</li>
                        <li>
                            "Most \"AI tax tools\" start with: "
                            <em>"upload your most sensitive documents to our servers."</em>
                        </li>
                    </ul>
                </Section>

                <Section id="how" title="How it works">
                    <div class="card-grid card-grid--four">
                        {HOW_STEPS
                            .iter()
                            .map(|step| {
                                view! {
                                    <div class="card">
                                        <div class="card__title">{step.title}</div>
                                        <div class="card__body">{step.body}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </Section>

                <Section id="privacy" title="Privacy first">
                    <p class="section__copy">
                        "Tax docs aren't \"just paperwork.\" They're your SSN, your income, your \
                        accounts — your whole financial life."
                    </p>
                    <p class="section__copy">
                        "Most AI tools lead with " <em>"\"upload your PDFs.\""</em> " TaxClaw doesn't."
                    </p>

                    <div class="mode-cards">
                        <div class="mode-card">
                            <span class="mode-card__dot mode-card__dot--local" aria-hidden="true"></span>
                            <div>
                                <div class="mode-card__title">"🟢 Local mode (default)"</div>
                                <div class="mode-card__body">"nothing leaves your machine."</div>
                            </div>
                        </div>
                        <div class="mode-card">
                            <span class="mode-card__dot mode-card__dot--cloud" aria-hidden="true"></span>
                            <div>
                                <div class="mode-card__title">"🟡 Cloud mode (optional)"</div>
                                <div class="mode-card__body">
                                    "opt-in only — with an explicit privacy warning before you proceed."
                                </div>
                            </div>
                        </div>
                    </div>

                    <p class="section__footnote">
                        "If you choose cloud inference, document content is sent to the selected \
                        provider. Local is the default."
                    </p>
                </Section>

                <Section id="forms" title="Supported forms">
                    <div class="card-grid card-grid--three">
                        {SUPPORTED_FORMS
                            .iter()
                            .map(|form| view! { <div class="card card--form">{*form}</div> })
                            .collect_view()}
                    </div>

                    <div class="callout">
                        <div class="callout__title">"🪙 1099-DA"</div>
                        <div class="callout__body">"First mandatory year is 2026. TaxClaw is ready."</div>
                    </div>
                </Section>

                <Section id="agent">
                    <div class="agent">
                        <div>
                            <h2 class="agent__heading">"🤖 Your agent already knows what to do."</h2>
                            <div class="agent__copy">
                                <p>"Got a tax doc? Forward it to your AI assistant."</p>
                                <p>"Just say \"add this to TaxClaw\" — and it's done."</p>
                                <p>"Shows up here automatically. Already extracted."</p>
                                <p>"No uploading. No UI. Just review."</p>
                                <p>"Everything stays local. Nothing goes to the cloud."</p>
                            </div>
                        </div>

                        <div class="agent__panel">
                            <div class="agent__inbox">
                                <div class="agent__inbox-title">"Agent Inbox"</div>
                                <div class="agent__inbox-lines">
                                    {AGENT_INBOX_LINES
                                        .iter()
                                        .map(|line| view! { <div>{*line}</div> })
                                        .collect_view()}
                                </div>
                            </div>
                            <div class="agent__footnote">
                                <em>
                                    "Under the hood: "
                                    <code>"taxclaw ingest <file> --filer doug --year 2025"</code>
                                </em>
                            </div>
                        </div>
                    </div>
                </Section>

                <Section id="screenshots" title="Screenshots">
                    <div class="card-grid card-grid--three">
                        {SCREENSHOTS
                            .iter()
                            .map(|shot| {
                                view! {
                                    <figure class="screenshot">
                                        <img class="screenshot__img" src=shot.src alt=shot.caption/>
                                        <figcaption class="screenshot__caption">{shot.caption}</figcaption>
                                    </figure>
                                }
                            })
                            .collect_view()}
                    </div>
                </Section>

                <Section id="install" title="Get started in 3 commands">
                    <div class="install">
                        <pre class="install__snippet">
                            <code>
                                "git clone https://github.com/DougButdorf/TaxClaw\n\
                                cd taxclaw && ./setup.sh && ./start.sh\n\
                                # open http://localhost:8421"
                            </code>
                        </pre>
                        <div class="install__alt">
                            "Install via clawhub: " <code>"openclaw skill install taxclaw"</code> " "
                            <em>"(once listed)"</em>
                        </div>
                        <div class="install__docs">
                            <a
                                class="text-link"
                                href=GITHUB_URL
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                "View full docs on GitHub →"
                            </a>
                        </div>
                    </div>
                </Section>

                <Section id="pricing" title="Free vs Pro">
                    <div class="card-grid card-grid--two">
                        {PRICING_CARDS.iter().map(pricing_card).collect_view()}
                    </div>
                    <p class="section__footnote">
                        "You can run TaxClaw fully local forever. Pro is for power-user exports + \
                        batch workflows."
                    </p>
                </Section>
            </main>

            <SiteFooter/>
        </div>
    }
}

fn pricing_card(card: &'static PricingCard) -> impl IntoView {
    view! {
        <div class="card card--pricing">
            <div class="card__title">{card.title}</div>
            <div class="pricing-rows">
                {card.rows
                    .iter()
                    .map(|(feature, value)| {
                        view! {
                            <div class="pricing-row">
                                <div class="pricing-row__feature">{*feature}</div>
                                <div class="pricing-row__value">{*value}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
