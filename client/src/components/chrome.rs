//! Site-wide chrome: header, footer, and the OpenClaw skill banner.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is exactly one definition of each chrome piece and every route
//! composes it by reference, which is what keeps the chrome identical
//! across pages. All three components take no props.

use leptos::prelude::*;

use crate::content::links::{GITHUB_URL, OPENCLAW_URL, PRIVACY_MD_URL, TERMS_MD_URL};

#[cfg(test)]
#[path = "chrome_test.rs"]
mod chrome_test;

#[derive(Clone, Copy)]
struct NavLink {
    label: &'static str,
    href: &'static str,
}

// The nav set is structural: adding a link is a code change, not config.
const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "How it works", href: "/#how" },
    NavLink { label: "🪙 Digital Assets", href: "/digital-assets" },
    NavLink { label: "FAQ", href: "/faq" },
    NavLink { label: "Privacy", href: "/privacy" },
    NavLink { label: "Install", href: "/#install" },
    NavLink { label: "Free vs Pro", href: "/#pricing" },
];

/// Sticky top navigation bar, identical on every route.
#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <a class="site-header__brand" href="/">
                    <span class="site-header__mark" aria-hidden="true">"🧾🦀"</span>
                    <span>"TaxClaw"</span>
                </a>
                <nav class="site-header__nav">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a class="site-header__link" href=link.href>{link.label}</a>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}

/// Legal/disclosure block and outbound links, identical on every route.
#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__inner">
                <div>
                    <div class="site-footer__brand">
                        <span aria-hidden="true">"🧾🦀"</span>
                        <span>"TaxClaw"</span>
                    </div>
                    <div class="site-footer__disclosure">
                        "TaxClaw is a data extraction tool, not a tax preparation service. AI \
                        extraction may produce errors. Always verify extracted data against \
                        your original documents. Outbranch Network LLC is not a CPA firm, law \
                        firm, or tax advisor. Use of TaxClaw does not constitute tax advice or \
                        create a professional relationship. Affiliate links to third-party \
                        services are disclosed where they appear. © 2026 Outbranch Network \
                        LLC. MIT Licensed (core). "
                        <a class="site-footer__doc-link" href=TERMS_MD_URL target="_blank" rel="noopener noreferrer">
                            "Terms of Use"
                        </a>
                        " · "
                        <a class="site-footer__doc-link" href=PRIVACY_MD_URL target="_blank" rel="noopener noreferrer">
                            "Privacy Policy"
                        </a>
                    </div>
                </div>
                <div class="site-footer__links">
                    <a class="site-footer__link" href=GITHUB_URL target="_blank" rel="noopener noreferrer">
                        "GitHub"
                    </a>
                </div>
            </div>
        </footer>
    }
}

/// Banner above the header pointing at the OpenClaw install path.
#[component]
pub fn SkillBanner() -> impl IntoView {
    view! {
        <div class="skill-banner">
            <div class="skill-banner__inner">
                <div class="skill-banner__lead">"🦞 TaxClaw is an OpenClaw skill"</div>
                <div class="skill-banner__detail">
                    <span>
                        "Install instantly: "
                        <code>"openclaw skill install taxclaw"</code>
                    </span>
                    <span class="skill-banner__divider">"·"</span>
                    <span>
                        "Or point your agent at: "
                        <a class="skill-banner__link" href=GITHUB_URL target="_blank" rel="noopener noreferrer">
                            "github.com/DougButdorf/TaxClaw"
                        </a>
                    </span>
                    <span class="skill-banner__divider">"·"</span>
                    <a class="skill-banner__link" href=OPENCLAW_URL target="_blank" rel="noopener noreferrer">
                        "What is OpenClaw?"
                    </a>
                </div>
            </div>
        </div>
    }
}
