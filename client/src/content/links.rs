//! Outbound link targets emitted as hrefs.
//!
//! These are dead data to the site: it never calls them, only links to them.

/// TaxClaw source repository.
pub const GITHUB_URL: &str = "https://github.com/DougButdorf/TaxClaw";

/// Terms of Use document inside the source repository.
pub const TERMS_MD_URL: &str = "https://github.com/DougButdorf/TaxClaw/blob/main/TERMS.md";

/// Privacy Policy document inside the source repository.
pub const PRIVACY_MD_URL: &str = "https://github.com/DougButdorf/TaxClaw/blob/main/PRIVACY.md";

/// Agent platform TaxClaw installs into.
pub const OPENCLAW_URL: &str = "https://openclaw.ai";

/// Cost-basis reconciliation service (affiliate link, disclosed where used).
pub const KOINLY_AFFILIATE_URL: &str = "https://koinly.io/?via=4C2DBEFF&utm_source=affiliate";

/// Feedback and feature-request form.
pub const CONTACT_FORM_URL: &str = "https://formspree.io/f/xpqjowpa";
