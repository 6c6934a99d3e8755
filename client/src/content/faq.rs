//! The FAQ catalog: ordered sections of question/answer pairs.
//!
//! DESIGN
//! ======
//! Section order and item order are display order. Questions double as
//! display keys, so they are kept unique within a section. Missing fields
//! are a compile error by construction, since nothing here is optional.

#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

/// One question/answer pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

/// A named, ordered group of FAQ items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqSection {
    pub title: &'static str,
    pub items: &'static [FaqItem],
}

/// The full catalog, in display order.
pub const CATALOG: &[FaqSection] = &[
    FaqSection {
        title: "Getting started",
        items: &[
            FaqItem {
                question: "What does TaxClaw actually do?",
                answer: "TaxClaw reads common tax PDFs/images (W-2s, 1099s, K-1s) and extracts the key boxes into structured data you can review and export. It's built to save you from manual re-typing.",
            },
            FaqItem {
                question: "How do I install it?",
                answer: "Install TaxClaw as an OpenClaw skill, then open the local app at http://localhost:8421. You'll also need Ollama running for Local mode.",
            },
            FaqItem {
                question: "What tax forms does it support?",
                answer: "W-2, 1099-NEC, 1099-INT, 1099-DIV, 1099-DA, 1099-B, 1099-MISC, 1099-OID, K-1, and consolidated-1099.",
            },
            FaqItem {
                question: "Does it work on Windows / Linux / Mac?",
                answer: "Yes-any OS that can run OpenClaw + Ollama should work. Local performance depends on your CPU/GPU and the OCR model you choose.",
            },
        ],
    },
    FaqSection {
        title: "Privacy & data",
        items: &[
            FaqItem {
                question: "Does my tax data leave my computer?",
                answer: "In Local mode, no-everything stays on your machine. In Cloud mode, the document is sent to Claude for extraction.",
            },
            FaqItem {
                question: "What's the difference between Local and Cloud mode?",
                answer: "Local mode uses Ollama (recommended: glm-ocr) and keeps data fully private, but accuracy can vary by scan quality. Cloud mode is typically more accurate, but requires an API key and a privacy acknowledgment.",
            },
            FaqItem {
                question: "Where is my data stored?",
                answer: "Locally, in the TaxClaw/OpenClaw workspace on your computer (plus whatever exports you download). Cloud mode still saves your results locally, but the uploaded document is processed by the cloud provider.",
            },
        ],
    },
    FaqSection {
        title: "Extraction quality",
        items: &[
            FaqItem {
                question: "Why are all my fields empty after uploading?",
                answer: "Most often the OCR model isn't running/selected, or the document is a low-quality scan (blurry, skewed, tiny text). Switch to glm-ocr, re-run extraction, and try a cleaner PDF/image if you can.",
            },
            FaqItem {
                question: "What's the best local model to use?",
                answer: "Use glm-ocr in Ollama-it's the best default balance of OCR + form understanding for TaxClaw. If you're not getting text, confirm Ollama is running and the model is actually installed.",
            },
            FaqItem {
                question: "What do the confidence scores mean? (🟢🟡🔴)",
                answer: "They're a quick \"how sure is the model\" signal for each field. 🟢 = likely correct, 🟡 = plausible but check it, 🔴 = treat as a guess.",
            },
            FaqItem {
                question: "What does \"Needs review\" mean?",
                answer: "TaxClaw flags a doc as \"Needs review\" when one or more important fields are missing or low-confidence. It's not an error-just a heads-up to eyeball the highlighted fields.",
            },
            FaqItem {
                question: "My doc was classified wrong - how do I fix it?",
                answer: "Change the document type (e.g., 1099-INT vs 1099-DIV) and re-run extraction. Classification matters because each form has different boxes and field rules.",
            },
            FaqItem {
                question: "Can I edit extracted fields if they're wrong?",
                answer: "Yes-edit the fields in the review UI, then export again. Your edits are what get exported.",
            },
        ],
    },
    FaqSection {
        title: "1099-DA & crypto",
        items: &[
            FaqItem {
                question: "I uploaded a 1099-DA. What do I do next?",
                answer: "Use TaxClaw to extract the proceeds and transaction details, then reconcile cost basis in a crypto tax tool (we recommend Koinly). Export your data and use it as your starting point.",
            },
            FaqItem {
                question: "What is cost basis and why do I need it?",
                answer: "Cost basis is what you originally paid for the asset (plus certain fees/adjustments). You need it to calculate gains/losses-proceeds alone only tells you the sale side.",
            },
            FaqItem {
                question: "TaxClaw extracted my proceeds but not cost basis - is that normal?",
                answer: "Yes-many 1099-DA forms don't include complete cost basis, or the broker reports it separately/partially. That's why cost basis reconciliation (e.g., in Koinly) is usually still required.",
            },
        ],
    },
    FaqSection {
        title: "Exporting & filing",
        items: &[
            FaqItem {
                question: "How do I export my data?",
                answer: "Go to Exports and choose CSV (wide or long), JSON, or download the original ZIP. Export after you've reviewed and corrected any flagged fields.",
            },
            FaqItem {
                question: "What's the difference between the export formats?",
                answer: "CSV (wide) = one row per document with lots of columns; CSV (long) = one row per field/value (better for analytics and pipelines). JSON preserves structure and is easiest for developers; ZIP is the original files.",
            },
            FaqItem {
                question: "Can I share exports with my tax preparer?",
                answer: "Yes-CSV is usually the easiest for a preparer to scan, and the ZIP is helpful if they want the originals. Always spot-check totals and key IDs (SSN/EIN, payer name, amounts) before you send.",
            },
        ],
    },
    FaqSection {
        title: "Pro & roadmap",
        items: &[
            FaqItem {
                question: "What's TaxClaw Pro?",
                answer: "We're building a Pro plan and would love your input on what it should include. If you have feature requests or ideas, use the contact form — it directly shapes what we prioritize.",
            },
            FaqItem {
                question: "How do I support the project?",
                answer: "Star the repo on GitHub, send feature requests via the contact form, and tell someone who dreads tax season. If you're doing 1099-DA work, using the Koinly link helps fund ongoing development.",
            },
        ],
    },
];
