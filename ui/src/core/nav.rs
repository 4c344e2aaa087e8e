//! Navigation targets and the single tool-id → view table.
//!
//! The shell never renders a tool page itself. Event handlers turn a tool id
//! into a [`View`] and pass it to the host's `on_navigate` callback; the host
//! owns routing.

use std::fmt;
use std::sync::Once;

use serde::{Deserialize, Serialize};

use crate::catalog::{all_tools, canonical_tool_id, guides, QUICK_TOOLS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Home,
    Compress,
    Merge,
    Split,
    Rotate,
    DeletePages,
    ExtractPages,
    Organize,
    PdfToWord,
    PdfToExcel,
    PdfToPpt,
    PdfToJpg,
    PdfToPdfa,
    WordToPdf,
    ExcelToPdf,
    PptToPdf,
    JpgToPdf,
    HtmlToPdf,
    Edit,
    Sign,
    Watermark,
    PageNumbers,
    Protect,
    Unlock,
    Redact,
    Ocr,
    Compare,
    Repair,
    About,
    Pricing,
    Contact,
    Privacy,
    Terms,
}

/// Canonical tool ids and the view each one opens. Cross-listed ids
/// (`merge-2`) resolve through [`canonical_tool_id`] and need no row here.
pub const TOOL_ROUTES: &[(&str, View)] = &[
    ("compress", View::Compress),
    ("merge", View::Merge),
    ("split", View::Split),
    ("rotate", View::Rotate),
    ("delete-pages", View::DeletePages),
    ("extract-pages", View::ExtractPages),
    ("organize", View::Organize),
    ("pdf-to-word", View::PdfToWord),
    ("pdf-to-excel", View::PdfToExcel),
    ("pdf-to-ppt", View::PdfToPpt),
    ("pdf-to-jpg", View::PdfToJpg),
    ("pdf-to-pdfa", View::PdfToPdfa),
    ("word-to-pdf", View::WordToPdf),
    ("excel-to-pdf", View::ExcelToPdf),
    ("ppt-to-pdf", View::PptToPdf),
    ("jpg-to-pdf", View::JpgToPdf),
    ("html-to-pdf", View::HtmlToPdf),
    ("edit", View::Edit),
    ("sign", View::Sign),
    ("watermark", View::Watermark),
    ("page-numbers", View::PageNumbers),
    ("protect", View::Protect),
    ("unlock", View::Unlock),
    ("redact", View::Redact),
    ("ocr", View::Ocr),
    ("compare", View::Compare),
    ("repair", View::Repair),
];

const PAGE_SLUGS: &[(&str, View)] = &[
    ("about", View::About),
    ("pricing", View::Pricing),
    ("contact", View::Contact),
    ("privacy", View::Privacy),
    ("terms", View::Terms),
];

fn lookup(id: &str) -> Option<View> {
    TOOL_ROUTES
        .iter()
        .find(|(candidate, _)| *candidate == id)
        .map(|(_, view)| *view)
}

/// Resolve a tool id without logging. `None` means the id is unmapped.
pub fn try_resolve_tool(id: &str) -> Option<View> {
    lookup(id).or_else(|| lookup(canonical_tool_id(id)))
}

/// Resolve a tool id to its view. Unmapped ids fall back to [`View::Home`]
/// and are logged, since that usually means the catalog and the table drifted.
pub fn resolve_tool(id: &str) -> View {
    match try_resolve_tool(id) {
        Some(view) => view,
        None => {
            tracing::warn!(tool = id, "tool id has no route; falling back to home");
            View::Home
        }
    }
}

/// Every tool id an entry point hands to [`resolve_tool`]: catalog listings,
/// navbar quick links and guide links.
pub fn linked_tool_ids() -> impl Iterator<Item = &'static str> {
    all_tools()
        .map(|tool| tool.id)
        .chain(QUICK_TOOLS.iter().copied())
        .chain(guides().iter().map(|guide| guide.tool))
}

/// Linked tool ids that would hit the home fallback.
pub fn unmapped_tool_ids() -> Vec<&'static str> {
    linked_tool_ids()
        .filter(|id| try_resolve_tool(id).is_none())
        .collect()
}

static AUDIT: Once = Once::new();

/// Log catalog/table drift once per process.
pub fn audit_catalog() {
    AUDIT.call_once(|| {
        let unmapped = unmapped_tool_ids();
        if unmapped.is_empty() {
            tracing::debug!("every linked tool id has a route");
        } else {
            tracing::warn!(?unmapped, "linked tool ids without a route");
        }
    });
}

impl View {
    /// Stable path segment for hosts. `Home` is the empty slug.
    pub fn slug(self) -> &'static str {
        if self == View::Home {
            return "";
        }
        TOOL_ROUTES
            .iter()
            .chain(PAGE_SLUGS)
            .find(|(_, view)| *view == self)
            .map(|(slug, _)| *slug)
            .unwrap_or("")
    }

    pub fn from_slug(slug: &str) -> Option<View> {
        let slug = slug.trim_matches('/');
        if slug.is_empty() {
            return Some(View::Home);
        }
        TOOL_ROUTES
            .iter()
            .chain(PAGE_SLUGS)
            .find(|(candidate, _)| *candidate == slug)
            .map(|(_, view)| *view)
    }

    /// Canonical tool id for tool views.
    pub fn tool_id(self) -> Option<&'static str> {
        TOOL_ROUTES
            .iter()
            .find(|(_, view)| *view == self)
            .map(|(id, _)| *id)
    }

    /// Translation key naming this destination.
    pub fn label_key(self) -> String {
        match (self, self.tool_id()) {
            (View::Home, _) => "nav.home".to_string(),
            (_, Some(id)) => format!("tool.{id}.title"),
            (page, None) => format!("footer.{}", page.slug()),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Home => f.write_str("home"),
            other => f.write_str(other.slug()),
        }
    }
}
