//! Static tool catalog: ordered categories of tool descriptors.
//!
//! A tool listed in more than one category carries a `-<n>` listing suffix
//! (`merge` under Most Popular, `merge-2` under Organize) so render keys stay
//! unique. Both listings resolve to the same [`View`](crate::nav::View) and
//! share translation keys through [`canonical_tool_id`].

use serde::Serialize;

use crate::components::icon::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<&'static str>,
    pub is_new: bool,
}

impl ToolDescriptor {
    pub fn canonical_id(&self) -> &'static str {
        canonical_tool_id(self.id)
    }

    pub fn title_key(&self) -> String {
        format!("tool.{}.title", self.canonical_id())
    }

    pub fn description_key(&self) -> String {
        format!("tool.{}.description", self.canonical_id())
    }

    /// Fixed accent, or `theme` for tools drawn in the brand color.
    pub fn accent_or<'a>(&self, theme: &'a str) -> &'a str {
        self.accent.unwrap_or(theme)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolCategory {
    pub slug: &'static str,
    pub title: &'static str,
    pub tools: &'static [ToolDescriptor],
}

impl ToolCategory {
    pub fn title_key(&self) -> String {
        format!("tools.category.{}", self.slug)
    }
}

/// Strip a trailing `-<digits>` listing suffix: `merge-2` → `merge`.
/// Ids without one are returned unchanged.
pub fn canonical_tool_id(id: &str) -> &str {
    match id.rsplit_once('-') {
        Some((head, tail))
            if !head.is_empty() && !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit()) =>
        {
            head
        }
        _ => id,
    }
}

const fn tool(
    id: &'static str,
    title: &'static str,
    description: &'static str,
    icon: Icon,
    accent: Option<&'static str>,
) -> ToolDescriptor {
    ToolDescriptor {
        id,
        title,
        description,
        icon,
        accent,
        is_new: false,
    }
}

const fn new_tool(
    id: &'static str,
    title: &'static str,
    description: &'static str,
    icon: Icon,
    accent: Option<&'static str>,
) -> ToolDescriptor {
    ToolDescriptor {
        is_new: true,
        ..tool(id, title, description, icon, accent)
    }
}

/// Brand-colored tools carry no fixed accent and follow the theme swatch.
const BRAND: Option<&str> = None;
const ORANGE: Option<&str> = Some("#f08c00");
const BLUE: Option<&str> = Some("#2b6cde");
const GREEN: Option<&str> = Some("#1f9d55");
const PURPLE: Option<&str> = Some("#7b4fd6");
const TEAL: Option<&str> = Some("#0f9aa8");

const POPULAR: &[ToolDescriptor] = &[
    tool(
        "compress",
        "Compress PDF",
        "Reduce file size while keeping the best possible quality.",
        Icon::Compress,
        GREEN,
    ),
    tool(
        "merge",
        "Merge PDF",
        "Combine several PDFs into one document in the order you choose.",
        Icon::Merge,
        BRAND,
    ),
    tool(
        "split",
        "Split PDF",
        "Extract page ranges or split every page into its own file.",
        Icon::Split,
        BRAND,
    ),
    tool(
        "pdf-to-word",
        "PDF to Word",
        "Turn PDFs into editable DOCX documents.",
        Icon::FileText,
        BLUE,
    ),
    tool(
        "edit",
        "Edit PDF",
        "Add text, shapes and images to a PDF.",
        Icon::Edit,
        PURPLE,
    ),
    tool(
        "sign",
        "Sign PDF",
        "Sign documents yourself or request signatures from others.",
        Icon::Signature,
        TEAL,
    ),
];

const ORGANIZE: &[ToolDescriptor] = &[
    tool(
        "merge-2",
        "Merge PDF",
        "Combine several PDFs into one document in the order you choose.",
        Icon::Merge,
        BRAND,
    ),
    tool(
        "split-2",
        "Split PDF",
        "Extract page ranges or split every page into its own file.",
        Icon::Split,
        BRAND,
    ),
    tool(
        "rotate",
        "Rotate PDF",
        "Rotate single pages or the whole document.",
        Icon::Rotate,
        BRAND,
    ),
    tool(
        "delete-pages",
        "Delete pages",
        "Remove the pages you do not need.",
        Icon::Trash,
        BRAND,
    ),
    tool(
        "extract-pages",
        "Extract pages",
        "Pull selected pages out into a new PDF.",
        Icon::Extract,
        BRAND,
    ),
    tool(
        "organize",
        "Organize PDF",
        "Sort, add and reorder pages with drag and drop.",
        Icon::Grid,
        BRAND,
    ),
];

const CONVERT_FROM: &[ToolDescriptor] = &[
    tool(
        "pdf-to-word-2",
        "PDF to Word",
        "Turn PDFs into editable DOCX documents.",
        Icon::FileText,
        BLUE,
    ),
    tool(
        "pdf-to-excel",
        "PDF to Excel",
        "Pull tables out of PDFs into spreadsheets.",
        Icon::Table,
        GREEN,
    ),
    tool(
        "pdf-to-ppt",
        "PDF to PowerPoint",
        "Convert PDFs into editable slide decks.",
        Icon::Presentation,
        ORANGE,
    ),
    tool(
        "pdf-to-jpg",
        "PDF to JPG",
        "Save every page as an image or extract embedded images.",
        Icon::Image,
        ORANGE,
    ),
    tool(
        "pdf-to-pdfa",
        "PDF to PDF/A",
        "Convert to the ISO archival format for long-term storage.",
        Icon::Archive,
        BLUE,
    ),
];

const CONVERT_TO: &[ToolDescriptor] = &[
    tool(
        "word-to-pdf",
        "Word to PDF",
        "Make DOC and DOCX files easy to read by converting them to PDF.",
        Icon::FileText,
        BLUE,
    ),
    tool(
        "excel-to-pdf",
        "Excel to PDF",
        "Make spreadsheets easy to share as PDFs.",
        Icon::Table,
        GREEN,
    ),
    tool(
        "ppt-to-pdf",
        "PowerPoint to PDF",
        "Turn slide decks into PDFs that look the same everywhere.",
        Icon::Presentation,
        ORANGE,
    ),
    tool(
        "jpg-to-pdf",
        "JPG to PDF",
        "Convert images to PDF and adjust orientation and margins.",
        Icon::Image,
        ORANGE,
    ),
    tool(
        "html-to-pdf",
        "HTML to PDF",
        "Capture any web page as a PDF.",
        Icon::Code,
        ORANGE,
    ),
];

const EDIT_AND_SIGN: &[ToolDescriptor] = &[
    tool(
        "edit-2",
        "Edit PDF",
        "Add text, shapes and images to a PDF.",
        Icon::Edit,
        PURPLE,
    ),
    tool(
        "sign-2",
        "Sign PDF",
        "Sign documents yourself or request signatures from others.",
        Icon::Signature,
        TEAL,
    ),
    tool(
        "watermark",
        "Watermark",
        "Stamp an image or text over your PDF.",
        Icon::Droplet,
        PURPLE,
    ),
    tool(
        "page-numbers",
        "Page numbers",
        "Add page numbers with custom position and style.",
        Icon::Hash,
        PURPLE,
    ),
];

const SECURITY: &[ToolDescriptor] = &[
    tool(
        "protect",
        "Protect PDF",
        "Encrypt a PDF with a password.",
        Icon::Lock,
        TEAL,
    ),
    tool(
        "unlock",
        "Unlock PDF",
        "Remove password security from PDFs you own.",
        Icon::Unlock,
        TEAL,
    ),
    tool(
        "redact",
        "Redact PDF",
        "Permanently black out sensitive text and images.",
        Icon::EyeOff,
        TEAL,
    ),
];

const ADVANCED: &[ToolDescriptor] = &[
    new_tool(
        "ocr",
        "OCR PDF",
        "Make scanned documents searchable and selectable.",
        Icon::Scan,
        GREEN,
    ),
    new_tool(
        "compare",
        "Compare PDF",
        "Show the differences between two versions side by side.",
        Icon::Compare,
        BLUE,
    ),
    tool(
        "repair",
        "Repair PDF",
        "Recover data from damaged or corrupt PDFs.",
        Icon::Wrench,
        GREEN,
    ),
    tool(
        "compress-2",
        "Compress PDF",
        "Reduce file size while keeping the best possible quality.",
        Icon::Compress,
        GREEN,
    ),
];

const CATEGORIES: &[ToolCategory] = &[
    ToolCategory {
        slug: "popular",
        title: "Most Popular",
        tools: POPULAR,
    },
    ToolCategory {
        slug: "organize",
        title: "Merge & Organize",
        tools: ORGANIZE,
    },
    ToolCategory {
        slug: "convert-from",
        title: "Convert from PDF",
        tools: CONVERT_FROM,
    },
    ToolCategory {
        slug: "convert-to",
        title: "Convert to PDF",
        tools: CONVERT_TO,
    },
    ToolCategory {
        slug: "edit",
        title: "Edit & Sign",
        tools: EDIT_AND_SIGN,
    },
    ToolCategory {
        slug: "security",
        title: "Security",
        tools: SECURITY,
    },
    ToolCategory {
        slug: "advanced",
        title: "Advanced",
        tools: ADVANCED,
    },
];

/// All categories in display order.
pub fn categories() -> &'static [ToolCategory] {
    CATEGORIES
}

pub fn category(slug: &str) -> Option<&'static ToolCategory> {
    CATEGORIES.iter().find(|category| category.slug == slug)
}

/// Tools linked directly from the navbar, next to the dropdowns.
pub const QUICK_TOOLS: &[&str] = &["compress", "merge"];

/// Short navbar label for a quick link (`nav.compress`).
pub fn quick_link_key(tool_id: &str) -> String {
    format!("nav.{tool_id}")
}

/// Every listing across all categories, cross-listings included.
pub fn all_tools() -> impl Iterator<Item = &'static ToolDescriptor> {
    CATEGORIES.iter().flat_map(|category| category.tools.iter())
}

pub fn find_tool(id: &str) -> Option<&'static ToolDescriptor> {
    all_tools().find(|tool| tool.id == id)
}

/// Serialized catalog for host-side consumers (sitemaps, search indexes).
pub fn catalog_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(CATEGORIES)
}
