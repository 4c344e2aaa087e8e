//! How-to guides shown on the landing page.
//!
//! Guide and step positions double as translation keys, see [`guide_key`].

use serde::Serialize;

/// Version of the positional key contract below. Bump it (and migrate every
/// overlay) whenever guides or steps are reordered, inserted or removed.
pub const GUIDE_KEY_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Guide {
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<&'static str>,
    pub steps: &'static [&'static str],
    pub link_label: &'static str,
    /// Tool id the guide's link activates.
    pub tool: &'static str,
}

/// `guide.<guide>.step.<step>`
pub fn guide_key(guide: usize, step: usize) -> String {
    format!("guide.{guide}.step.{step}")
}

pub fn guide_title_key(guide: usize) -> String {
    format!("guide.{guide}.title")
}

pub fn guide_subtitle_key(guide: usize) -> String {
    format!("guide.{guide}.subtitle")
}

pub fn guide_link_key(guide: usize) -> String {
    format!("guide.{guide}.link")
}

const GUIDES: &[Guide] = &[
    Guide {
        title: "How to compress a PDF",
        subtitle: Some("Shrink large files so they fit in any inbox."),
        steps: &[
            "Open the Compress PDF tool.",
            "Drop your PDF into the upload area or pick it from your device.",
            "Choose a compression level: recommended, strong or light.",
            "Download the smaller file.",
        ],
        link_label: "Compress a PDF now",
        tool: "compress",
    },
    Guide {
        title: "How to merge PDFs",
        subtitle: Some("Put reports, scans and receipts into one document."),
        steps: &[
            "Open the Merge PDF tool.",
            "Select two or more PDFs.",
            "Drag the thumbnails into the order you want.",
            "Merge and download the combined file.",
        ],
        link_label: "Merge PDFs now",
        tool: "merge",
    },
    Guide {
        title: "How to split a PDF",
        subtitle: Some("Send only the pages that matter."),
        steps: &[
            "Open the Split PDF tool and add your file.",
            "Pick page ranges or split every page.",
            "Download the pages as separate PDFs or a ZIP archive.",
        ],
        link_label: "Split a PDF now",
        tool: "split",
    },
    Guide {
        title: "How to convert a PDF to Word",
        subtitle: Some("Edit text without retyping it."),
        steps: &[
            "Open the PDF to Word tool.",
            "Upload the PDF you want to edit.",
            "Download the DOCX and open it in your word processor.",
        ],
        link_label: "Convert to Word now",
        tool: "pdf-to-word",
    },
    Guide {
        title: "How to sign a PDF",
        subtitle: None,
        steps: &[
            "Open the Sign PDF tool and upload your document.",
            "Draw, type or upload your signature.",
            "Place the signature on the page and resize it.",
            "Apply and download the signed PDF.",
        ],
        link_label: "Sign a PDF now",
        tool: "sign",
    },
];

pub fn guides() -> &'static [Guide] {
    GUIDES
}

/// Every translation key derived from the guide list, in display order.
pub fn guide_keys() -> Vec<String> {
    let mut keys = Vec::new();
    for (index, guide) in GUIDES.iter().enumerate() {
        keys.push(guide_title_key(index));
        if guide.subtitle.is_some() {
            keys.push(guide_subtitle_key(index));
        }
        keys.extend((0..guide.steps.len()).map(|step| guide_key(index, step)));
        keys.push(guide_link_key(index));
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_contract_is_positional() {
        assert_eq!(GUIDE_KEY_VERSION, 1);
        assert_eq!(guide_key(0, 0), "guide.0.step.0");
        assert_eq!(guide_key(3, 2), "guide.3.step.2");
        assert_eq!(guide_title_key(4), "guide.4.title");
    }

    #[test]
    fn every_guide_has_steps() {
        assert!(guides().iter().all(|guide| !guide.steps.is_empty()));
    }

    #[test]
    fn guide_keys_skip_missing_subtitles() {
        let keys = guide_keys();
        assert!(keys.contains(&"guide.0.subtitle".to_string()));
        assert!(!keys.contains(&"guide.4.subtitle".to_string()));
        assert!(keys.contains(&"guide.4.step.3".to_string()));
    }
}
