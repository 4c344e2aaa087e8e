//! Fixed icon registry. Catalog entries name an [`Icon`]; [`ToolIcon`] turns
//! it into an inline 24×24 stroke SVG.

use dioxus::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Compress,
    Merge,
    Split,
    Rotate,
    Trash,
    Extract,
    Grid,
    FileText,
    Table,
    Presentation,
    Image,
    Archive,
    Code,
    Edit,
    Signature,
    Droplet,
    Hash,
    Lock,
    Unlock,
    EyeOff,
    Scan,
    Compare,
    Wrench,
    // chrome
    Menu,
    Close,
    Globe,
    ChevronDown,
    ArrowRight,
    Sparkles,
}

impl Icon {
    /// Path data, drawn with `stroke="currentColor"` on a 24×24 viewBox.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::Compress => &[
                "M4 14h6v6",
                "M20 10h-6V4",
                "M14 10l7-7",
                "M3 21l7-7",
            ],
            Icon::Merge => &[
                "M8 3v6a4 4 0 0 0 4 4h0a4 4 0 0 1 4 4v4",
                "M16 3v6a4 4 0 0 1-4 4",
                "M13 18l3 3 3-3",
            ],
            Icon::Split => &[
                "M6 3a3 3 0 1 0 0 6a3 3 0 1 0 0-6z",
                "M6 15a3 3 0 1 0 0 6a3 3 0 1 0 0-6z",
                "M20 4L8.12 15.88",
                "M14.47 14.48L20 20",
                "M8.12 8.12L12 12",
            ],
            Icon::Rotate => &["M21 2v6h-6", "M21 13a9 9 0 1 1-3-7.7L21 8"],
            Icon::Trash => &[
                "M3 6h18",
                "M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6",
                "M10 11v6",
                "M14 11v6",
                "M9 6V4a1 1 0 0 1 1-1h4a1 1 0 0 1 1 1v2",
            ],
            Icon::Extract => &[
                "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z",
                "M14 2v6h6",
                "M12 18v-6",
                "M9 15l3 3 3-3",
            ],
            Icon::Grid => &[
                "M3 3h7v7H3z",
                "M14 3h7v7h-7z",
                "M14 14h7v7h-7z",
                "M3 14h7v7H3z",
            ],
            Icon::FileText => &[
                "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z",
                "M14 2v6h6",
                "M16 13H8",
                "M16 17H8",
                "M10 9H8",
            ],
            Icon::Table => &[
                "M3 3h18v18H3z",
                "M3 9h18",
                "M3 15h18",
                "M9 3v18",
                "M15 3v18",
            ],
            Icon::Presentation => &["M2 3h20", "M3 3v11h18V3", "M12 14v7", "M8 21h8"],
            Icon::Image => &[
                "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
                "M8.5 7a1.5 1.5 0 1 0 0 3a1.5 1.5 0 1 0 0-3z",
                "M21 15l-5-5L5 21",
            ],
            Icon::Archive => &[
                "M21 8v13H3V8",
                "M1 3h22v5H1z",
                "M10 12h4",
            ],
            Icon::Code => &["M16 18l6-6-6-6", "M8 6l-6 6 6 6"],
            Icon::Edit => &[
                "M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7",
                "M18.5 2.5a2.12 2.12 0 0 1 3 3L12 15l-4 1 1-4z",
            ],
            Icon::Signature => &[
                "M3 17c3-6 5-9 7-9s-1 8 1 8 3-4 5-4 1 3 3 3",
                "M3 21h18",
            ],
            Icon::Droplet => &["M12 2.69l5.66 5.66a8 8 0 1 1-11.31 0z"],
            Icon::Hash => &["M4 9h16", "M4 15h16", "M10 3L8 21", "M16 3l-2 18"],
            Icon::Lock => &[
                "M5 11h14a2 2 0 0 1 2 2v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a2 2 0 0 1 2-2z",
                "M7 11V7a5 5 0 0 1 10 0v4",
            ],
            Icon::Unlock => &[
                "M5 11h14a2 2 0 0 1 2 2v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a2 2 0 0 1 2-2z",
                "M7 11V7a5 5 0 0 1 9.9-1",
            ],
            Icon::EyeOff => &[
                "M17.94 17.94A10 10 0 0 1 12 20c-7 0-11-8-11-8a18 18 0 0 1 5.06-5.94",
                "M9.9 4.24A9 9 0 0 1 12 4c7 0 11 8 11 8a18 18 0 0 1-2.16 3.19",
                "M1 1l22 22",
            ],
            Icon::Scan => &[
                "M3 7V5a2 2 0 0 1 2-2h2",
                "M17 3h2a2 2 0 0 1 2 2v2",
                "M21 17v2a2 2 0 0 1-2 2h-2",
                "M7 21H5a2 2 0 0 1-2-2v-2",
                "M7 12h10",
            ],
            Icon::Compare => &[
                "M18 15a3 3 0 1 0 0 6a3 3 0 1 0 0-6z",
                "M6 3a3 3 0 1 0 0 6a3 3 0 1 0 0-6z",
                "M13 6h3a2 2 0 0 1 2 2v7",
                "M11 18H8a2 2 0 0 1-2-2V9",
            ],
            Icon::Wrench => &[
                "M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94z",
            ],
            Icon::Menu => &["M3 6h18", "M3 12h18", "M3 18h18"],
            Icon::Close => &["M18 6L6 18", "M6 6l12 12"],
            Icon::Globe => &[
                "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z",
                "M2 12h20",
                "M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z",
            ],
            Icon::ChevronDown => &["M6 9l6 6 6-6"],
            Icon::ArrowRight => &["M5 12h14", "M12 5l7 7-7 7"],
            Icon::Sparkles => &[
                "M12 3l1.9 5.1L19 10l-5.1 1.9L12 17l-1.9-5.1L5 10l5.1-1.9z",
                "M19 17l.9 2.1L22 20l-2.1.9L19 23l-.9-2.1L16 20l2.1-.9z",
            ],
        }
    }
}

#[component]
pub fn ToolIcon(
    icon: Icon,
    #[props(default = 24)] size: u32,
    #[props(default = "currentColor".to_string())] color: String,
) -> Element {
    rsx! {
        svg {
            class: "icon",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "{color}",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in icon.paths().iter() {
                path { d: *d }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_path_data() {
        let icons = [
            Icon::Compress,
            Icon::Merge,
            Icon::Split,
            Icon::Wrench,
            Icon::Globe,
            Icon::Sparkles,
        ];
        for icon in icons {
            assert!(icon.paths().iter().all(|d| d.starts_with('M')), "{icon:?}");
        }
    }

    #[test]
    fn catalog_icons_resolve() {
        for tool in crate::catalog::all_tools() {
            assert!(!tool.icon.paths().is_empty(), "{} has no icon data", tool.id);
        }
    }
}
