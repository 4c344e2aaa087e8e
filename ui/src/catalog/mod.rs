//! Read-only data the shell renders: tool categories and how-to guides.

pub mod guides;
pub mod tools;

pub use guides::{guide_key, guides, Guide};
pub use tools::{
    all_tools, canonical_tool_id, categories, quick_link_key, ToolCategory, ToolDescriptor,
    QUICK_TOOLS,
};
