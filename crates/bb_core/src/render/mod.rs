//! Presentation: context assembly and the HTML renderer.

pub mod context;
pub mod format;
pub mod html;

pub use context::{ReportContext, COLUMN_ORDER};
pub use format::{format_plain, format_thousands};
pub use html::{escape, render};
