//! Report assembly: localized labels and HTML rendering.

mod html;
mod labels;

pub use html::render_report;
pub use labels::{labels_for, CategoryLabels, Labels};
