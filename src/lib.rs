//! # Textstat - Locale-Sensitive Text Statistics
//!
//! Textstat analyzes a text document and produces locale-sensitive
//! statistics over six categories of textual objects: sentences, lines,
//! words, numbers, currency amounts, and dates.
//!
//! ## Overview
//!
//! For each category the pipeline reports the total occurrence count, the
//! number of distinct case-folded values, the smallest and largest value
//! under the category's ordering relation (numeric magnitude, chronological
//! order, or key order for plain text), the shortest and longest value by
//! character length, and the average value length.
//!
//! Numbers, currency amounts and dates are recognized by a single-cursor
//! scan that tries the locale's format grammars at every position, from the
//! most specific (full-style dates) to the least (plain numbers). Sentences
//! and words come from boundary segmentation; lines are taken as read.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use textstat::{aggregate, Analysis, Category, FormatProvider, Locale};
//!
//! let provider = FormatProvider::new(Locale::parse("en_US")?);
//! let analysis = Analysis::of_text("I want 1, 2 or 3.", &provider);
//! let numbers = aggregate(analysis.mapping(Category::Numbers), Category::Numbers, &provider);
//! assert_eq!(numbers.count, 3);
//! ```
//!
//! ## Architecture
//!
//! - [`locale`] - Locale resolution, format grammars, boundary segmentation
//! - [`analyze`] - Normalization, grouping, the complex tokenizer, category
//!   extraction
//! - [`stats`] - The statistics record and the aggregation fold
//! - [`report`] - Localized labels and HTML report rendering

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analyze;
pub mod error;
pub mod locale;
pub mod report;
pub mod stats;

// Re-export commonly used types
pub use analyze::{Analysis, Category, ComplexTokenizer, GroupedMapping, GroupedObject, Normalizer, Token, TokenKind};
pub use error::{Result, TextStatError};
pub use locale::{DateStyle, FormatProvider, Locale};
pub use report::render_report;
pub use stats::{aggregate, StatsRecord};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
