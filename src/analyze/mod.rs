//! Document analysis: normalization, grouping, the complex tokenizer, and
//! category extraction.

mod extract;
mod grouping;
mod normalize;
mod tokenizer;

pub use extract::{Analysis, Category};
pub use grouping::{GroupedMapping, GroupedObject};
pub use normalize::Normalizer;
pub use tokenizer::{ComplexTokenizer, Token, TokenKind};
