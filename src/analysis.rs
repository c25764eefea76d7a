//! Text analysis: normalization, tokenization, tagging and token filtering.
//!
//! Text flows through the same stages as in a search-engine analyzer:
//!
//! ```text
//! raw text → char filters → tokenizer → (tagger) → token filters
//! ```

pub mod char_filter;
pub mod normalizer;
pub mod pos;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use normalizer::Normalizer;
pub use token::{Token, TokenStream};
