//! Transcript comparison.
//!
//! A user's transcription is aligned word by word against a reference
//! transcript. Every mismatch becomes an [`ErrorRecord`] with an
//! [`ErrorCategory`], and both texts are rendered as HTML with each segment
//! styled as correct or as an error.
//!
//! # Examples
//!
//! ```
//! use examlens::compare::{ErrorCategory, TranscriptComparator};
//!
//! let comparator = TranscriptComparator::default();
//! let result = comparator
//!     .compare("The cat sit on mat", "The cat sat on the mat")
//!     .unwrap();
//!
//! assert_eq!(result.errors.len(), 2);
//! assert!(result.errors.iter().all(|e| e.category == ErrorCategory::Listening));
//! assert!(result.accuracy < 100.0);
//! ```

pub mod aligner;
pub mod classifier;
pub mod engine;
pub mod render;

pub use aligner::{Opcode, OpcodeKind};
pub use classifier::ErrorCategory;
pub use engine::{ComparisonResult, ErrorRecord, TranscriptComparator};
pub use render::RenderConfig;
