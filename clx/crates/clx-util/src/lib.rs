//! clx-util - Source Locations and Diagnostics
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Foundation types shared by the clx tokenizer and its command-line driver:
//!
//! - [`span`]: byte spans with line/column coordinates, plus a [`SourceMap`]
//!   that owns source files and answers "which line is this offset on".
//! - [`diagnostic`]: errors and warnings with codes, snippets and a
//!   collecting [`Handler`].
//! - [`error`]: failures of source map lookups.
//!
//! LINE/COLUMN CONVENTIONS:
//! ------------------------
//! Lines and columns are 1-based. Columns count characters, so a column
//! reported for text after a multi-byte character still matches what an
//! editor shows.
//!
//! # Examples
//!
//! ```
//! use clx_util::{SourceMap, Span};
//!
//! let mut map = SourceMap::new();
//! let id = map.add_file("main.c", "int x;\nint y;\n");
//! let file = map.get(id).unwrap();
//!
//! assert_eq!(file.offset_to_line_col(11), (2, 5));
//! assert_eq!(map.location(Span::with_file(11, 12, id, 2, 5)).unwrap(), "main.c:2:5");
//! ```

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{FileId, SourceFile, SourceMap, Span};

