//! # Pgfbar - PGFPlots Bar Chart Generator
//!
//! Pgfbar is a Rust library that turns tabular spreadsheet data into
//! standalone PGFPlots bar chart documents. It provides:
//!
//! - **Table preprocessing**: column swap and row-order reversal
//! - **Locale normalization**: comma-decimal value parsing, two rules
//! - **Label formatting**: LaTeX escaping and greedy line wrapping
//! - **Layout**: bar width and axis padding interpolated from bar count
//! - **Emission**: single-series and per-bar-color chart documents
//! - **Templates**: `\VAR{...}` replacement and sheet-error detection
//!
//! ## Quick Start
//!
//! ```no_run
//! use pgfbar::{ChartKind, ChartRequest, write_chart};
//!
//! // Rows as they come from the spreadsheet reader: raw string cells.
//! let rows = vec![
//!     vec!["12".to_string(), "2023".to_string()],
//!     vec!["17".to_string(), "2024".to_string()],
//! ];
//!
//! let request = ChartRequest::builder()
//!     .kind(ChartKind::Single)
//!     .table("ArticleCounts")
//!     .range("A2:B18")
//!     .output_file("articles.tex")
//!     .x_label("Year")
//!     .y_label("Articles")
//!     .build()?;
//!
//! // Renders the full document, then writes it in one shot.
//! write_chart(rows, &request)?;
//! # Ok::<(), pgfbar::ChartError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`request`] | Chart configuration and validating builder |
//! | [`table`] | Row preprocessing |
//! | [`value`] | Numeric cell normalization |
//! | [`label`] | Label escaping and line breaking |
//! | [`layout`] | Bar geometry interpolation |
//! | [`palette`] | Multi-color chart palette |
//! | [`emit`] | Chart document emitters |
//! | [`template`] | Variable replacement and output checks |
//! | [`error`] | Error types |
//!
//! The spreadsheet client that produces the rows and the LaTeX compiler
//! that consumes the documents are deliberately outside this crate: it
//! neither fetches data nor invokes `pdflatex`.

pub mod emit;
pub mod error;
pub mod label;
pub mod layout;
pub mod palette;
pub mod request;
pub mod table;
pub mod template;
pub mod value;

// Re-exports for convenience
pub use emit::{Bar, render_chart, write_chart};
pub use error::ChartError;
pub use layout::BarLayout;
pub use request::{ChartKind, ChartRequest, ChartRequestBuilder, ChartSet};
