//! Chart request configuration.
//!
//! All types derive `Serialize + Deserialize` so the same structs work
//! for both Rust API construction and JSON configuration files. A JSON
//! chart list drives the engine:
//!
//! ```json
//! {
//!   "charts": [
//!     {
//!       "kind": "multi_color",
//!       "table": "Completion",
//!       "range": "A2:B12",
//!       "output_file": "completion.tex",
//!       "x_label_max_line_length": 15,
//!       "show_values": true
//!     }
//!   ]
//! }
//! ```
//!
//! Requests built in code go through [`ChartRequest::builder`], which
//! rejects a request missing its source-table or range reference before
//! any data is touched. Deserialized requests get the same check from
//! [`ChartRequest::validate`] when emission starts.

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Which emitter renders the chart.
///
/// A tagged variant selected by caller configuration; each kind maps to
/// one emitter over the same bar/layout input contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// One uniformly colored series with numeric x-tick positions.
    #[default]
    Single,
    /// One independent plot per bar, each with its own palette color,
    /// symbolic category axis and a synthesized legend.
    MultiColor,
}

/// Configuration bag for one chart. Immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartRequest {
    /// Emitter selection.
    #[serde(default)]
    pub kind: ChartKind,
    /// Source tab name in the spreadsheet (opaque to this crate).
    pub table: String,
    /// Cell range reference, e.g. `A2:B18` (opaque to this crate).
    pub range: String,
    /// Whether the data source should fail on rows past the range
    /// (opaque flag, carried for the data-source collaborator).
    #[serde(default = "default_true")]
    pub error_for_data_after_range: bool,
    /// Exchange cells 0 and 1 of every row before charting.
    #[serde(default)]
    pub swap_columns: bool,
    /// Reverse row order before charting.
    #[serde(default)]
    pub reverse_order: bool,
    /// Path the chart document is written to.
    #[serde(default = "default_output_file")]
    pub output_file: String,
    /// X-axis label text; empty means no label.
    #[serde(default)]
    pub x_label: String,
    /// Y-axis label text; empty means no label.
    #[serde(default)]
    pub y_label: String,
    /// Tick label rotation in degrees (single-series only; ignored once
    /// label wrapping is on).
    #[serde(default = "default_label_rotation")]
    pub label_rotation: i32,
    /// Maximum characters per tick-label line; 0 disables wrapping.
    #[serde(default)]
    pub x_label_max_line_length: usize,
    /// `enlarge x limits` override; 0.0 means use the computed value.
    #[serde(default)]
    pub x_limits: f64,
    /// Annotate each bar with its value (multi-color only).
    #[serde(default)]
    pub show_values: bool,
}

fn default_true() -> bool {
    true
}

fn default_output_file() -> String {
    "chart.tex".to_string()
}

fn default_label_rotation() -> i32 {
    45
}

impl Default for ChartRequest {
    fn default() -> Self {
        Self {
            kind: ChartKind::default(),
            table: String::new(),
            range: String::new(),
            error_for_data_after_range: true,
            swap_columns: false,
            reverse_order: false,
            output_file: default_output_file(),
            x_label: String::new(),
            y_label: String::new(),
            label_rotation: default_label_rotation(),
            x_label_max_line_length: 0,
            x_limits: 0.0,
            show_values: false,
        }
    }
}

impl ChartRequest {
    /// Start building a request. `table` and `range` must be set before
    /// [`ChartRequestBuilder::build`] succeeds.
    pub fn builder() -> ChartRequestBuilder {
        ChartRequestBuilder::default()
    }

    /// Check the required fields. Runs at build time for builder-made
    /// requests and again at emission time for deserialized ones, so a
    /// bad request always fails before any data is processed.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.table.is_empty() {
            return Err(ChartError::Config("table must be set".to_string()));
        }
        if self.range.is_empty() {
            return Err(ChartError::Config("range must be set".to_string()));
        }
        Ok(())
    }
}

/// Builder for [`ChartRequest`].
#[derive(Debug, Default)]
pub struct ChartRequestBuilder {
    request: ChartRequest,
}

impl ChartRequestBuilder {
    pub fn kind(mut self, kind: ChartKind) -> Self {
        self.request.kind = kind;
        self
    }

    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.request.table = table.into();
        self
    }

    pub fn range(mut self, range: impl Into<String>) -> Self {
        self.request.range = range.into();
        self
    }

    pub fn error_for_data_after_range(mut self, flag: bool) -> Self {
        self.request.error_for_data_after_range = flag;
        self
    }

    pub fn swap_columns(mut self, flag: bool) -> Self {
        self.request.swap_columns = flag;
        self
    }

    pub fn reverse_order(mut self, flag: bool) -> Self {
        self.request.reverse_order = flag;
        self
    }

    pub fn output_file(mut self, path: impl Into<String>) -> Self {
        self.request.output_file = path.into();
        self
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.request.x_label = label.into();
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.request.y_label = label.into();
        self
    }

    pub fn label_rotation(mut self, degrees: i32) -> Self {
        self.request.label_rotation = degrees;
        self
    }

    pub fn x_label_max_line_length(mut self, chars: usize) -> Self {
        self.request.x_label_max_line_length = chars;
        self
    }

    pub fn x_limits(mut self, fraction: f64) -> Self {
        self.request.x_limits = fraction;
        self
    }

    pub fn show_values(mut self, flag: bool) -> Self {
        self.request.show_values = flag;
        self
    }

    /// Validate and finish the request.
    pub fn build(self) -> Result<ChartRequest, ChartError> {
        self.request.validate()?;
        Ok(self.request)
    }
}

/// A set of chart requests, as loaded from one configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartSet {
    #[serde(default)]
    pub charts: Vec<ChartRequest>,
}
