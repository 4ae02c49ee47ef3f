//! Task management module
//!
//! This module owns everything with invariants in the application:
//! - Task model and priority normalization
//! - CSV row codec with best-effort loading
//! - The persistent task store
//! - Priority aggregation for charts

pub mod chart;
pub mod codec;
pub mod model;
pub mod store;

pub use chart::{ChartSupport, PriorityCounts};
pub use codec::{parse_row, ParseError};
pub use model::{Priority, Task};
pub use store::{StoreError, TaskStore, DEFAULT_TASKS_FILE};
