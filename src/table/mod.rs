//! Table - Tabular View Logic
//!
//! The non-visual half of the data table: records, columns, the
//! filter → sort → paginate pipeline, view state reducers and the cell
//! rendering rules. Nothing here touches a window.

pub mod cell;
pub mod column;
pub mod events;
pub mod filter;
pub mod pagination;
pub mod pipeline;
pub mod record;
pub mod sort;
pub mod view_state;

pub use cell::{ActionKind, BadgeStatus, BadgeTone, CellContent, CellRule, EntityKind, resolve_cell};
pub use column::{ColumnSpec, ColumnWidth};
pub use events::{TableEvent, TableHandlers};
pub use pipeline::{TableOptions, TableView, build_view};
pub use record::{Record, Value};
pub use sort::{SortDirection, SortState};
pub use view_state::{PagePolicy, ViewAction, ViewState};
