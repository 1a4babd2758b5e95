//! UI components for the dashboard TUI.
//!
//! Each component renders one screen region from a borrowed view context;
//! components own no state of their own.

mod comparison_chart;
mod discussion;
mod result_table;
pub(crate) mod text_cell;
mod university_grid;

pub use comparison_chart::{ComparisonChartComponent, ComparisonChartViewContext};
pub use discussion::{DiscussionComponent, DiscussionViewContext};
pub use result_table::{
    PROGRESS_CELLS, ResultTableComponent, ResultTableViewContext, render_analysis,
};
pub use university_grid::{
    CARD_WIDTH, UniversityGridComponent, UniversityGridViewContext, grid_columns,
};
