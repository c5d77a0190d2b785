mod metric_tree;
mod panels;

pub use metric_tree::MetricTree;
pub use panels::{formula_chip, legend_row, GlossaryEntry, GlossarySection, StatPanel};
