// Preludes: re-export commonly used items for convenience
pub use crate::app::Dashboard;
pub use crate::layout::{scene, Scene};
pub use crate::model::{ChangeTone, MetricNode, ModelError, Palette};
pub use crate::state::{ExpansionSet, MetricTreeState};
pub use crate::themes::Styled;
pub use crate::widgets::MetricTree;
