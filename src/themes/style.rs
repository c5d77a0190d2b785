/// Per-widget style override hook.
///
/// Widgets derive their style from the active [`egui::Style`] by default;
/// `styled` swaps in an explicit one for a single widget instance.
pub trait Styled {
    type Style: Clone;
    fn styled(self, style: Self::Style) -> Self;
}
