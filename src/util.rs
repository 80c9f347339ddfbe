use crate::consts;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return the centered rectangle of [`DISPLAY_SIZE`][consts::DISPLAY_SIZE]
/// (or as much of it as fits) in which everything is drawn.
pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    let [display] = Layout::horizontal([consts::DISPLAY_SIZE.width])
        .flex(Flex::Center)
        .areas(buffer_area);
    let [display] = Layout::vertical([consts::DISPLAY_SIZE.height])
        .flex(Flex::Center)
        .areas(display);
    display
}

/// Center a rectangle of the given size within `area`, clamping to `area` if
/// it does not fit.
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [rect] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::vertical([size.height]).flex(Flex::Center).areas(rect);
    rect
}
