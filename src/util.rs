use ratatui::layout::{Flex, Layout, Rect, Size};

/// Center a `size`-sized rectangle within `area`, clipping it if it does not
/// fit.
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [rect] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::vertical([size.height]).flex(Flex::Center).areas(rect);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Rect::new(0, 0, 10, 10), Size::new(4, 4), Rect::new(3, 3, 4, 4))]
    #[case(Rect::new(0, 0, 10, 10), Size::new(10, 10), Rect::new(0, 0, 10, 10))]
    #[case(Rect::new(2, 3, 10, 8), Size::new(4, 4), Rect::new(5, 5, 4, 4))]
    #[case(Rect::new(0, 0, 10, 10), Size::new(20, 20), Rect::new(0, 0, 10, 10))]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] expected: Rect) {
        assert_eq!(center_rect(area, size), expected);
    }
}
