//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Areas shared by both screens
pub struct ScreenLayout {
    pub tabs: Rect,
    pub main: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Tabs on top, then the active screen, a status line and the help bar
pub fn calculate_screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    ScreenLayout {
        tabs: chunks[0],
        main: chunks[1],
        status: chunks[2],
        help: chunks[3],
    }
}

/// Split a screen into its input form and the content below it
pub fn split_form(area: Rect, form_height: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(form_height), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Split a one-line form row into `n` equal input boxes
pub fn form_columns(area: Rect, n: usize) -> Vec<Rect> {
    let n = n.max(1) as u32;
    let constraints: Vec<Constraint> = (0..n).map(|_| Constraint::Ratio(1, n)).collect();
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_fits() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_popup(area, 40, 10);
        assert_eq!(popup, Rect::new(30, 15, 40, 10));

        let small = Rect::new(0, 0, 20, 5);
        let popup = centered_popup(small, 40, 10);
        assert_eq!(popup.width, 20);
        assert_eq!(popup.height, 5);
    }

    #[test]
    fn test_screen_layout_heights() {
        let layout = calculate_screen_layout(Rect::new(0, 0, 80, 30));
        assert_eq!(layout.tabs.height, 2);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.help.height, 1);
        assert_eq!(layout.main.height, 26);

        let (form, body) = split_form(layout.main, 3);
        assert_eq!(form.height, 3);
        assert_eq!(body.height, 23);
    }

    #[test]
    fn test_form_columns() {
        let cols = form_columns(Rect::new(0, 0, 80, 3), 4);
        assert_eq!(cols.len(), 4);
        assert_eq!(cols.iter().map(|r| r.width).sum::<u16>(), 80);
    }
}
