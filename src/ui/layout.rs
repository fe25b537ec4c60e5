use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Regions of the form screen, top to bottom.
pub struct FormRegions {
    pub header: Rect,
    pub name_input: Rect,
    pub name_error: Rect,
    pub email_input: Rect,
    pub banner: Rect,
    pub footer: Rect,
}

/// Centered column the form lives in, at most 60 columns wide.
pub fn form_column(area: Rect) -> Rect {
    let width = area.width.min(60);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

pub fn form_regions(area: Rect) -> FormRegions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header
            Constraint::Length(3), // name input
            Constraint::Length(1), // name error line
            Constraint::Length(3), // email input
            Constraint::Length(4), // accepted banner
            Constraint::Min(0),    // spacer
            Constraint::Length(1), // footer
        ])
        .split(area);

    FormRegions {
        header: chunks[0],
        name_input: chunks[1],
        name_error: chunks[2],
        email_input: chunks[3],
        banner: chunks[4],
        footer: chunks[6],
    }
}
