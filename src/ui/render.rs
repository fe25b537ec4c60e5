use crate::form::Field;
use crate::ui::app::{App, Focus};
use crate::ui::layout::{form_column, form_regions};
use crate::ui::theme::{
    ACCEPT_TEXT, ERROR_TEXT, FIELD_BORDER, FOCUSED_BORDER, HEADER_TEXT, HINT_TEXT,
};
use ratatui::layout::Position;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let column = form_column(frame.area());
    let regions = form_regions(column);
    let state = app.form_state();

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Formulário",
            Style::default().fg(HEADER_TEXT),
        ))),
        regions.header,
    );

    let name_focused = app.focus() == Focus::Name;
    frame.render_widget(
        field_widget(Field::Name, &state.name, name_focused),
        regions.name_input,
    );

    if state.has_name_error() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                state.errors.name.as_str(),
                Style::default().fg(ERROR_TEXT),
            ))),
            regions.name_error,
        );
    }

    frame.render_widget(
        field_widget(Field::Email, &state.email, !name_focused),
        regions.email_input,
    );

    if let Some(submission) = app.banner() {
        let lines = vec![
            Line::from(Span::styled("Enviado", Style::default().fg(ACCEPT_TEXT))),
            Line::from(format!("Nome: {}", submission.name)),
            Line::from(format!("Email: {}", submission.email)),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(ACCEPT_TEXT)),
            ),
            regions.banner,
        );
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Tab troca de campo · Enter envia · Esc sai",
            Style::default().fg(HINT_TEXT),
        ))),
        regions.footer,
    );

    let cursor_region = if name_focused {
        regions.name_input
    } else {
        regions.email_input
    };
    if cursor_region.width > 2 && cursor_region.height > 2 {
        let value = state.value(app.focus().field());
        let offset = value
            .chars()
            .count()
            .min(usize::from(cursor_region.width - 2)) as u16;
        frame.set_cursor_position(Position {
            x: cursor_region.x + 1 + offset,
            y: cursor_region.y + 1,
        });
    }
}

fn field_widget<'a>(field: Field, value: &'a str, focused: bool) -> Paragraph<'a> {
    let border = if focused { FOCUSED_BORDER } else { FIELD_BORDER };
    Paragraph::new(value).block(
        Block::default()
            .borders(Borders::ALL)
            .title(field.label())
            .border_style(Style::default().fg(border)),
    )
}
