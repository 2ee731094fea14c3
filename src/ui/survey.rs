//! Survey form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::FieldKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the survey: base fields, the topic-matched conditional group, the
/// follow-up question section, and the submit row
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Survey ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = app.form.visible_fields();

    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|field| match field.kind() {
            FieldKind::Multiline => Constraint::Min(4),
            _ => Constraint::Length(3),
        })
        .collect();
    constraints.push(Constraint::Length(4)); // follow-up questions
    constraints.push(Constraint::Length(3)); // submit row
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, field) in fields.iter().enumerate() {
        draw_field(
            frame,
            chunks[i],
            field.label(),
            app.form.values.get(*field),
            app.form.active_field() == Some(*field),
            field.kind() == FieldKind::Multiline,
            app.form.error(*field),
        );
    }

    draw_questions(frame, chunks[fields.len()], app);
    draw_submit_button(frame, chunks[fields.len() + 1], app.form.is_submit_row_active());
}

/// The loading indicator or the fetched question titles, in received order
fn draw_questions(frame: &mut Frame, area: Rect, app: &App) {
    if app.questions_loading {
        let loading = Paragraph::new("Loading additional questions...")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(loading, area);
        return;
    }

    let questions = &app.form.values.additional_questions;
    if questions.is_empty() {
        return;
    }

    let items: Vec<ListItem> = questions
        .iter()
        .map(|question| ListItem::new(question.title.clone()))
        .collect();
    let list = List::new(items).block(
        Block::default()
            .title(" Additional Questions ")
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, area);
}

/// The submit row
fn draw_submit_button(frame: &mut Frame, area: Rect, is_active: bool) {
    let label_style = if is_active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };
    let border_style = if is_active {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let button = Paragraph::new(Line::from(Span::styled(" Submit ", label_style))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(button, area);
}
