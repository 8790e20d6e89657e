//! The contact section: a simulated form submission, no network anywhere.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use sentidos_audio::binder::ElementId;

use crate::app::{FormStatus, PageState};
use crate::page;
use crate::ui::{control_style, register, render_control};

pub fn render_contacto(frame: &mut Frame, area: Rect, state: &mut PageState) {
    match state.form.status {
        FormStatus::Success => render_success(frame, area, state),
        _ => render_form(frame, area, state),
    }
}

fn render_form(frame: &mut Frame, area: Rect, state: &mut PageState) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Length(1), // quote
        Constraint::Length(3), // name
        Constraint::Length(3), // email
        Constraint::Length(3), // message
        Constraint::Length(1), // submit
        Constraint::Length(1), // spacer
        Constraint::Length(1), // mail + social row
        Constraint::Min(0),
    ])
    .margin(1)
    .split(area);

    frame.render_widget(
        Paragraph::new("Empecemos a caminar")
            .style(Style::default().add_modifier(Modifier::BOLD))
            .centered(),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new("\"Estaré encantada de acompañarte a encontrar tu nuevo camino.\"")
            .style(Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC))
            .centered(),
        chunks[1],
    );

    let name = state.form.name.clone();
    let email = state.form.email.clone();
    let message = state.form.message.clone();
    field(frame, chunks[2], state, page::FORM_NAME, &name, "Tu nombre aquí");
    field(
        frame,
        chunks[3],
        state,
        page::FORM_EMAIL,
        &email,
        "ejemplo@correo.com",
    );
    field(
        frame,
        chunks[4],
        state,
        page::FORM_MESSAGE,
        &message,
        "Cuéntame un poco sobre lo que te ha traído hasta aquí...",
    );

    let sending = matches!(state.form.status, FormStatus::Sending { .. });
    let label = if sending {
        "[ Enviando... ]"
    } else {
        "[ Enviar mensaje ]"
    };
    let mut style = control_style(state, page::FORM_SUBMIT);
    if sending {
        style = style.fg(Color::DarkGray);
    }
    frame.render_widget(Paragraph::new(label).style(style).centered(), chunks[5]);
    register(state, chunks[5], page::FORM_SUBMIT);

    let row = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(30),
        Constraint::Length(13),
        Constraint::Length(12),
        Constraint::Min(1),
    ])
    .split(chunks[7]);
    let mail_style = control_style(state, page::MAIL_LINK);
    frame.render_widget(
        Paragraph::new(format!("✉ {}", page::label_of(page::MAIL_LINK))).style(mail_style),
        row[1],
    );
    register(state, row[1], page::MAIL_LINK);
    render_control(frame, row[2], state, page::SOCIAL_IG);
    render_control(frame, row[3], state, page::SOCIAL_FB);
}

fn field(
    frame: &mut Frame,
    area: Rect,
    state: &mut PageState,
    id: ElementId,
    value: &str,
    placeholder: &str,
) {
    let focused = state.focused_id() == Some(id);
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else if state.hovered == Some(id) {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", page::label_of(id)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content = if value.is_empty() && !focused {
        Paragraph::new(placeholder).style(Style::default().fg(Color::DarkGray))
    } else {
        let cursor = if focused { "▏" } else { "" };
        Paragraph::new(format!("{value}{cursor}"))
    };
    frame.render_widget(content, inner);
    register(state, area, id);
}

fn render_success(frame: &mut Frame, area: Rect, state: &mut PageState) {
    let chunks = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Min(1),
    ])
    .split(area);

    frame.render_widget(
        Paragraph::new("✔ Mensaje enviado")
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .centered(),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(vec![Line::from(
            "Gracias por tu valentía al dar este paso. Te responderé muy pronto.",
        )])
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true })
        .centered(),
        chunks[2],
    );

    // This control only exists after submission, so it was never part of
    // the binder's snapshot: it works, but makes no sound.
    let reset = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(26),
        Constraint::Min(1),
    ])
    .split(chunks[3]);
    frame.render_widget(
        Paragraph::new("[ Enviar otro mensaje ]")
            .style(control_style(state, page::FORM_RESET))
            .centered(),
        reset[1],
    );
    register(state, reset[1], page::FORM_RESET);
}
