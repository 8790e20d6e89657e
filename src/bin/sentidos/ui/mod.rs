//! Page rendering.
//!
//! Every draw rebuilds the hit map: each interactive widget registers the
//! rect it was drawn into so the event loop can hit-test pointer events
//! against exactly what is on screen.

mod form;
mod sections;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use sentidos_audio::binder::ElementId;

use crate::app::PageState;
use crate::page::{self, Section};

pub fn render(frame: &mut Frame, state: &mut PageState) {
    state.hit_map.clear();

    let chunks = Layout::vertical([
        Constraint::Length(3), // nav bar
        Constraint::Min(10),   // active section
        Constraint::Length(2), // footer
        Constraint::Length(1), // help bar
    ])
    .split(frame.area());

    render_nav(frame, chunks[0], state);

    match state.section {
        Section::Inicio => sections::render_inicio(frame, chunks[1], state),
        Section::Captacion => sections::render_captacion(frame, chunks[1], state),
        Section::Servicios => sections::render_servicios(frame, chunks[1], state),
        Section::SobreMi => sections::render_sobre_mi(frame, chunks[1]),
        Section::Contacto => form::render_contacto(frame, chunks[1], state),
    }

    render_footer(frame, chunks[2]);
    render_help(frame, chunks[3]);

    // The menu overlay draws last so it sits on top; the hit map is
    // scanned back-to-front to match.
    if state.menu_open {
        render_menu(frame, frame.area(), state);
    }
}

/// Record a clickable rect for this frame.
pub(crate) fn register(state: &mut PageState, area: Rect, id: ElementId) {
    state.hit_map.push((area, id));
}

pub(crate) fn control_style(state: &PageState, id: ElementId) -> Style {
    let mut style = Style::default().fg(Color::White);
    if state.hovered == Some(id) {
        style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
    }
    if state.focused_id() == Some(id) {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    style
}

/// Draw one clickable control as a bracketed label and register its rect.
pub(crate) fn render_control(frame: &mut Frame, area: Rect, state: &mut PageState, id: ElementId) {
    let style = control_style(state, id);
    let label = format!("[ {} ]", page::label_of(id));
    frame.render_widget(Paragraph::new(label).style(style).centered(), area);
    register(state, area, id);
}

fn render_nav(frame: &mut Frame, area: Rect, state: &mut PageState) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::horizontal([
        Constraint::Length(19), // brand
        Constraint::Length(9),
        Constraint::Length(12),
        Constraint::Length(11),
        Constraint::Length(11),
        Constraint::Min(1), // spacer
        Constraint::Length(16),
        Constraint::Length(9),
    ])
    .split(inner);

    let brand_style = control_style(state, page::NAV_BRAND).add_modifier(Modifier::BOLD);
    frame.render_widget(
        Paragraph::new(format!("● {}", page::label_of(page::NAV_BRAND))).style(brand_style),
        chunks[0],
    );
    register(state, chunks[0], page::NAV_BRAND);

    let tabs = [
        (page::NAV_INICIO, Section::Inicio, 1),
        (page::NAV_SERVICIOS, Section::Servicios, 2),
        (page::NAV_SOBRE_MI, Section::SobreMi, 3),
        (page::NAV_CONTACTO, Section::Contacto, 4),
    ];
    for (id, section, chunk) in tabs {
        let mut style = control_style(state, id);
        if state.section == section {
            style = style.fg(Color::Yellow);
        }
        frame.render_widget(
            Paragraph::new(page::label_of(id)).style(style).centered(),
            chunks[chunk],
        );
        register(state, chunks[chunk], id);
    }

    render_welcome(frame, chunks[6], state);
    render_control(frame, chunks[7], state, page::NAV_MENU);
}

/// The welcome call-to-action renders "scaled down" (compressed, inverted)
/// while its 200 ms press cue holds.
fn render_welcome(frame: &mut Frame, area: Rect, state: &mut PageState) {
    let (label, press) = if state.welcome_pressed {
        ("[♪ bienvenida]", Modifier::REVERSED)
    } else {
        ("[ ♪ bienvenida ]", Modifier::empty())
    };

    let style = control_style(state, page::WELCOME_BTN)
        .fg(Color::Yellow)
        .add_modifier(press);
    frame.render_widget(Paragraph::new(label).style(style).centered(), area);
    register(state, area, page::WELCOME_BTN);
}

fn render_menu(frame: &mut Frame, area: Rect, state: &mut PageState) {
    let width = 30.min(area.width);
    let height = 8.min(area.height);
    let popup = Rect::new(
        (area.width.saturating_sub(width)) / 2,
        (area.height.saturating_sub(height)) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, popup);
    let block = Block::default().title(" menú ").borders(Borders::ALL);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let rows = Layout::vertical([Constraint::Length(1); 4])
        .margin(1)
        .split(inner);
    let entries = [
        page::NAV_INICIO,
        page::NAV_SERVICIOS,
        page::NAV_SOBRE_MI,
        page::NAV_CONTACTO,
    ];
    for (row, id) in rows.iter().zip(entries) {
        frame.render_widget(
            Paragraph::new(page::label_of(id)).style(control_style(state, id)),
            *row,
        );
        register(state, *row, id);
    }
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from("© 2026 Sentidos con Vida - Estrella. Todos los derechos reservados."),
        Line::from("Diseñado con ♥ pensando en la accesibilidad total."),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(Color::DarkGray))
            .centered(),
        area,
    );
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(" [Q] Salir  [Tab] Foco  [Intro] Activar  [M] Menú  [Clic] Despertar audio")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
