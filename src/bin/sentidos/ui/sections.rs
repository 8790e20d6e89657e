//! Section content, condensed from the page copy.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use sentidos_audio::binder::ElementId;

use crate::app::PageState;
use crate::page;
use crate::ui::render_control;

fn accent() -> Style {
    Style::default().fg(Color::Yellow)
}

fn muted() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn render_inicio(frame: &mut Frame, area: Rect, state: &mut PageState) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // badge
        Constraint::Length(2), // headline
        Constraint::Length(1), // quote
        Constraint::Length(2), // sub
        Constraint::Length(1), // CTA row
        Constraint::Min(0),
    ])
    .margin(1)
    .split(area);

    frame.render_widget(
        Paragraph::new("◐ Accesibilidad total habilitada")
            .style(accent())
            .centered(),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(vec![
            Line::from("Despierta tus sentidos, siente cada momento"),
            Line::from("y crea la vida que sueñas."),
        ])
        .style(Style::default().add_modifier(Modifier::BOLD))
        .centered(),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new("\"No necesitas ver para creer en tu poder\"")
            .style(accent().add_modifier(Modifier::ITALIC))
            .centered(),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new("No estás perdida. Estás desconectada. ¿Y si tu mente se activa mucho antes que tú?")
            .style(muted())
            .wrap(Wrap { trim: true })
            .centered(),
        chunks[3],
    );

    let buttons = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(21),
        Constraint::Length(2),
        Constraint::Length(18),
        Constraint::Min(1),
    ])
    .split(chunks[4]);
    render_control(frame, buttons[1], state, page::HERO_EMPIEZA);
    render_control(frame, buttons[3], state, page::HERO_SERVICIOS);
}

pub fn render_captacion(frame: &mut Frame, area: Rect, state: &mut PageState) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(6),
    ])
    .margin(1)
    .split(area);

    frame.render_widget(
        Paragraph::new("Empieza ahora")
            .style(Style::default().add_modifier(Modifier::BOLD))
            .centered(),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new("\"He diseñado estas herramientas para acompañarte.\"")
            .style(muted().add_modifier(Modifier::ITALIC))
            .centered(),
        chunks[1],
    );

    let cards = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    card(
        frame,
        cards[0],
        state,
        " ♪ Un minuto para volver a sentir ",
        "Un audio corto para parar, respirar y volver a sentir tu vida en lo cotidiano. Perfecto para tus mañanas.",
        page::CAPT_AUDIO,
    );
    card(
        frame,
        cards[1],
        state,
        " ✎ Tu chispa cotidiana ",
        "Ejercicio escrito para abrir los sentidos, sentir plenamente y encender tu chispa en el día a día.",
        page::CAPT_GUIA,
    );
}

pub fn render_servicios(frame: &mut Frame, area: Rect, state: &mut PageState) {
    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(6)])
        .margin(1)
        .split(area);

    frame.render_widget(
        Paragraph::new("Tu camino personalizado")
            .style(Style::default().add_modifier(Modifier::BOLD))
            .centered(),
        chunks[0],
    );

    let columns =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).split(chunks[1]);
    card(
        frame,
        columns[0],
        state,
        " Guía \"Despierta tus sentidos\" ",
        "Para personas que sienten que algo no encaja. Análisis de tendencias energéticas, ejercicios de reconexión sensorial y herramientas para decisiones conscientes.",
        page::SERV_GUIA,
    );

    let right = Layout::vertical([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(columns[1]);
    card(
        frame,
        right[0],
        state,
        " Sesiones 1:1 \"Volver a ti\" ",
        "Un espacio para personas que se exigen demasiado o quieren un cambio profundo y no saben por dónde empezar.",
        page::SERV_SESIONES,
    );

    let aside = Block::default().borders(Borders::ALL).title(" ¿Tienes dudas? ");
    let inner = aside.inner(right[1]);
    frame.render_widget(aside, right[1]);
    frame.render_widget(
        Paragraph::new("Escríbeme y hablemos.")
            .style(muted())
            .wrap(Wrap { trim: true }),
        inner,
    );
}

pub fn render_sobre_mi(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Aprender a ver con el alma ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = vec![
        Line::from("\"Durante mucho tiempo mi vida no me gustaba, pero no lo sabía.\"")
            .style(accent().add_modifier(Modifier::ITALIC)),
        Line::from(""),
        Line::from(
            "Primero perdí la vista. Aprendí a moverme, a cocinar, a organizarme. Pero fue al parar cuando apareció la pregunta: ¿existe otra forma de vivir?",
        ),
        Line::from(""),
        Line::from(
            "Al no ver, empecé a sentir de otra manera. Un pensamiento crea una emoción, la emoción un hábito, y el hábito una vida. Por eso empezamos por lo pequeño: cómo te duchas, cómo desayunas.",
        ),
        Line::from(""),
        Line::from("Kundalini Yoga · Sonoterapia · Manifestación Consciente").style(muted()),
    ];
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), inner);
}

fn card(
    frame: &mut Frame,
    area: Rect,
    state: &mut PageState,
    title: &'static str,
    body: &'static str,
    button: ElementId,
) {
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);
    frame.render_widget(
        Paragraph::new(body).style(muted()).wrap(Wrap { trim: true }),
        rows[0],
    );
    render_control(frame, rows[1], state, button);
}
