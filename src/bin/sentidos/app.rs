//! Sentidos - page application: event loop, interaction wiring, timers.

use std::io;
use std::time::{Duration, Instant};

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEvent, MouseEventKind,
};
use crossterm::execute;
use ratatui::layout::{Position, Rect};
use ratatui::DefaultTerminal;

use sentidos_audio::binder::{ElementId, InteractionBinder};
use sentidos_audio::config::FeedbackConfig;
use sentidos_audio::context::AudioContextManager;
use sentidos_audio::engine::scheduler::ToneScheduler;
use sentidos_audio::gate::{Gesture, GestureGate};
use sentidos_audio::welcome::WelcomeSequencer;

use crate::page::{self, Section};
use crate::ui;

/// How long the simulated form submission "sends".
const FORM_SEND_TIME: Duration = Duration::from_millis(1500);

/// Application builder.
pub struct Sentidos {
    config: FeedbackConfig,
}

impl Sentidos {
    pub fn new() -> Self {
        Self {
            config: FeedbackConfig::default(),
        }
    }

    pub fn config(mut self, config: FeedbackConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the page (takes over the terminal).
    pub fn run(self) -> EyreResult<()> {
        // The audio subsystem is constructed up front but stays silent
        // until the gesture gate unlocks it.
        let manager = AudioContextManager::with_default_backend(self.config.clone());
        let scheduler = ToneScheduler::new(manager);

        // Content ready: snapshot the element registry and hand it to the
        // binder. Nothing rendered later joins this snapshot.
        let binder = InteractionBinder::bind(
            page::registry().iter().map(|e| (e.id, e.kind)),
            &self.config,
        );

        let mut app = App {
            scheduler,
            gate: GestureGate::new(),
            binder,
            welcome: WelcomeSequencer::new(),
            state: PageState::new(),
            should_quit: false,
        };

        let mut terminal = ratatui::init();
        execute!(io::stdout(), EnableMouseCapture).wrap_err("failed to enable mouse capture")?;
        let result = app.run(&mut terminal);
        let _ = execute!(io::stdout(), DisableMouseCapture);
        ratatui::restore();
        result
    }
}

impl Default for Sentidos {
    fn default() -> Self {
        Self::new()
    }
}

/// Simulated form submission lifecycle. No network anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Editing,
    Sending { done_at: Instant },
    Success,
}

#[derive(Debug)]
pub struct FormState {
    pub status: FormStatus,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormState {
    fn new() -> Self {
        Self {
            status: FormStatus::Editing,
            name: String::new(),
            email: String::new(),
            message: String::new(),
        }
    }
}

/// Mutable page state shared with the renderer.
pub struct PageState {
    pub section: Section,
    pub menu_open: bool,
    /// Index into the registry order; drives Tab traversal.
    pub focus: Option<usize>,
    pub hovered: Option<ElementId>,
    pub form: FormState,
    /// Snapshot of the welcome press cue for this frame.
    pub welcome_pressed: bool,
    /// Clickable rects, rebuilt every draw.
    pub hit_map: Vec<(Rect, ElementId)>,
}

impl PageState {
    fn new() -> Self {
        Self {
            section: Section::Inicio,
            menu_open: false,
            focus: None,
            hovered: None,
            form: FormState::new(),
            welcome_pressed: false,
            hit_map: Vec::new(),
        }
    }

    pub fn focused_id(&self) -> Option<ElementId> {
        self.focus.map(|i| page::registry()[i].id)
    }
}

struct App {
    scheduler: ToneScheduler,
    gate: GestureGate,
    binder: InteractionBinder,
    welcome: WelcomeSequencer,
    state: PageState,
    should_quit: bool,
}

impl App {
    fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.tick(Instant::now());

            terminal.draw(|frame| ui::render(frame, &mut self.state))?;

            // Non-blocking input, ~60fps
            if event::poll(Duration::from_millis(16))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key.code)
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Advance the page's timers. Both are plain deadlines, fully
    /// decoupled from the audio subsystem.
    fn tick(&mut self, now: Instant) {
        self.state.welcome_pressed = self.welcome.is_pressed(now);

        if let FormStatus::Sending { done_at } = self.state.form.status {
            if now >= done_at {
                self.state.form.status = FormStatus::Success;
            }
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        // Form fields capture printable input while focused.
        if let Some(id) = self.state.focused_id() {
            if page::is_input(id) && self.state.section == Section::Contacto {
                match key {
                    KeyCode::Char(c) => {
                        self.edit_field(id, Some(c));
                        return;
                    }
                    KeyCode::Backspace => {
                        self.edit_field(id, None);
                        return;
                    }
                    _ => {}
                }
            }
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                if self.state.menu_open {
                    self.state.menu_open = false;
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Char('m') => self.state.menu_open = !self.state.menu_open,
            KeyCode::Tab => self.move_focus(1),
            KeyCode::BackTab => self.move_focus(-1),
            KeyCode::Enter => {
                if let Some(id) = self.state.focused_id() {
                    self.activate(id);
                }
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // Any press anywhere is a qualifying gesture for the gate.
                self.gate.observe(Gesture::PointerDown, &mut self.scheduler);

                if let Some(id) = self.hit(mouse.column, mouse.row) {
                    self.activate(id);
                }
            }
            MouseEventKind::Moved => {
                let hit = self.hit(mouse.column, mouse.row);
                if hit != self.state.hovered {
                    self.state.hovered = hit;
                    if let Some(id) = hit {
                        self.binder.pointer_enter(id, &mut self.scheduler);
                    }
                }
            }
            _ => {}
        }
    }

    fn hit(&self, column: u16, row: u16) -> Option<ElementId> {
        // Back-to-front: widgets drawn later (the menu overlay) win.
        let position = Position::new(column, row);
        self.state
            .hit_map
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(position))
            .map(|&(_, id)| id)
    }

    fn move_focus(&mut self, step: isize) {
        let len = page::registry().len() as isize;
        let next = match self.state.focus {
            Some(i) => (i as isize + step).rem_euclid(len),
            None if step < 0 => len - 1,
            None => 0,
        } as usize;

        self.state.focus = Some(next);
        let id = page::registry()[next].id;
        self.binder.focus(id, &mut self.scheduler);
    }

    fn activate(&mut self, id: ElementId) {
        match id {
            page::NAV_BRAND | page::NAV_INICIO => self.goto(Section::Inicio),
            page::NAV_SERVICIOS | page::HERO_SERVICIOS => self.goto(Section::Servicios),
            page::NAV_SOBRE_MI => self.goto(Section::SobreMi),
            page::NAV_CONTACTO => self.goto(Section::Contacto),
            page::HERO_EMPIEZA => self.goto(Section::Captacion),
            page::NAV_MENU => self.state.menu_open = !self.state.menu_open,
            page::WELCOME_BTN => {
                self.welcome.activate(&mut self.scheduler, Instant::now());
            }
            page::FORM_SUBMIT => self.submit_form(),
            page::FORM_RESET => self.reset_form(),
            page::FORM_NAME | page::FORM_EMAIL | page::FORM_MESSAGE => {
                // Clicking an input focuses it; inputs are unbound, so the
                // focus call stays silent.
                self.state.focus = page::index_of(id);
                self.binder.focus(id, &mut self.scheduler);
            }
            // Download cards, service CTAs, mail and social links have no
            // page-side behavior beyond their feedback tones.
            _ => {}
        }
    }

    fn goto(&mut self, section: Section) {
        self.state.section = section;
        self.state.menu_open = false;
    }

    fn submit_form(&mut self) {
        if self.state.form.status == FormStatus::Editing {
            self.state.form.status = FormStatus::Sending {
                done_at: Instant::now() + FORM_SEND_TIME,
            };
        }
    }

    fn reset_form(&mut self) {
        if self.state.form.status == FormStatus::Success {
            self.state.form = FormState::new();
        }
    }

    fn edit_field(&mut self, id: ElementId, input: Option<char>) {
        if self.state.form.status != FormStatus::Editing {
            return;
        }

        let field = match id {
            page::FORM_NAME => &mut self.state.form.name,
            page::FORM_EMAIL => &mut self.state.form.email,
            page::FORM_MESSAGE => &mut self.state.form.message,
            _ => return,
        };

        match input {
            Some(c) => field.push(c),
            None => {
                field.pop();
            }
        }
    }
}
