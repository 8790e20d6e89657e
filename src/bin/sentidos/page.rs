//! Static page model: sections and the interactive element registry.
//!
//! The registry is the "content ready" snapshot handed to the interaction
//! binder at startup. It never changes afterwards; controls the page grows
//! later (the success panel's reset button) are deliberately absent, so
//! they work but get no feedback wiring.

use sentidos_audio::binder::{ElementId, ElementKind};

/// Which part of the page is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Inicio,
    Captacion,
    Servicios,
    SobreMi,
    Contacto,
}

pub struct PageElement {
    pub id: ElementId,
    pub kind: ElementKind,
    pub label: &'static str,
}

pub const NAV_BRAND: ElementId = ElementId(0);
pub const NAV_INICIO: ElementId = ElementId(1);
pub const NAV_SERVICIOS: ElementId = ElementId(2);
pub const NAV_SOBRE_MI: ElementId = ElementId(3);
pub const NAV_CONTACTO: ElementId = ElementId(4);
pub const NAV_MENU: ElementId = ElementId(5);
pub const WELCOME_BTN: ElementId = ElementId(6);
pub const HERO_EMPIEZA: ElementId = ElementId(7);
pub const HERO_SERVICIOS: ElementId = ElementId(8);
pub const CAPT_AUDIO: ElementId = ElementId(9);
pub const CAPT_GUIA: ElementId = ElementId(10);
pub const SERV_GUIA: ElementId = ElementId(11);
pub const SERV_SESIONES: ElementId = ElementId(12);
pub const FORM_NAME: ElementId = ElementId(13);
pub const FORM_EMAIL: ElementId = ElementId(14);
pub const FORM_MESSAGE: ElementId = ElementId(15);
pub const FORM_SUBMIT: ElementId = ElementId(16);
pub const MAIL_LINK: ElementId = ElementId(17);
pub const SOCIAL_IG: ElementId = ElementId(18);
pub const SOCIAL_FB: ElementId = ElementId(19);

/// Appears only after a successful submission; not part of the startup
/// snapshot, so it is clickable but never bound for feedback.
pub const FORM_RESET: ElementId = ElementId(20);

const REGISTRY: &[PageElement] = &[
    PageElement {
        id: NAV_BRAND,
        kind: ElementKind::Link,
        label: "Sentidos con Vida",
    },
    PageElement {
        id: NAV_INICIO,
        kind: ElementKind::Link,
        label: "inicio",
    },
    PageElement {
        id: NAV_SERVICIOS,
        kind: ElementKind::Link,
        label: "servicios",
    },
    PageElement {
        id: NAV_SOBRE_MI,
        kind: ElementKind::Link,
        label: "sobre mí",
    },
    PageElement {
        id: NAV_CONTACTO,
        kind: ElementKind::Link,
        label: "contacto",
    },
    PageElement {
        id: NAV_MENU,
        kind: ElementKind::Button,
        label: "menú",
    },
    PageElement {
        id: WELCOME_BTN,
        kind: ElementKind::AudioHover,
        label: "♪ bienvenida",
    },
    PageElement {
        id: HERO_EMPIEZA,
        kind: ElementKind::Button,
        label: "Empieza ahora →",
    },
    PageElement {
        id: HERO_SERVICIOS,
        kind: ElementKind::Button,
        label: "Ver servicios",
    },
    PageElement {
        id: CAPT_AUDIO,
        kind: ElementKind::Button,
        label: "Descargar Audio →",
    },
    PageElement {
        id: CAPT_GUIA,
        kind: ElementKind::Button,
        label: "Descargar Guía →",
    },
    PageElement {
        id: SERV_GUIA,
        kind: ElementKind::Button,
        label: "Saber más sobre la Guía",
    },
    PageElement {
        id: SERV_SESIONES,
        kind: ElementKind::Button,
        label: "Agenda una llamada",
    },
    PageElement {
        id: FORM_NAME,
        kind: ElementKind::Input,
        label: "Nombre Completo",
    },
    PageElement {
        id: FORM_EMAIL,
        kind: ElementKind::Input,
        label: "Email",
    },
    PageElement {
        id: FORM_MESSAGE,
        kind: ElementKind::Input,
        label: "¿Qué sientes que necesitas hoy?",
    },
    PageElement {
        id: FORM_SUBMIT,
        kind: ElementKind::Button,
        label: "Enviar mensaje",
    },
    PageElement {
        id: MAIL_LINK,
        kind: ElementKind::Link,
        label: "sentidosconvida@gmail.com",
    },
    PageElement {
        id: SOCIAL_IG,
        kind: ElementKind::Button,
        label: "Instagram",
    },
    PageElement {
        id: SOCIAL_FB,
        kind: ElementKind::Button,
        label: "Facebook",
    },
];

/// The content-ready snapshot.
pub fn registry() -> &'static [PageElement] {
    REGISTRY
}

pub fn index_of(id: ElementId) -> Option<usize> {
    REGISTRY.iter().position(|e| e.id == id)
}

pub fn label_of(id: ElementId) -> &'static str {
    REGISTRY
        .iter()
        .find(|e| e.id == id)
        .map(|e| e.label)
        .unwrap_or("")
}

pub fn is_input(id: ElementId) -> bool {
    REGISTRY
        .iter()
        .any(|e| e.id == id && e.kind == ElementKind::Input)
}
