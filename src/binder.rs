//! Hover and focus wiring over the page's interactive elements.

use std::collections::HashSet;

use crate::config::FeedbackConfig;
use crate::engine::scheduler::ToneScheduler;
use crate::tone::ToneSpec;

/// Stable identity of a page element, assigned by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u32);

/// What kind of page node an element is.
///
/// Only links, buttons, and audio-hover-marked elements receive feedback
/// tones. Inputs are focusable but stay silent - they are outside the
/// selector, not forgotten by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Link,
    Button,
    Input,
    /// Explicitly marked for hover audio by the page.
    AudioHover,
}

impl ElementKind {
    fn qualifies(self) -> bool {
        matches!(
            self,
            ElementKind::Link | ElementKind::Button | ElementKind::AudioHover
        )
    }
}

/// Static hover/focus wiring over a snapshot of page elements.
///
/// The snapshot is taken once, when the page signals content ready.
/// Elements that appear later are not retroactively bound - that is the
/// contract, not an oversight.
pub struct InteractionBinder {
    bound: HashSet<ElementId>,
    hover_tone: ToneSpec,
    focus_tone: ToneSpec,
}

impl InteractionBinder {
    pub fn bind<I>(elements: I, config: &FeedbackConfig) -> Self
    where
        I: IntoIterator<Item = (ElementId, ElementKind)>,
    {
        let bound: HashSet<ElementId> = elements
            .into_iter()
            .filter(|&(_, kind)| kind.qualifies())
            .map(|(id, _)| id)
            .collect();

        log::debug!("interaction binder wired {} elements", bound.len());

        Self {
            bound,
            hover_tone: config.hover_tone,
            focus_tone: config.focus_tone,
        }
    }

    pub fn is_bound(&self, id: ElementId) -> bool {
        self.bound.contains(&id)
    }

    /// Pointer entered an element: play the hover texture if it is bound.
    pub fn pointer_enter(&self, id: ElementId, scheduler: &mut ToneScheduler) {
        if self.is_bound(id) {
            scheduler.play(self.hover_tone);
        }
    }

    /// An element received focus: play the focus texture if it is bound.
    pub fn focus(&self, id: ElementId, scheduler: &mut ToneScheduler) {
        if self.is_bound(id) {
            scheduler.play(self.focus_tone);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binder_of(kinds: &[(u32, ElementKind)]) -> InteractionBinder {
        InteractionBinder::bind(
            kinds.iter().map(|&(id, kind)| (ElementId(id), kind)),
            &FeedbackConfig::default(),
        )
    }

    #[test]
    fn binds_links_buttons_and_marked_elements() {
        let binder = binder_of(&[
            (0, ElementKind::Link),
            (1, ElementKind::Button),
            (2, ElementKind::AudioHover),
            (3, ElementKind::Input),
        ]);

        assert!(binder.is_bound(ElementId(0)));
        assert!(binder.is_bound(ElementId(1)));
        assert!(binder.is_bound(ElementId(2)));
        assert!(!binder.is_bound(ElementId(3)), "inputs stay silent");
    }

    #[test]
    fn snapshot_is_not_retroactive() {
        let binder = binder_of(&[(0, ElementKind::Button)]);
        assert!(
            !binder.is_bound(ElementId(7)),
            "elements that appear after bind time stay unbound"
        );
    }
}
