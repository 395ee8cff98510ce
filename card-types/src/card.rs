use std::{fmt, sync::Arc};

use tracing::{debug, trace};

use crate::{view::CardView, AttributeName, CardAttributes, CardState};

pub const ACTION_MESSAGE: &str = "Learn more about this Card!";

/// Where a change to the emphasis flag came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeOrigin {
    /// The host page set the `fancy` attribute.
    Host,
    /// The user opened or closed the details panel.
    User,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmphasisChange {
    pub from: bool,
    pub to: bool,
    pub origin: ChangeOrigin,
}

/// Raised when the card's call to action is activated. The host decides what
/// "learn more" means.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionRequested {
    pub message: String,
}

impl Default for ActionRequested {
    fn default() -> Self {
        Self {
            message: ACTION_MESSAGE.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardEvent {
    EmphasisChanged(EmphasisChange),
    /// The panel was moved to match the emphasis flag.
    PanelReconciled { open: bool },
    ActionRequested(ActionRequested),
}

/// Result of feeding a panel toggle notification into the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The notification was caused by our own reconciliation.
    Echo,
    /// The panel already agreed with the emphasis flag.
    Unchanged,
    /// The user changed the emphasis flag through the panel.
    Proposed(EmphasisChange),
}

impl ToggleOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, ToggleOutcome::Proposed(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Listener = Arc<dyn Fn(&CardEvent) + Send + Sync>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Panel {
    open: bool,
    /// Set by [`Card::reconcile`] until the panel reports the state we pushed.
    pending_echo: Option<bool>,
}

/// A single card widget.
///
/// `emphasized` owns the truth, the details panel is a view of it. The panel
/// may propose a new value through [`Card::panel_toggled`], and every change
/// to `emphasized` is followed by [`Card::reconcile`] before the method
/// returns.
#[derive(Default)]
pub struct Card {
    state: CardState,
    panel: Panel,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Card")
            .field("state", &self.state)
            .field("panel", &self.panel)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl From<CardState> for Card {
    fn from(state: CardState) -> Self {
        Card::new(state)
    }
}

impl From<CardAttributes> for Card {
    fn from(attributes: CardAttributes) -> Self {
        Card::new(attributes.into())
    }
}

impl Card {
    pub const TAG: &'static str = "my-card";

    pub fn new(state: CardState) -> Self {
        let panel = Panel {
            open: state.emphasized,
            pending_echo: None,
        };
        Self {
            state,
            panel,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn state(&self) -> &CardState {
        &self.state
    }

    pub fn emphasized(&self) -> bool {
        self.state.emphasized
    }

    pub fn panel_open(&self) -> bool {
        self.panel.open
    }

    pub fn attributes(&self) -> CardAttributes {
        self.state.clone().into()
    }

    pub fn render(&self) -> CardView {
        CardView::new(&self.state, self.panel.open)
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&CardEvent) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Arc::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener, _)| *listener != id);
        before != self.listeners.len()
    }

    fn emit(&self, event: CardEvent) {
        trace!(?event, "card event");
        for (_, listener) in &self.listeners {
            listener(&event);
        }
    }

    /// Host transition. Returns false when `emphasized` already had this value.
    pub fn set_emphasized(&mut self, emphasized: bool) -> bool {
        if self.state.emphasized == emphasized {
            return false;
        }
        let change = EmphasisChange {
            from: self.state.emphasized,
            to: emphasized,
            origin: ChangeOrigin::Host,
        };
        debug!(?change, "host set emphasis");
        self.state.emphasized = emphasized;
        self.emit(CardEvent::EmphasisChanged(change));
        self.reconcile();
        true
    }

    /// Called with the panel's open state whenever it reports a toggle.
    pub fn panel_toggled(&mut self, open: bool) -> ToggleOutcome {
        if self.panel.pending_echo.take() == Some(open) {
            self.panel.open = open;
            trace!(open, "swallowed reconciliation echo");
            return ToggleOutcome::Echo;
        }
        self.panel.open = open;
        if self.state.emphasized == open {
            return ToggleOutcome::Unchanged;
        }
        let change = EmphasisChange {
            from: self.state.emphasized,
            to: open,
            origin: ChangeOrigin::User,
        };
        debug!(?change, "user toggled details");
        self.state.emphasized = open;
        self.emit(CardEvent::EmphasisChanged(change));
        self.reconcile();
        ToggleOutcome::Proposed(change)
    }

    /// Forces the panel to match `emphasized`. Returns true if the panel moved.
    pub fn reconcile(&mut self) -> bool {
        let target = self.state.emphasized;
        if self.panel.open == target {
            return false;
        }
        self.panel.open = target;
        self.panel.pending_echo = Some(target);
        self.emit(CardEvent::PanelReconciled { open: target });
        true
    }

    pub fn request_action(&self) -> ActionRequested {
        let action = ActionRequested::default();
        self.emit(CardEvent::ActionRequested(action.clone()));
        action
    }

    /// Applies one host attribute. `None` removes it.
    pub fn apply_attribute(&mut self, name: AttributeName, value: Option<&str>) -> bool {
        let mut attributes = self.attributes();
        attributes.set(name, value);
        self.apply_attributes(None, &attributes)
    }

    /// Applies the fields of `next` that differ from `previous`, every field
    /// when there is no previous snapshot. Returns true if anything changed.
    pub fn apply_attributes(
        &mut self,
        previous: Option<&CardAttributes>,
        next: &CardAttributes,
    ) -> bool {
        fn differs<T: PartialEq>(
            previous: Option<&CardAttributes>,
            field: impl Fn(&CardAttributes) -> &T,
            next: &CardAttributes,
        ) -> bool {
            previous.map_or(true, |previous| field(previous) != field(next))
        }

        let mut changed = false;
        if differs(previous, |a| &a.title, next) && self.state.title != next.title {
            self.state.title = next.title.clone();
            changed = true;
        }
        if differs(previous, |a| &a.subtitle, next) && self.state.subtitle != next.subtitle {
            self.state.subtitle = next.subtitle.clone();
            changed = true;
        }
        if differs(previous, |a| &a.image, next) && self.state.image_url != next.image {
            self.state.image_url = next.image.clone();
            changed = true;
        }
        if differs(previous, |a| &a.details, next) && self.state.details != next.details {
            self.state.details = next.details.clone();
            changed = true;
        }
        if differs(previous, |a| &a.fancy, next) {
            changed |= self.set_emphasized(next.fancy);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    fn recorded(card: &mut Card) -> Arc<Mutex<Vec<CardEvent>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        card.subscribe(move |event| sink.lock().unwrap().push(event.clone()));
        events
    }

    #[test]
    fn default_card_is_closed() {
        let card = Card::default();
        assert!(!card.emphasized());
        assert!(!card.panel_open());
        let view = card.render();
        assert!(!view.fancy);
        assert!(!view.body.panel.open);
        assert_eq!(view.header.title, "PSU Card");
        assert_eq!(view.footer.button_label, "Learn More");
    }

    #[test]
    fn host_emphasis_opens_panel() {
        for value in [true, false] {
            let mut card = Card::new(CardState {
                emphasized: !value,
                ..Default::default()
            });
            assert!(card.set_emphasized(value));
            assert_eq!(card.panel_open(), value);
            assert_eq!(card.render().body.panel.open, value);
        }
    }

    #[test]
    fn user_toggle_sets_emphasis() {
        let mut card = Card::default();
        let events = recorded(&mut card);

        let outcome = card.panel_toggled(true);
        assert_eq!(
            outcome,
            ToggleOutcome::Proposed(EmphasisChange {
                from: false,
                to: true,
                origin: ChangeOrigin::User,
            })
        );
        assert!(card.emphasized());
        assert!(card.panel_open());

        assert!(card.panel_toggled(false).changed());
        assert!(!card.emphasized());

        // the panel already moved itself, nothing to reconcile
        let events = events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert!(events
            .iter()
            .all(|event| matches!(event, CardEvent::EmphasisChanged(_))));
    }

    #[test]
    fn setting_the_same_value_is_a_no_op() {
        let mut card = Card::default();
        let events = recorded(&mut card);
        assert!(!card.set_emphasized(false));
        assert!(!card.reconcile());

        assert!(card.set_emphasized(true));
        assert!(!card.set_emphasized(true));
        assert!(!card.reconcile());
        assert_eq!(
            *events.lock().unwrap(),
            vec![
                CardEvent::EmphasisChanged(EmphasisChange {
                    from: false,
                    to: true,
                    origin: ChangeOrigin::Host,
                }),
                CardEvent::PanelReconciled { open: true },
            ]
        );
    }

    #[test]
    fn reconciliation_echo_does_not_reenter() {
        let mut card = Card::default();
        let events = recorded(&mut card);
        card.set_emphasized(true);
        // the panel reports the toggle caused by reconciliation
        assert_eq!(card.panel_toggled(true), ToggleOutcome::Echo);
        assert!(card.emphasized());
        assert_eq!(events.lock().unwrap().len(), 2);

        // a later genuine toggle goes through the user path
        assert!(card.panel_toggled(false).changed());
        assert!(!card.emphasized());
    }

    #[test]
    fn stale_echo_is_dropped_by_user_toggle() {
        let mut card = Card::default();
        card.set_emphasized(true);
        // user closes before the echo arrives
        assert!(card.panel_toggled(false).changed());
        assert!(!card.emphasized());
        assert!(!card.panel_open());
        assert!(card.panel_toggled(true).changed());
        assert!(card.emphasized());
    }

    #[test]
    fn panel_round_trip() {
        let mut card = Card::default();
        card.panel_toggled(true);
        assert!(card.emphasized());
        card.panel_toggled(false);
        assert!(!card.emphasized());
    }

    #[test]
    fn action_fires_once_without_mutation() {
        let mut card = Card::default();
        let events = recorded(&mut card);
        let before = card.state().clone();
        let action = card.request_action();
        assert_eq!(action.message, "Learn more about this Card!");
        assert_eq!(card.state(), &before);
        assert_eq!(
            *events.lock().unwrap(),
            vec![CardEvent::ActionRequested(action)]
        );
    }

    #[test]
    fn unsubscribe_stops_events() {
        let mut card = Card::default();
        let events = Arc::new(Mutex::new(0));
        let sink = events.clone();
        let id = card.subscribe(move |_| *sink.lock().unwrap() += 1);
        card.request_action();
        assert!(card.unsubscribe(id));
        assert!(!card.unsubscribe(id));
        card.request_action();
        assert_eq!(*events.lock().unwrap(), 1);
    }

    #[test]
    fn image_rendering() {
        let card = Card::default();
        let view = card.render();
        assert_eq!(view.image_count(), 1);
        let image = view.image.unwrap();
        assert_eq!(image.alt, "PSU Card");
        assert!(image.src.starts_with("https://brand.psu.edu/"));

        for image_url in [None, Some(String::new())] {
            let card = Card::new(CardState {
                image_url,
                ..Default::default()
            });
            assert_eq!(card.render().image_count(), 0);
        }
    }

    #[test]
    fn empty_strings_render() {
        let card = Card::new(CardState {
            title: String::new(),
            subtitle: String::new(),
            image_url: None,
            details: String::new(),
            emphasized: true,
        });
        let view = card.render();
        assert_eq!(view.header.title, "");
        assert!(view.body.panel.open);
        assert_eq!(view.body.panel.fallback, "No additional details provided.");
    }

    #[test]
    fn host_attributes_only_apply_changes() {
        let mut card = Card::default();
        let first = CardAttributes::default();
        card.panel_toggled(true);

        // a title change must not drag the stale fancy=false along with it
        let second = CardAttributes {
            title: "Beaver Stadium".to_string(),
            ..first.clone()
        };
        assert!(card.apply_attributes(Some(&first), &second));
        assert_eq!(card.state().title, "Beaver Stadium");
        assert!(card.emphasized());
        assert!(card.panel_open());

        let third = CardAttributes {
            fancy: true,
            ..second.clone()
        };
        // already emphasized by the user
        assert!(!card.apply_attributes(Some(&second), &third));

        let fourth = CardAttributes {
            fancy: false,
            ..third.clone()
        };
        assert!(card.apply_attributes(Some(&third), &fourth));
        assert!(!card.panel_open());
    }

    #[test]
    fn single_attribute_updates() {
        let mut card = Card::default();
        assert!(card.apply_attribute(AttributeName::Fancy, Some("")));
        assert!(card.panel_open());
        assert!(card.attributes().fancy);
        assert!(card.apply_attribute(AttributeName::Image, None));
        assert_eq!(card.render().image_count(), 0);
        assert!(!card.apply_attribute(AttributeName::Fancy, Some("")));
        assert!(card.apply_attribute(AttributeName::Fancy, None));
        assert!(!card.emphasized());
    }
}
