//! The visual tree of a card, independent of any ui framework.
use crate::CardState;

pub const DETAILS_SUMMARY: &str = "Details";
pub const NO_DETAILS_FALLBACK: &str = "No additional details provided.";
pub const ACTION_LABEL: &str = "Learn More";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub fancy: bool,
    pub image: Option<ImageView>,
    pub header: HeaderView,
    pub body: BodyView,
    pub footer: FooterView,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageView {
    pub src: String,
    /// The card title doubles as the accessible description.
    pub alt: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderView {
    pub title: String,
    pub subtitle: String,
}

/// Host content for the unnamed slot is placed between `details` and `panel`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BodyView {
    pub details: String,
    pub panel: PanelView,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelView {
    pub summary: &'static str,
    pub open: bool,
    /// Shown when the host fills no `details` slot.
    pub fallback: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FooterView {
    pub button_label: &'static str,
}

impl CardView {
    pub(crate) fn new(state: &CardState, panel_open: bool) -> Self {
        Self {
            fancy: state.emphasized,
            image: state.image().map(|src| ImageView {
                src: src.to_string(),
                alt: state.title.clone(),
            }),
            header: HeaderView {
                title: state.title.clone(),
                subtitle: state.subtitle.clone(),
            },
            body: BodyView {
                details: state.details.clone(),
                panel: PanelView {
                    summary: DETAILS_SUMMARY,
                    open: panel_open,
                    fallback: NO_DETAILS_FALLBACK,
                },
            },
            footer: FooterView {
                button_label: ACTION_LABEL,
            },
        }
    }

    pub fn image_count(&self) -> usize {
        usize::from(self.image.is_some())
    }
}
