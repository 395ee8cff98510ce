mod attributes;
mod card;
mod error;
mod state;

pub mod theme;
pub mod view;

pub use attributes::{AttributeName, CardAttributes};
pub use card::{
    ActionRequested, Card, CardEvent, ChangeOrigin, EmphasisChange, ListenerId, ToggleOutcome,
};
pub use error::CardError;
pub use state::CardState;
pub use theme::CardTheme;
pub use view::CardView;
