pub mod card;
pub mod toast;
pub mod toggle;
