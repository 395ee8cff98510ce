use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_TITLE: &str = "PSU Card";
pub(crate) const DEFAULT_SUBTITLE: &str = "A beautifully styled card which is Penn State themed.";
pub(crate) const DEFAULT_IMAGE: &str =
    "https://brand.psu.edu/images/backgrounds/veritcal-1-mark_registered.png";
pub(crate) const DEFAULT_DETAILS: &str =
    "This is an example of a card that was updated as per your request.";

/// Everything a card displays, plus the emphasis flag that also owns the
/// open state of the details panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardState {
    pub title: String,
    pub subtitle: String,
    /// An empty url renders the same as no url.
    pub image_url: Option<String>,
    pub details: String,
    pub emphasized: bool,
}

impl Default for CardState {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
            image_url: Some(DEFAULT_IMAGE.to_string()),
            details: DEFAULT_DETAILS.to_string(),
            emphasized: false,
        }
    }
}

impl CardState {
    pub(crate) fn image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }
}
