use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{state::CardState, CardError};

/// Host visible attribute names of the `my-card` element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttributeName {
    Title,
    Subtitle,
    Image,
    Details,
    Fancy,
}

impl AttributeName {
    pub const ALL: [AttributeName; 5] = [
        AttributeName::Title,
        AttributeName::Subtitle,
        AttributeName::Image,
        AttributeName::Details,
        AttributeName::Fancy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeName::Title => "title",
            AttributeName::Subtitle => "subtitle",
            AttributeName::Image => "image",
            AttributeName::Details => "details",
            AttributeName::Fancy => "fancy",
        }
    }
}

impl FromStr for AttributeName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "title" => AttributeName::Title,
            "subtitle" => AttributeName::Subtitle,
            "image" => AttributeName::Image,
            "details" => AttributeName::Details,
            "fancy" => AttributeName::Fancy,
            _ => return Err(()),
        })
    }
}

/// The attribute set a host page uses to configure a card.
///
/// Field names match the html attribute names so the JSON form of this struct
/// reads the same as the markup would.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardAttributes {
    pub title: String,
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub details: String,
    pub fancy: bool,
}

impl Default for CardAttributes {
    fn default() -> Self {
        CardState::default().into()
    }
}

impl From<CardState> for CardAttributes {
    fn from(state: CardState) -> Self {
        let CardState {
            title,
            subtitle,
            image_url,
            details,
            emphasized,
        } = state;
        Self {
            title,
            subtitle,
            image: image_url,
            details,
            fancy: emphasized,
        }
    }
}

impl From<CardAttributes> for CardState {
    fn from(attributes: CardAttributes) -> Self {
        let CardAttributes {
            title,
            subtitle,
            image,
            details,
            fancy,
        } = attributes;
        Self {
            title,
            subtitle,
            image_url: image,
            details,
            emphasized: fancy,
        }
    }
}

impl CardAttributes {
    pub fn from_json(json: &str) -> Result<Self, CardError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Attributes as they appear on the element. `fancy` is a boolean
    /// attribute, so it is only present (with an empty value) while set.
    pub fn to_attributes(&self) -> Vec<(AttributeName, String)> {
        let mut attributes = vec![
            (AttributeName::Title, self.title.clone()),
            (AttributeName::Subtitle, self.subtitle.clone()),
        ];
        if let Some(image) = &self.image {
            attributes.push((AttributeName::Image, image.clone()));
        }
        attributes.push((AttributeName::Details, self.details.clone()));
        if self.fancy {
            attributes.push((AttributeName::Fancy, String::new()));
        }
        attributes
    }

    /// Builds an attribute set from element attributes. Missing text
    /// attributes keep their defaults, a missing `fancy` means false and any
    /// present `fancy` means true regardless of its value.
    pub fn from_attributes<'a, I>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut parsed = CardAttributes::default();
        for (name, value) in attributes {
            match name.parse::<AttributeName>() {
                Ok(name) => parsed.set(name, Some(value)),
                Err(()) => debug!("ignoring unknown card attribute {name}"),
            }
        }
        parsed
    }

    /// Sets or removes a single attribute.
    pub fn set(&mut self, name: AttributeName, value: Option<&str>) {
        match name {
            AttributeName::Title => self.title = value.unwrap_or_default().to_string(),
            AttributeName::Subtitle => self.subtitle = value.unwrap_or_default().to_string(),
            AttributeName::Image => self.image = value.map(str::to_string),
            AttributeName::Details => self.details = value.unwrap_or_default().to_string(),
            AttributeName::Fancy => self.fancy = value.is_some(),
        }
    }
}
