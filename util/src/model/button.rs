use serde::{ser::SerializeStruct, Serialize, Serializer};

use crate::{constants::ButtonStyle, emoji::PartialEmoji};

/// Button sending an interaction with its `custom_id` when clicked.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct InteractionButton {
    pub style: ButtonStyle,
    pub custom_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<PartialEmoji>,
    pub disabled: bool,
}

/// Button opening `url` when clicked. Its style is always [`ButtonStyle::Link`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct LinkButton {
    pub url: String,
    pub label: Option<String>,
    pub emoji: Option<PartialEmoji>,
    pub disabled: bool,
}

impl LinkButton {
    pub const fn style(&self) -> ButtonStyle {
        ButtonStyle::Link
    }
}

impl Serialize for LinkButton {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 3 + usize::from(self.label.is_some()) + usize::from(self.emoji.is_some());
        let mut state = serializer.serialize_struct("LinkButton", len)?;

        state.serialize_field("style", &self.style())?;
        state.serialize_field("url", &self.url)?;

        if let Some(label) = &self.label {
            state.serialize_field("label", label)?;
        }

        if let Some(emoji) = &self.emoji {
            state.serialize_field("emoji", emoji)?;
        }

        state.serialize_field("disabled", &self.disabled)?;

        state.end()
    }
}

/// Either kind of button, as produced by [`ButtonBuilder`].
///
/// [`ButtonBuilder`]: crate::builder::ButtonBuilder
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Button {
    Interaction(InteractionButton),
    Link(LinkButton),
}

impl Button {
    pub const fn style(&self) -> ButtonStyle {
        match self {
            Self::Interaction(button) => button.style,
            Self::Link(_) => ButtonStyle::Link,
        }
    }
}
