pub mod action_row;
pub mod button;
pub mod select_menu;
pub mod text_input;

pub use action_row::ActionRow;
pub use button::{Button, InteractionButton, LinkButton};
pub use select_menu::{SelectMenu, SelectMenuOption};
pub use text_input::TextInput;

use serde::{Serialize, Serializer};

use crate::{constants::ComponentType, error::ComponentError};

/// Any component that can be placed inside an [`ActionRow`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Component {
    InteractionButton(InteractionButton),
    LinkButton(LinkButton),
    SelectMenu(SelectMenu),
    TextInput(TextInput),
}

impl Component {
    pub const fn kind(&self) -> ComponentType {
        match self {
            Self::InteractionButton(_) | Self::LinkButton(_) => ComponentType::Button,
            Self::SelectMenu(_) => ComponentType::SelectMenu,
            Self::TextInput(_) => ComponentType::TextInput,
        }
    }

    /// Whether the component must be the only one in its row.
    pub const fn is_exclusive(&self) -> bool {
        matches!(self, Self::SelectMenu(_))
    }

    /// The developer defined id, link buttons have none.
    pub fn custom_id(&self) -> Option<&str> {
        match self {
            Self::InteractionButton(button) => Some(&button.custom_id),
            Self::LinkButton(_) => None,
            Self::SelectMenu(menu) => Some(&menu.custom_id),
            Self::TextInput(input) => Some(&input.custom_id),
        }
    }

    pub fn to_json(&self) -> Result<serde_json::Value, ComponentError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Prepends the numeric `type` tag to a component's own fields.
#[derive(Serialize)]
struct Tagged<'a, T> {
    #[serde(rename = "type")]
    kind: ComponentType,
    #[serde(flatten)]
    data: &'a T,
}

impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.kind();

        match self {
            Self::InteractionButton(data) => Tagged { kind, data }.serialize(serializer),
            Self::LinkButton(data) => Tagged { kind, data }.serialize(serializer),
            Self::SelectMenu(data) => Tagged { kind, data }.serialize(serializer),
            Self::TextInput(data) => Tagged { kind, data }.serialize(serializer),
        }
    }
}

impl From<Button> for Component {
    fn from(button: Button) -> Self {
        match button {
            Button::Interaction(button) => Self::InteractionButton(button),
            Button::Link(button) => Self::LinkButton(button),
        }
    }
}

impl From<InteractionButton> for Component {
    fn from(button: InteractionButton) -> Self {
        Self::InteractionButton(button)
    }
}

impl From<LinkButton> for Component {
    fn from(button: LinkButton) -> Self {
        Self::LinkButton(button)
    }
}

impl From<SelectMenu> for Component {
    fn from(menu: SelectMenu) -> Self {
        Self::SelectMenu(menu)
    }
}

impl From<TextInput> for Component {
    fn from(input: TextInput) -> Self {
        Self::TextInput(input)
    }
}
