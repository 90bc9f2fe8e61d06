use serde::{Deserialize, Serialize};

use crate::emoji::PartialEmoji;

/// Dropdown of options. A select menu always occupies a row on its own.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct SelectMenu {
    pub custom_id: String,
    pub options: Vec<SelectMenuOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_values: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_values: Option<u8>,
    pub disabled: bool,
}

/// One choice of a [`SelectMenu`].
///
/// See <https://discord.com/developers/docs/interactions/message-components#select-menu-object-select-option-structure>.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct SelectMenuOption {
    /// User facing name of the option.
    pub label: String,
    /// Developer defined value of the option.
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<PartialEmoji>,
    /// Render this option as selected by default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
}
