use serde::{Deserialize, Serialize};

use crate::error::ComponentError;

/// Wire code identifying which kind of component an object is.
///
/// See <https://discord.com/developers/docs/interactions/message-components#component-object-component-types>.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ComponentType {
    ActionRow = 1,
    Button = 2,
    SelectMenu = 3,
    TextInput = 4,
}

impl ComponentType {
    /// Name of the kind, as used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ActionRow => "action row",
            Self::Button => "button",
            Self::SelectMenu => "select menu",
            Self::TextInput => "text input",
        }
    }
}

impl From<ComponentType> for u8 {
    fn from(kind: ComponentType) -> Self {
        kind as u8
    }
}

impl TryFrom<u8> for ComponentType {
    type Error = ComponentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::ActionRow,
            2 => Self::Button,
            3 => Self::SelectMenu,
            4 => Self::TextInput,
            value => {
                return Err(ComponentError::UnknownConstant {
                    kind: "component type",
                    value,
                })
            }
        })
    }
}

/// Style of a button.
///
/// Every style except [`ButtonStyle::Link`] sends an interaction when clicked,
/// a link button opens its url instead.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ButtonStyle {
    Primary = 1,
    Secondary = 2,
    Success = 3,
    Danger = 4,
    Link = 5,
}

impl ButtonStyle {
    pub const BLURPLE: Self = Self::Primary;
    pub const GREY: Self = Self::Secondary;
    pub const GREEN: Self = Self::Success;
    pub const RED: Self = Self::Danger;
    pub const URL: Self = Self::Link;

    pub const fn is_link(self) -> bool {
        matches!(self, Self::Link)
    }
}

impl From<ButtonStyle> for u8 {
    fn from(style: ButtonStyle) -> Self {
        style as u8
    }
}

impl TryFrom<u8> for ButtonStyle {
    type Error = ComponentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::Primary,
            2 => Self::Secondary,
            3 => Self::Success,
            4 => Self::Danger,
            5 => Self::Link,
            value => {
                return Err(ComponentError::UnknownConstant {
                    kind: "button style",
                    value,
                })
            }
        })
    }
}

/// Style of a text input, single line or multi line.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TextInputStyle {
    Short = 1,
    Paragraph = 2,
}

impl From<TextInputStyle> for u8 {
    fn from(style: TextInputStyle) -> Self {
        style as u8
    }
}

impl TryFrom<u8> for TextInputStyle {
    type Error = ComponentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Short),
            2 => Ok(Self::Paragraph),
            value => Err(ComponentError::UnknownConstant {
                kind: "text input style",
                value,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_code() {
        assert_eq!(serde_json::to_string(&ComponentType::SelectMenu).unwrap(), "3");
        assert_eq!(serde_json::to_string(&ButtonStyle::Link).unwrap(), "5");
        assert_eq!(serde_json::to_string(&TextInputStyle::Paragraph).unwrap(), "2");
    }

    #[test]
    fn colour_aliases() {
        assert_eq!(ButtonStyle::BLURPLE, ButtonStyle::Primary);
        assert_eq!(ButtonStyle::GREY, ButtonStyle::Secondary);
        assert_eq!(ButtonStyle::GREEN, ButtonStyle::Success);
        assert_eq!(ButtonStyle::RED, ButtonStyle::Danger);
        assert!(ButtonStyle::URL.is_link());
    }

    #[test]
    fn rejects_unknown_codes() {
        assert!(matches!(
            ButtonStyle::try_from(6),
            Err(ComponentError::UnknownConstant { value: 6, .. })
        ));
        assert!(TextInputStyle::try_from(0).is_err());
        assert!(serde_json::from_str::<ComponentType>("9").is_err());
        assert_eq!(
            serde_json::from_str::<ComponentType>("4").unwrap(),
            ComponentType::TextInput
        );
    }
}
