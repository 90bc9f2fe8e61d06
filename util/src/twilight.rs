//! Conversions into [`twilight_model`] types, for sending rows through
//! `twilight-http`.
//!
//! Text inputs have no twilight counterpart yet and are rejected.

use twilight_model::{
    application::component::{
        button::ButtonStyle as TwilightButtonStyle,
        select_menu::SelectMenuOption as TwilightSelectMenuOption, ActionRow as TwilightActionRow,
        Button as TwilightButton, Component as TwilightComponent,
        SelectMenu as TwilightSelectMenu,
    },
    channel::ReactionType,
    id::EmojiId,
};

use crate::{
    constants::{ButtonStyle, ComponentType},
    emoji::PartialEmoji,
    error::ComponentError,
    helper::ComponentHelper,
    model::{ActionRow, Component, SelectMenuOption},
};

impl From<ButtonStyle> for TwilightButtonStyle {
    fn from(style: ButtonStyle) -> Self {
        match style {
            ButtonStyle::Primary => Self::Primary,
            ButtonStyle::Secondary => Self::Secondary,
            ButtonStyle::Success => Self::Success,
            ButtonStyle::Danger => Self::Danger,
            ButtonStyle::Link => Self::Link,
        }
    }
}

impl TryFrom<PartialEmoji> for ReactionType {
    type Error = ComponentError;

    fn try_from(emoji: PartialEmoji) -> Result<Self, Self::Error> {
        let id = match emoji.id {
            Some(id) => id,
            None => return Ok(Self::Unicode { name: emoji.name }),
        };

        let parsed = id
            .parse::<u64>()
            .ok()
            .and_then(EmojiId::new)
            .ok_or(ComponentError::InvalidEmojiId(id))?;

        Ok(Self::Custom {
            animated: emoji.animated,
            id: parsed,
            name: Some(emoji.name),
        })
    }
}

fn reaction(emoji: Option<PartialEmoji>) -> Result<Option<ReactionType>, ComponentError> {
    emoji.map(ReactionType::try_from).transpose()
}

impl TryFrom<SelectMenuOption> for TwilightSelectMenuOption {
    type Error = ComponentError;

    fn try_from(option: SelectMenuOption) -> Result<Self, Self::Error> {
        Ok(Self {
            default: option.default.unwrap_or(false),
            description: option.description,
            emoji: reaction(option.emoji)?,
            label: option.label,
            value: option.value,
        })
    }
}

impl TryFrom<Component> for TwilightComponent {
    type Error = ComponentError;

    fn try_from(component: Component) -> Result<Self, Self::Error> {
        Ok(match component {
            Component::InteractionButton(button) => Self::Button(TwilightButton {
                style: button.style.into(),
                emoji: reaction(button.emoji)?,
                label: button.label,
                custom_id: Some(button.custom_id),
                url: None,
                disabled: button.disabled,
            }),
            Component::LinkButton(button) => Self::Button(TwilightButton {
                style: TwilightButtonStyle::Link,
                emoji: reaction(button.emoji)?,
                label: button.label,
                custom_id: None,
                url: Some(button.url),
                disabled: button.disabled,
            }),
            Component::SelectMenu(menu) => Self::SelectMenu(TwilightSelectMenu {
                custom_id: menu.custom_id,
                disabled: menu.disabled,
                max_values: menu.max_values,
                min_values: menu.min_values,
                options: menu
                    .options
                    .into_iter()
                    .map(TwilightSelectMenuOption::try_from)
                    .collect::<Result<_, _>>()?,
                placeholder: menu.placeholder,
            }),
            Component::TextInput(_) => {
                return Err(ComponentError::UnsupportedComponent(
                    ComponentType::TextInput,
                ))
            }
        })
    }
}

impl TryFrom<ActionRow> for TwilightComponent {
    type Error = ComponentError;

    fn try_from(row: ActionRow) -> Result<Self, Self::Error> {
        let components = row
            .into_components()
            .into_iter()
            .map(TwilightComponent::try_from)
            .collect::<Result<_, _>>()?;

        Ok(Self::ActionRow(TwilightActionRow { components }))
    }
}

impl ComponentHelper {
    /// Prune empty rows and convert the rest into twilight action rows.
    pub fn to_twilight(&mut self) -> Result<Vec<TwilightComponent>, ComponentError> {
        self.remove_empty_rows()
            .rows()
            .iter()
            .cloned()
            .map(TwilightComponent::try_from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        builder::{ButtonBuilder, SelectMenuBuilder, SelectMenuOptionBuilder, TextInputBuilder},
        constants::TextInputStyle,
        emoji::{to_partial_emoji, EmojiKind},
    };

    #[test]
    fn unicode_emoji() {
        assert_eq!(
            ReactionType::try_from(PartialEmoji::unicode("🐾")).unwrap(),
            ReactionType::Unicode { name: "🐾".into() }
        );
    }

    #[test]
    fn custom_emoji() {
        let emoji = to_partial_emoji("<a:paws8:681748079778463796>", EmojiKind::Custom);

        assert_eq!(
            ReactionType::try_from(emoji).unwrap(),
            ReactionType::Custom {
                animated: true,
                id: EmojiId::new(681748079778463796).unwrap(),
                name: Some("paws8".into()),
            }
        );
    }

    #[test]
    fn bad_emoji_id() {
        assert!(matches!(
            ReactionType::try_from(PartialEmoji::custom("0", "zero", false)),
            Err(ComponentError::InvalidEmojiId(id)) if id == "0"
        ));
    }

    #[test]
    fn helper_rows() {
        let mut helper = ComponentHelper::new();
        helper
            .add(
                ButtonBuilder::new(ButtonStyle::Link, "https://itoh.at/web")
                    .label("web")
                    .build()
                    .unwrap(),
            )
            .add(
                SelectMenuBuilder::new("menu")
                    .add_option(SelectMenuOptionBuilder::new("one", "1"))
                    .build()
                    .unwrap(),
            );

        let rows = helper.to_twilight().unwrap();
        assert_eq!(rows.len(), 2);

        match &rows[0] {
            TwilightComponent::ActionRow(row) => match row.components.as_slice() {
                [TwilightComponent::Button(button)] => {
                    assert_eq!(button.style, TwilightButtonStyle::Link);
                    assert_eq!(button.url.as_deref(), Some("https://itoh.at/web"));
                    assert_eq!(button.custom_id, None);
                }
                other => panic!("unexpected components {:?}", other),
            },
            other => panic!("expected an action row, got {:?}", other),
        }

        match &rows[1] {
            TwilightComponent::ActionRow(row) => match row.components.as_slice() {
                [TwilightComponent::SelectMenu(menu)] => {
                    assert_eq!(menu.options.len(), 1);
                    assert!(!menu.options[0].default);
                }
                other => panic!("unexpected components {:?}", other),
            },
            other => panic!("expected an action row, got {:?}", other),
        }
    }

    #[test]
    fn text_inputs_are_unsupported() {
        let mut helper = ComponentHelper::new();
        helper.add(
            TextInputBuilder::new(TextInputStyle::Short, "Name", "name")
                .build()
                .unwrap(),
        );

        assert!(matches!(
            helper.to_twilight(),
            Err(ComponentError::UnsupportedComponent(ComponentType::TextInput))
        ));
    }
}
