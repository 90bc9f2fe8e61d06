use std::str::FromStr;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Matches `<:name:id>` and `<a:name:id>`, the brackets being optional.
static CUSTOM_EMOJI: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<?(a)?:(.*):([0-9]{15,21})>?$").expect("custom emoji regex is valid"));

/// Minimal emoji descriptor sent over the wire in place of a full emoji object.
///
/// Unicode emoji have no id, so `id` is serialized as an explicit `null`.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PartialEmoji {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub animated: bool,
}

impl PartialEmoji {
    /// A built in unicode emoji.
    pub fn unicode(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            animated: false,
        }
    }

    /// A guild emoji, identified by its snowflake.
    pub fn custom(id: impl Into<String>, name: impl Into<String>, animated: bool) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            animated,
        }
    }

    pub const fn is_custom(&self) -> bool {
        self.id.is_some()
    }
}

/// How [`to_partial_emoji`] should read its input.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EmojiKind {
    /// The text is the unicode glyph itself.
    Default,
    /// The text is a fully qualified guild emoji, e.g. `<a:paws8:681748079778463796>`.
    Custom,
}

impl FromStr for EmojiKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "custom" => Ok(Self::Custom),
            other => Err(format!("unknown emoji kind `{}`", other)),
        }
    }
}

/// Convert an emoji string to a [`PartialEmoji`].
///
/// Custom emoji that do not match the `<(a)?:name:id>` form are treated as
/// default emoji instead.
///
/// ```
/// use component_helper::emoji::{to_partial_emoji, EmojiKind};
///
/// let emoji = to_partial_emoji("<a:paws8:681748079778463796>", EmojiKind::Custom);
/// assert_eq!(emoji.id.as_deref(), Some("681748079778463796"));
/// assert_eq!(emoji.name, "paws8");
/// assert!(emoji.animated);
/// ```
pub fn to_partial_emoji(text: &str, kind: EmojiKind) -> PartialEmoji {
    match kind {
        EmojiKind::Default => PartialEmoji::unicode(text),
        EmojiKind::Custom => match parse_custom(text) {
            Some(emoji) => emoji,
            None => {
                debug!("`{}` is not a custom emoji, using it as a default emoji", text);
                to_partial_emoji(text, EmojiKind::Default)
            }
        },
    }
}

fn parse_custom(text: &str) -> Option<PartialEmoji> {
    let captures = CUSTOM_EMOJI.captures(text)?;
    let name = captures.get(2).map(|m| m.as_str()).filter(|name| !name.is_empty())?;
    let id = captures.get(3)?.as_str();

    Some(PartialEmoji::custom(id, name, captures.get(1).is_some()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_emoji() {
        assert_eq!(
            to_partial_emoji("🐾", EmojiKind::Default),
            PartialEmoji {
                id: None,
                name: "🐾".into(),
                animated: false,
            }
        );
    }

    #[test]
    fn animated_custom_emoji() {
        assert_eq!(
            to_partial_emoji("<a:paws8:681748079778463796>", EmojiKind::Custom),
            PartialEmoji::custom("681748079778463796", "paws8", true)
        );
    }

    #[test]
    fn static_custom_emoji() {
        let emoji = to_partial_emoji("<:blurple_link:862112047558950912>", EmojiKind::Custom);

        assert_eq!(emoji.id.as_deref(), Some("862112047558950912"));
        assert_eq!(emoji.name, "blurple_link");
        assert!(!emoji.animated);
    }

    #[test]
    fn falls_back_to_default() {
        assert_eq!(
            to_partial_emoji("not-a-custom-emoji", EmojiKind::Custom),
            PartialEmoji::unicode("not-a-custom-emoji")
        );
        // id too short
        assert_eq!(
            to_partial_emoji("<:paws8:1234>", EmojiKind::Custom),
            PartialEmoji::unicode("<:paws8:1234>")
        );
        // empty name
        assert!(!to_partial_emoji("<::681748079778463796>", EmojiKind::Custom).is_custom());
    }

    #[test]
    fn id_serializes_as_null() {
        assert_eq!(
            serde_json::to_value(PartialEmoji::unicode("🐾")).unwrap(),
            json!({ "id": null, "name": "🐾", "animated": false })
        );
    }

    #[test]
    fn kind_from_str() {
        assert_eq!("default".parse::<EmojiKind>(), Ok(EmojiKind::Default));
        assert_eq!("custom".parse::<EmojiKind>(), Ok(EmojiKind::Custom));
        assert!("unicode".parse::<EmojiKind>().is_err());
    }
}
