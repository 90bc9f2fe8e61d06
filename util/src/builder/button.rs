use crate::{
    constants::ButtonStyle,
    emoji::PartialEmoji,
    error::ComponentError,
    model::{Button, InteractionButton, LinkButton},
};

#[derive(Clone, Debug)]
#[must_use = "builders have no effect if unused"]
pub struct ButtonBuilder {
    style: ButtonStyle,
    custom_id_or_url: String,
    label: Option<String>,
    emoji: Option<PartialEmoji>,
    disabled: bool,
}

impl ButtonBuilder {
    /// Create a new builder to construct a [`Button`].
    ///
    /// `custom_id_or_url` is the url of the button if `style` is
    /// [`ButtonStyle::Link`], otherwise its custom id.
    pub fn new(style: ButtonStyle, custom_id_or_url: impl Into<String>) -> Self {
        Self {
            style,
            custom_id_or_url: custom_id_or_url.into(),
            label: None,
            emoji: None,
            disabled: false,
        }
    }

    /// Consume the builder, returning a [`Button`].
    ///
    /// Fails if the custom id (or url, for link buttons) is empty.
    pub fn build(self) -> Result<Button, ComponentError> {
        if self.style.is_link() {
            if self.custom_id_or_url.is_empty() {
                return Err(ComponentError::MissingRequiredField {
                    component: "link button",
                    field: "url",
                });
            }

            return Ok(Button::Link(LinkButton {
                url: self.custom_id_or_url,
                label: self.label,
                emoji: self.emoji,
                disabled: self.disabled,
            }));
        }

        if self.custom_id_or_url.is_empty() {
            return Err(ComponentError::MissingRequiredField {
                component: "button",
                field: "custom_id",
            });
        }

        Ok(Button::Interaction(InteractionButton {
            style: self.style,
            custom_id: self.custom_id_or_url,
            label: self.label,
            emoji: self.emoji,
            disabled: self.disabled,
        }))
    }

    /// Change the style, the custom id or url is kept and reinterpreted.
    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = style;

        self
    }

    pub fn custom_id(mut self, custom_id: impl Into<String>) -> Self {
        self.custom_id_or_url = custom_id.into();

        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.custom_id_or_url = url.into();

        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());

        self
    }

    pub fn emoji(mut self, emoji: PartialEmoji) -> Self {
        self.emoji = Some(emoji);

        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;

        self
    }

    pub fn disable(self) -> Self {
        self.disabled(true)
    }

    pub fn enable(self) -> Self {
        self.disabled(false)
    }
}
