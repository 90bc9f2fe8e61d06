use crate::{emoji::PartialEmoji, model::SelectMenuOption};

#[derive(Clone, Debug)]
#[must_use = "builders have no effect if unused"]
pub struct SelectMenuOptionBuilder(SelectMenuOption);

impl SelectMenuOptionBuilder {
    /// Create a new builder to construct a [`SelectMenuOption`].
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self(SelectMenuOption {
            label: label.into(),
            value: value.into(),
            description: None,
            emoji: None,
            default: None,
        })
    }

    /// Consume the builder, returning a [`SelectMenuOption`].
    #[allow(clippy::missing_const_for_fn)]
    pub fn build(self) -> SelectMenuOption {
        self.0
    }

    pub fn default(mut self, default: bool) -> Self {
        self.0.default = Some(default);

        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());

        self
    }

    pub fn emoji(mut self, emoji: PartialEmoji) -> Self {
        self.0.emoji = Some(emoji);

        self
    }
}

impl From<SelectMenuOptionBuilder> for SelectMenuOption {
    fn from(builder: SelectMenuOptionBuilder) -> Self {
        builder.build()
    }
}
