use crate::{
    emoji::PartialEmoji,
    error::ComponentError,
    model::{SelectMenu, SelectMenuOption},
};

#[derive(Clone, Debug)]
#[must_use = "builders have no effect if unused"]
pub struct SelectMenuBuilder(SelectMenu);

impl SelectMenuBuilder {
    /// Create a new builder to construct a [`SelectMenu`].
    pub fn new(custom_id: impl Into<String>) -> Self {
        Self(SelectMenu {
            custom_id: custom_id.into(),
            options: Vec::new(),
            placeholder: None,
            min_values: None,
            max_values: None,
            disabled: false,
        })
    }

    /// Consume the builder, returning a [`SelectMenu`].
    ///
    /// Fails if the custom id is empty.
    pub fn build(self) -> Result<SelectMenu, ComponentError> {
        if self.0.custom_id.is_empty() {
            return Err(ComponentError::MissingRequiredField {
                component: "select menu",
                field: "custom_id",
            });
        }

        Ok(self.0)
    }

    pub fn custom_id(mut self, custom_id: impl Into<String>) -> Self {
        self.0.custom_id = custom_id.into();

        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.0.placeholder = Some(placeholder.into());

        self
    }

    /// Set the minimum and maximum number of selected values. `None` leaves
    /// the current bound untouched.
    pub fn values(mut self, min: Option<u8>, max: Option<u8>) -> Self {
        if min.is_some() {
            self.0.min_values = min;
        }

        if max.is_some() {
            self.0.max_values = max;
        }

        self
    }

    pub fn min_values(self, min_values: u8) -> Self {
        self.values(Some(min_values), None)
    }

    pub fn max_values(self, max_values: u8) -> Self {
        self.values(None, Some(max_values))
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.0.disabled = disabled;

        self
    }

    pub fn disable(self) -> Self {
        self.disabled(true)
    }

    pub fn enable(self) -> Self {
        self.disabled(false)
    }

    /// Add an option built from its parts.
    pub fn option(
        self,
        label: impl Into<String>,
        value: impl Into<String>,
        description: Option<String>,
        emoji: Option<PartialEmoji>,
        default: Option<bool>,
    ) -> Self {
        self.add_option(SelectMenuOption {
            label: label.into(),
            value: value.into(),
            description,
            emoji,
            default,
        })
    }

    pub fn add_option(mut self, option: impl Into<SelectMenuOption>) -> Self {
        self.0.options.push(option.into());

        self
    }

    pub fn add_options<I>(mut self, options: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SelectMenuOption>,
    {
        self.0.options.extend(options.into_iter().map(Into::into));

        self
    }

    pub fn clear_options(mut self) -> Self {
        self.0.options.clear();

        self
    }
}
