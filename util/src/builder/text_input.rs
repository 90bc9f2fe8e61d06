use crate::{constants::TextInputStyle, error::ComponentError, model::TextInput};

#[derive(Clone, Debug)]
#[must_use = "builders have no effect if unused"]
pub struct TextInputBuilder(TextInput);

impl TextInputBuilder {
    /// Create a new builder to construct a [`TextInput`].
    pub fn new(
        style: TextInputStyle,
        label: impl Into<String>,
        custom_id: impl Into<String>,
    ) -> Self {
        Self(TextInput {
            custom_id: custom_id.into(),
            style,
            label: label.into(),
            min_length: None,
            max_length: None,
            required: None,
            value: None,
            placeholder: None,
        })
    }

    /// Consume the builder, returning a [`TextInput`].
    ///
    /// Fails if the label or the custom id is empty.
    pub fn build(self) -> Result<TextInput, ComponentError> {
        let missing = if self.0.label.is_empty() {
            Some("label")
        } else if self.0.custom_id.is_empty() {
            Some("custom_id")
        } else {
            None
        };

        match missing {
            Some(field) => Err(ComponentError::MissingRequiredField {
                component: "text input",
                field,
            }),
            None => Ok(self.0),
        }
    }

    pub fn style(mut self, style: TextInputStyle) -> Self {
        self.0.style = style;

        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.0.label = label.into();

        self
    }

    pub fn custom_id(mut self, custom_id: impl Into<String>) -> Self {
        self.0.custom_id = custom_id.into();

        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.0.placeholder = Some(placeholder.into());

        self
    }

    /// Pre-filled value of the input.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.0.value = Some(value.into());

        self
    }

    /// Set the minimum and maximum input length. `None` leaves the current
    /// bound untouched.
    pub fn length(mut self, min: Option<u16>, max: Option<u16>) -> Self {
        if min.is_some() {
            self.0.min_length = min;
        }

        if max.is_some() {
            self.0.max_length = max;
        }

        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.0.required = Some(required);

        self
    }

    pub fn optional(self) -> Self {
        self.required(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds() {
        let input = TextInputBuilder::new(TextInputStyle::Short, "Name", "name")
            .placeholder("Jane")
            .length(Some(2), None)
            .length(None, Some(32))
            .optional()
            .build()
            .unwrap();

        assert_eq!(input.min_length, Some(2));
        assert_eq!(input.max_length, Some(32));
        assert_eq!(input.required, Some(false));
        assert_eq!(input.placeholder.as_deref(), Some("Jane"));
        assert_eq!(input.value, None);
    }

    #[test]
    fn missing_fields() {
        assert!(matches!(
            TextInputBuilder::new(TextInputStyle::Short, "", "name").build(),
            Err(ComponentError::MissingRequiredField { field: "label", .. })
        ));
        assert!(matches!(
            TextInputBuilder::new(TextInputStyle::Paragraph, "Name", "").build(),
            Err(ComponentError::MissingRequiredField { field: "custom_id", .. })
        ));
    }
}
