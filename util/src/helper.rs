use log::{debug, trace};

use crate::{
    builder::{ButtonBuilder, SelectMenuBuilder, TextInputBuilder},
    config::{HelperConfig, RowCapacity},
    constants::{ButtonStyle, TextInputStyle},
    emoji::PartialEmoji,
    error::ComponentError,
    model::{ActionRow, Component, SelectMenuOption},
};

/// Lays components out into [`ActionRow`]s.
///
/// Components are placed greedily in the order they are added: a button or
/// text input joins the current row until it holds `capacity` components,
/// a select menu always gets a row of its own. A placed component never moves.
///
/// ```
/// use component_helper::{constants::ButtonStyle, ComponentHelper};
///
/// let mut helper = ComponentHelper::new();
/// for i in 0..6 {
///     helper.add_interaction_button(ButtonStyle::Primary, format!("button-{}", i), None, None, false)?;
/// }
///
/// let rows = helper.export()?;
/// assert_eq!(rows.len(), 2);
/// # Ok::<(), component_helper::ComponentError>(())
/// ```
#[derive(Clone, Debug, Default)]
#[must_use = "the helper has no effect unless its rows are exported"]
pub struct ComponentHelper {
    rows: Vec<ActionRow>,
    capacity: RowCapacity,
    /// Index of the row accepting new components, `None` before the first row exists.
    cursor: Option<usize>,
}

impl ComponentHelper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: RowCapacity) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    pub fn from_config(config: &HelperConfig) -> Self {
        Self::with_capacity(config.row_capacity)
    }

    pub const fn capacity(&self) -> RowCapacity {
        self.capacity
    }

    /// Change how many components fit into a row. Rows that already exist
    /// are not repacked.
    pub fn set_capacity(&mut self, capacity: u8) -> Result<&mut Self, ComponentError> {
        self.capacity = RowCapacity::new(capacity)?;
        debug!("row capacity set to {}", capacity);

        Ok(self)
    }

    pub const fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn rows(&self) -> &[ActionRow] {
        &self.rows
    }

    /// Start a new row containing `components`, which becomes the current row.
    ///
    /// The components are put into the row as they are, without checking the
    /// row capacity.
    pub fn open_new_row<I>(&mut self, components: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Component>,
    {
        let mut row = ActionRow::new();
        row.add_components(components);

        self.rows.push(row);
        self.cursor = Some(self.rows.len() - 1);

        self
    }

    /// The row accepting new components, created if it does not exist yet.
    pub fn current_row(&mut self) -> &ActionRow {
        self.ensure_current_row()
    }

    fn ensure_current_row(&mut self) -> &mut ActionRow {
        let index = match self.cursor {
            Some(index) if index < self.rows.len() => index,
            _ => {
                self.rows.push(ActionRow::new());
                let index = self.rows.len() - 1;
                self.cursor = Some(index);

                index
            }
        };

        &mut self.rows[index]
    }

    /// Place a component into the current row or a new one.
    pub fn add(&mut self, component: impl Into<Component>) -> &mut Self {
        let component = component.into();
        let capacity = usize::from(self.capacity);
        let current = self.ensure_current_row();

        if component.is_exclusive() {
            if current.is_empty() {
                trace!("{} takes the empty current row", component.kind().name());
                current.add_component(component);
            } else {
                trace!("{} gets a row of its own", component.kind().name());
                self.open_new_row([component]);
            }

            // nothing may join the exclusive component's row
            return self.open_new_row(None::<Component>);
        }

        // a row holding an exclusive component is closed, even when it became
        // the current row again after pruning
        if current.size() >= capacity || current.iter().any(Component::is_exclusive) {
            trace!("{} starts a new row", component.kind().name());
            return self.open_new_row([component]);
        }

        trace!("{} joins the current row", component.kind().name());
        current.add_component(component);

        self
    }

    /// [`add`](Self::add) every component in order.
    pub fn add_bulk<I>(&mut self, components: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Component>,
    {
        for component in components {
            self.add(component);
        }

        self
    }

    /// Add a button sending an interaction when clicked.
    pub fn add_interaction_button(
        &mut self,
        style: ButtonStyle,
        custom_id: impl Into<String>,
        label: Option<String>,
        emoji: Option<PartialEmoji>,
        disabled: bool,
    ) -> Result<&mut Self, ComponentError> {
        let mut builder = ButtonBuilder::new(style, custom_id).disabled(disabled);

        if let Some(label) = label {
            builder = builder.label(label);
        }

        if let Some(emoji) = emoji {
            builder = builder.emoji(emoji);
        }

        Ok(self.add(builder.build()?))
    }

    /// Add a button opening `url` when clicked.
    pub fn add_link_button(
        &mut self,
        url: impl Into<String>,
        label: Option<String>,
        emoji: Option<PartialEmoji>,
        disabled: bool,
    ) -> Result<&mut Self, ComponentError> {
        self.add_interaction_button(ButtonStyle::Link, url, label, emoji, disabled)
    }

    /// Alias of [`add_link_button`](Self::add_link_button).
    pub fn add_url_button(
        &mut self,
        url: impl Into<String>,
        label: Option<String>,
        emoji: Option<PartialEmoji>,
        disabled: bool,
    ) -> Result<&mut Self, ComponentError> {
        self.add_link_button(url, label, emoji, disabled)
    }

    /// Add a select menu, in the current row if it is empty, otherwise in a new one.
    pub fn add_select_menu(
        &mut self,
        custom_id: impl Into<String>,
        options: Vec<SelectMenuOption>,
        placeholder: Option<String>,
        min_values: Option<u8>,
        max_values: Option<u8>,
        disabled: bool,
    ) -> Result<&mut Self, ComponentError> {
        let mut builder = SelectMenuBuilder::new(custom_id)
            .add_options(options)
            .values(min_values, max_values)
            .disabled(disabled);

        if let Some(placeholder) = placeholder {
            builder = builder.placeholder(placeholder);
        }

        Ok(self.add(builder.build()?))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_text_input(
        &mut self,
        style: TextInputStyle,
        label: impl Into<String>,
        custom_id: impl Into<String>,
        placeholder: Option<String>,
        value: Option<String>,
        min_length: Option<u16>,
        max_length: Option<u16>,
        required: Option<bool>,
    ) -> Result<&mut Self, ComponentError> {
        let mut builder =
            TextInputBuilder::new(style, label, custom_id).length(min_length, max_length);

        if let Some(placeholder) = placeholder {
            builder = builder.placeholder(placeholder);
        }

        if let Some(value) = value {
            builder = builder.value(value);
        }

        if let Some(required) = required {
            builder = builder.required(required);
        }

        Ok(self.add(builder.build()?))
    }

    /// Drop every row without components, the last remaining row becomes the
    /// current row.
    pub fn remove_empty_rows(&mut self) -> &mut Self {
        let before = self.rows.len();
        self.rows.retain(|row| !row.is_empty());

        if self.rows.len() != before {
            debug!("removed {} empty rows", before - self.rows.len());
        }

        self.cursor = self.rows.len().checked_sub(1);

        self
    }

    /// Prune empty rows and serialize the rest, in order.
    pub fn export(&mut self) -> Result<Vec<serde_json::Value>, ComponentError> {
        self.remove_empty_rows()
            .rows
            .iter()
            .map(ActionRow::to_json)
            .collect()
    }

    /// Prune empty rows and consume the helper, returning the rows.
    pub fn into_rows(mut self) -> Vec<ActionRow> {
        self.remove_empty_rows();

        self.rows
    }
}
