use serde::{ser::SerializeStruct, Serialize, Serializer};

use super::Component;
use crate::{constants::ComponentType, error::ComponentError};

/// One line of rendered components, kept in insertion order.
///
/// The row itself does not enforce any capacity, that is up to
/// [`ComponentHelper`](crate::helper::ComponentHelper).
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct ActionRow {
    components: Vec<Component>,
}

impl ActionRow {
    pub const fn new() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    pub const fn kind(&self) -> ComponentType {
        ComponentType::ActionRow
    }

    pub fn add_component(&mut self, component: impl Into<Component>) -> &mut Self {
        self.components.push(component.into());

        self
    }

    pub fn add_components<I>(&mut self, components: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Component>,
    {
        for component in components {
            self.add_component(component);
        }

        self
    }

    pub fn size(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Copy of the contained components.
    pub fn components(&self) -> Vec<Component> {
        self.components.clone()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.components.iter()
    }

    pub fn into_components(self) -> Vec<Component> {
        self.components
    }

    pub fn to_json(&self) -> Result<serde_json::Value, ComponentError> {
        Ok(serde_json::to_value(self)?)
    }
}

impl Serialize for ActionRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ActionRow", 2)?;

        state.serialize_field("type", &self.kind())?;
        state.serialize_field("components", &self.components)?;

        state.end()
    }
}

impl<'a> IntoIterator for &'a ActionRow {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<C: Into<Component>> FromIterator<C> for ActionRow {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        let mut row = Self::new();
        row.add_components(iter);

        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::ButtonStyle,
        model::{InteractionButton, LinkButton},
    };
    use serde_json::json;
    use static_assertions::assert_impl_all;
    use std::fmt::Debug;

    assert_impl_all!(ActionRow: Clone, Debug, Default, Send, Sync);

    fn button(custom_id: &str) -> InteractionButton {
        InteractionButton {
            style: ButtonStyle::Primary,
            custom_id: custom_id.into(),
            label: None,
            emoji: None,
            disabled: false,
        }
    }

    #[test]
    fn keeps_insertion_order() {
        let mut row = ActionRow::new();
        row.add_component(button("a"))
            .add_components(vec![button("b"), button("c")]);

        let ids: Vec<_> = row.iter().filter_map(Component::custom_id).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert_eq!(row.size(), 3);
        assert!(!row.is_empty());
    }

    #[test]
    fn components_is_a_copy() {
        let row: ActionRow = vec![button("a")].into_iter().collect();

        let mut copy = row.components();
        copy.clear();

        assert_eq!(row.size(), 1);
    }

    #[test]
    fn does_not_check_capacity() {
        let row: ActionRow = (0..7).map(|i| button(&i.to_string())).collect();

        assert_eq!(row.size(), 7);
    }

    #[test]
    fn json() {
        let mut row = ActionRow::new();
        assert!(row.is_empty());
        assert_eq!(row.to_json().unwrap(), json!({ "type": 1, "components": [] }));

        row.add_component(button("a")).add_component(LinkButton {
            url: "https://example.com".into(),
            label: Some("Docs".into()),
            emoji: None,
            disabled: false,
        });

        assert_eq!(
            row.to_json().unwrap(),
            json!({
                "type": 1,
                "components": [
                    { "type": 2, "style": 1, "custom_id": "a", "disabled": false },
                    {
                        "type": 2,
                        "style": 5,
                        "url": "https://example.com",
                        "label": "Docs",
                        "disabled": false,
                    },
                ],
            })
        );
    }
}
