use crate::constants::ComponentType;

#[derive(Debug, thiserror::Error)]
pub enum ComponentError {
    #[error("Row capacity must be between 1 and 5, got {0}")]
    InvalidCapacity(u8),
    #[error("The {component} is missing the required field `{field}`")]
    MissingRequiredField {
        component: &'static str,
        field: &'static str,
    },
    #[error("Unknown {kind} `{value}`")]
    UnknownConstant { kind: &'static str, value: u8 },
    #[error("A {} can not be converted into a twilight component", .0.name())]
    UnsupportedComponent(ComponentType),
    #[error("`{0}` is not a valid emoji id")]
    InvalidEmojiId(String),
    #[error("Failed to serialize component: {0}")]
    Serialize(#[from] serde_json::Error),
}
