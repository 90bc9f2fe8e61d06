//! Build the component rows of a Discord message or modal.
//!
//! [`ComponentHelper`] takes buttons, select menus and text inputs one at a
//! time and decides which [`ActionRow`](model::ActionRow) each of them lands
//! in. [`ComponentHelper::export`] produces the JSON payload.

pub mod builder;
pub mod config;
pub mod constants;
pub mod emoji;
pub mod error;
pub mod helper;
pub mod model;
pub mod twilight;

pub use config::{HelperConfig, RowCapacity};
pub use emoji::{to_partial_emoji, EmojiKind, PartialEmoji};
pub use error::ComponentError;
pub use helper::ComponentHelper;
