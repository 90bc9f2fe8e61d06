pub mod button;
pub mod select_menu;
pub mod select_menu_option;
pub mod text_input;

pub use button::ButtonBuilder;
pub use select_menu::SelectMenuBuilder;
pub use select_menu_option::SelectMenuOptionBuilder;
pub use text_input::TextInputBuilder;
