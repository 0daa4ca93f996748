pub mod catalog_table;
pub mod catalog_view;
pub mod search_input;
pub mod theme_button;

pub use catalog_table::CatalogTable;
pub use catalog_view::CatalogView;
pub use search_input::SearchInput;
pub use theme_button::ThemeButton;
