pub mod account_action;
pub mod nav_link;
pub mod theme_provider;

pub use account_action::AccountActionLink;
pub use nav_link::NavLink;
pub use theme_provider::ThemeProvider;
