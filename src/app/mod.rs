pub mod components;
pub mod layouts;
pub mod pages;
pub mod routes;
pub mod state;

pub use routes::{App, Route};
