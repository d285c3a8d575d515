pub mod app;
pub mod components;
pub mod hooks;
pub mod pages;
pub mod services;

pub use app::App;
