pub mod banner;
pub mod config;
pub mod effects;
pub mod shell;
pub mod terminal;
pub mod theme;
