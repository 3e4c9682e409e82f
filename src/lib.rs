pub mod catalog;
pub mod config;
pub mod error;
pub mod feed;
pub mod input;
pub mod model;
pub mod ui;
