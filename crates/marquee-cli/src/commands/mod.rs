pub mod browse;
pub mod collection;
pub mod library;
pub mod lists;
pub mod reset;
pub mod show;
pub mod theme;
pub mod watched;
