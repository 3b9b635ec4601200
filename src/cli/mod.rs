pub mod convert;
pub mod input;
pub mod setup;
pub mod ui;
