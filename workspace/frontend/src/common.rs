pub mod error;
pub mod history_hook;
pub mod loading;
pub mod toast;
