pub mod dashboard;
pub mod layout;
pub mod prediction;
pub mod revenue;
pub mod settings;
