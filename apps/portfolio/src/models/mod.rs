pub mod personal;
pub mod project;
