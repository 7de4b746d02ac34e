pub mod composer;
pub mod settings;
pub mod status;
