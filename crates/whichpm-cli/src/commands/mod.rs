pub mod detect;
pub mod structure;
pub mod version;
