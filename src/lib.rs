pub mod fetch;
pub mod records;
pub mod render;
pub mod version;
