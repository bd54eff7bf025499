pub mod encode;
pub mod marks;
pub mod version;
