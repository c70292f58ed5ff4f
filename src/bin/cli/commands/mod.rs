pub mod decode;
pub mod encode;
pub mod saved;
pub mod share;
pub mod study;
