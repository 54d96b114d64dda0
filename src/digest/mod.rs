pub mod bitops;
pub mod md5;
pub mod sha1;

pub use md5::md5;
pub use sha1::sha1;
