#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

mod charset;
mod pattern;
mod range;
mod stats;
mod wordlist;

pub use self::charset::*;
pub use self::pattern::*;
pub use self::range::*;
pub use self::stats::*;
pub use self::wordlist::*;
