pub mod config;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod nav;
pub mod progress;
pub mod rating;
pub mod reveal;
pub mod theme;

pub use config::*;
pub use constants::*;
pub use cursor::*;
pub use error::{FolioError, Result};
pub use nav::*;
pub use progress::*;
pub use rating::*;
pub use reveal::*;
pub use theme::*;
