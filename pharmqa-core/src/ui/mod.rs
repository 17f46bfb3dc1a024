//! Terminal presentation helpers: theme, spinner and markdown rendering.

pub mod markdown;
pub mod spinner;
pub mod theme;

pub use markdown::*;
pub use spinner::*;
pub use theme::*;
