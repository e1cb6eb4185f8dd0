mod controller;
mod limit;
mod theme;

pub use controller::{AuthResult, AuthState, LoopOption, MenuSection, SessionController};
pub use limit::{TimeLimit, MAX_HOURS, MAX_MINUTES, MAX_SECONDS};
pub use theme::{Palette, Theme};
