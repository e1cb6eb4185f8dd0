//! # Hourglass Core Library
//!
//! This library provides the core logic for the Hourglass screen-time
//! limiter. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary, with any graphical shell being a
//! thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Session Controller**: the password gate plus all selection and
//!   configuration state (apps, time limits, loops, theme, expanded menu)
//! - **Countdown Timer**: a host-ticked state machine that requires the
//!   caller to invoke `tick()` once per elapsed second
//! - **View Projection**: a pure mapping of both components into a
//!   display-ready snapshot
//! - **Storage**: TOML-based configuration and a SQLite kv/history store
//!
//! ## Key Components
//!
//! - [`SessionController`]: configuration state machine and lock gate
//! - [`CountdownTimer`]: externally driven one-second countdown
//! - [`project`]: view-state projection for rendering hosts
//! - [`Config`]: application configuration management

pub mod countdown;
pub mod error;
pub mod events;
pub mod session;
pub mod storage;
pub mod view;

pub use countdown::{CountdownSnapshot, CountdownTimer};
pub use error::{CoreError, Result, SessionError};
pub use events::Event;
pub use session::{
    AuthResult, AuthState, LoopOption, MenuSection, Palette, SessionController, Theme, TimeLimit,
};
pub use storage::Config;
pub use view::{format_remaining, project, Screen, ViewSnapshot};
