//! Terminal host for the chat page
//!
//! [`TuiApp`] owns the terminal, feeds key presses and resizes to the
//! [`ChatPage`](crate::page::ChatPage) and draws the view it builds.

mod action;
mod app;
mod render;
mod widgets;

pub use action::{Action, KeyHandler};
pub use app::{Step, TuiApp};
pub use render::{RenderContext, TerminalRefresh, render};
