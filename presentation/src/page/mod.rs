//! The chat page
//!
//! - [`ChatPage`]: page state plus `submit` / `ask` / `build`
//! - [`view`]: the layout tree `build` returns
//! - [`Refresh`]: explicit re-render trigger used by `ask`

mod chat_page;
mod input;
mod refresh;
pub mod view;

pub use chat_page::ChatPage;
pub use input::TextInput;
pub use refresh::{NoRefresh, Refresh};
pub use view::View;
