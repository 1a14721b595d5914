//! Explicit re-render trigger

use super::view::View;

/// Receives a freshly built view when the page forces a re-render
///
/// [`ChatPage::ask`](super::ChatPage::ask) calls this once, after the user
/// turn is appended and before the outbound call starts.
pub trait Refresh {
    fn force_refresh(&mut self, view: &View);
}

/// Discards refresh requests
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRefresh;

impl Refresh for NoRefresh {
    fn force_refresh(&mut self, _view: &View) {}
}
