use crate::overrides::{OverrideKind, OverrideMap, OverrideStore};
use crate::session::{Session, SessionSnapshot};

use super::format::display_url;

/// A session as it should be rendered: the host record with local overrides
/// layered on top. Neither source is modified.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView<'a> {
    pub session: &'a Session,
    pub display_name: String,
    pub url: Option<String>,
}

impl SessionView<'_> {
    pub fn has_custom_name(&self) -> bool {
        self.display_name != self.session.project_name
    }

    /// URL ready to hand to an opener, with `https://` added when missing.
    pub fn href(&self) -> Option<String> {
        self.url.as_deref().map(display_url)
    }
}

fn compose<'a>(session: &'a Session, names: &OverrideMap, urls: &OverrideMap) -> SessionView<'a> {
    SessionView {
        session,
        display_name: names
            .get(&session.id)
            .cloned()
            .unwrap_or_else(|| session.project_name.clone()),
        url: urls.get(&session.id).cloned(),
    }
}

/// Compose a single session. Reads the store on every call.
pub fn present<'a>(session: &'a Session, store: &OverrideStore) -> SessionView<'a> {
    let names = store.load(OverrideKind::Name);
    let urls = store.load(OverrideKind::Url);
    compose(session, &names, &urls)
}

/// Compose every session of a snapshot, in snapshot order.
pub fn present_all<'a>(snapshot: &'a SessionSnapshot, store: &OverrideStore) -> Vec<SessionView<'a>> {
    let names = store.load(OverrideKind::Name);
    let urls = store.load(OverrideKind::Url);
    snapshot
        .sessions
        .iter()
        .map(|session| compose(session, &names, &urls))
        .collect()
}
