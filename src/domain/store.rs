//! The profile store: single source of truth for the dashboard.
//!
//! [`ProfileStore`] owns the [`User`], the ordered [`Link`] list, the
//! [`ThemeSettings`] and the [`Analytics`] snapshot. Readers get shared
//! references; every change goes through one of the command methods, which
//! then notify all subscribed listeners with a [`StoreEvent`].
//!
//! # Ordering
//!
//! The list position is authoritative for display. `Link::order` mirrors it
//! after `add_link` and `reorder_links`; `delete_link` does not renumber the
//! remaining links, so their `order` values may have gaps until the next
//! reorder (see [`ProfileStore::has_contiguous_order`]).
//!
//! # Validation
//!
//! The store does not validate titles, URLs, usernames or emails. That is
//! the job of whoever presents the input (the API layer here).

use std::collections::HashSet;

use crate::domain::entities::{
    Analytics, Link, LinkPatch, ProfileSnapshot, ThemePatch, ThemeSettings, User, UserPatch,
};
use crate::utils::id_generator::IdGenerator;

/// Errors returned by store commands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("link '{0}' not found")]
    LinkNotFound(String),

    #[error("reorder must be a permutation of the {expected} existing links, got {received} ids")]
    InvalidPermutation { expected: usize, received: usize },
}

/// What changed. Emitted once per successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    LinkAdded(String),
    LinkUpdated(String),
    LinkDeleted(String),
    LinksReordered,
    ThemeUpdated,
    UserUpdated,
    AnalyticsReplaced,
}

impl StoreEvent {
    /// Short operation name, used as a metrics label.
    pub fn operation(&self) -> &'static str {
        match self {
            StoreEvent::LinkAdded(_) => "add_link",
            StoreEvent::LinkUpdated(_) => "update_link",
            StoreEvent::LinkDeleted(_) => "delete_link",
            StoreEvent::LinksReordered => "reorder_links",
            StoreEvent::ThemeUpdated => "update_theme_settings",
            StoreEvent::UserUpdated => "update_user",
            StoreEvent::AnalyticsReplaced => "replace_analytics",
        }
    }

    /// Whether the change touches the persisted snapshot.
    pub fn affects_snapshot(&self) -> bool {
        !matches!(self, StoreEvent::AnalyticsReplaced)
    }
}

/// Handle returned by [`ProfileStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Callback invoked after every change, with the store in its new state.
pub type Listener = Box<dyn Fn(&StoreEvent, &ProfileStore) + Send + Sync>;

pub struct ProfileStore {
    user: User,
    links: Vec<Link>,
    theme_settings: ThemeSettings,
    analytics: Analytics,
    ids: Box<dyn IdGenerator>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl std::fmt::Debug for ProfileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileStore")
            .field("user", &self.user)
            .field("links", &self.links)
            .field("theme_settings", &self.theme_settings)
            .field("analytics", &self.analytics)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ProfileStore {
    /// Creates a store from a persisted snapshot and an analytics snapshot.
    pub fn new(
        snapshot: ProfileSnapshot,
        analytics: Analytics,
        ids: impl IdGenerator + 'static,
    ) -> Self {
        Self {
            user: snapshot.user,
            links: snapshot.links,
            theme_settings: snapshot.theme_settings,
            analytics,
            ids: Box::new(ids),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    // ── Read accessors ──────────────────────────────────────────────────────

    pub fn user(&self) -> &User {
        &self.user
    }

    /// Links in display order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn link(&self, id: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.id == id)
    }

    pub fn theme_settings(&self) -> &ThemeSettings {
        &self.theme_settings
    }

    pub fn analytics(&self) -> &Analytics {
        &self.analytics
    }

    /// Copies the persistable part of the state.
    pub fn snapshot(&self) -> ProfileSnapshot {
        ProfileSnapshot {
            user: self.user.clone(),
            links: self.links.clone(),
            theme_settings: self.theme_settings.clone(),
        }
    }

    /// `true` when `links[i].order == i` for every link.
    pub fn has_contiguous_order(&self) -> bool {
        self.links
            .iter()
            .enumerate()
            .all(|(i, link)| link.order as usize == i)
    }

    // ── Commands ────────────────────────────────────────────────────────────

    /// Appends a new link ranked after all existing ones.
    ///
    /// Duplicate titles and URLs are allowed.
    pub fn add_link(&mut self, title: String, url: String, enabled: bool) -> Link {
        let link = Link::new(self.ids.next_id(), title, url, enabled, self.links.len() as u32);
        self.links.push(link.clone());
        tracing::debug!(id = %link.id, order = link.order, "Link added");
        self.notify(StoreEvent::LinkAdded(link.id.clone()));
        link
    }

    /// Merges `patch` into the link with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::LinkNotFound`] if no link has this id.
    pub fn update_link(&mut self, id: &str, patch: LinkPatch) -> Result<Link, StoreError> {
        let link = self.link_mut(id)?;
        link.apply(patch);
        let updated = link.clone();
        self.notify(StoreEvent::LinkUpdated(updated.id.clone()));
        Ok(updated)
    }

    /// Counts one click-through on a link.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::LinkNotFound`] if no link has this id.
    pub fn record_click(&mut self, id: &str) -> Result<Link, StoreError> {
        let link = self.link_mut(id)?;
        link.record_click();
        let updated = link.clone();
        self.notify(StoreEvent::LinkUpdated(updated.id.clone()));
        Ok(updated)
    }

    /// Removes a link. The remaining links keep their `order` values.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::LinkNotFound`] if no link has this id.
    pub fn delete_link(&mut self, id: &str) -> Result<Link, StoreError> {
        let index = self
            .links
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| StoreError::LinkNotFound(id.to_string()))?;
        let removed = self.links.remove(index);
        tracing::debug!(id = %removed.id, "Link deleted");
        self.notify(StoreEvent::LinkDeleted(removed.id.clone()));
        Ok(removed)
    }

    /// Rearranges the links to follow `ids` and renumbers every `order` to
    /// its new index.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidPermutation`] unless `ids` names every
    /// current link exactly once. The store is left unchanged in that case.
    pub fn reorder_links(&mut self, ids: &[String]) -> Result<(), StoreError> {
        let invalid = || StoreError::InvalidPermutation {
            expected: self.links.len(),
            received: ids.len(),
        };

        if ids.len() != self.links.len() {
            return Err(invalid());
        }
        let unique: HashSet<&str> = ids.iter().map(String::as_str).collect();
        if unique.len() != ids.len() || self.links.iter().any(|l| !unique.contains(l.id.as_str())) {
            return Err(invalid());
        }

        let mut remaining = std::mem::take(&mut self.links);
        let mut reordered = Vec::with_capacity(remaining.len());
        for (index, id) in ids.iter().enumerate() {
            // The checks above guarantee each id is present exactly once.
            if let Some(pos) = remaining.iter().position(|l| &l.id == id) {
                let mut link = remaining.swap_remove(pos);
                link.order = index as u32;
                reordered.push(link);
            }
        }
        self.links = reordered;

        self.notify(StoreEvent::LinksReordered);
        Ok(())
    }

    /// Shallow-merges `patch` into the theme settings.
    pub fn update_theme_settings(&mut self, patch: ThemePatch) -> ThemeSettings {
        self.theme_settings.apply(patch);
        self.notify(StoreEvent::ThemeUpdated);
        self.theme_settings.clone()
    }

    /// Shallow-merges `patch` into the user.
    pub fn update_user(&mut self, patch: UserPatch) -> User {
        self.user.apply(patch);
        self.notify(StoreEvent::UserUpdated);
        self.user.clone()
    }

    /// Swaps in a new analytics snapshot.
    pub fn replace_analytics(&mut self, analytics: Analytics) {
        self.analytics = analytics;
        self.notify(StoreEvent::AnalyticsReplaced);
    }

    // ── Subscriptions ───────────────────────────────────────────────────────

    /// Registers a listener called after every successful command.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&StoreEvent, &ProfileStore) + Send + Sync + 'static,
    {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn link_mut(&mut self, id: &str) -> Result<&mut Link, StoreError> {
        self.links
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| StoreError::LinkNotFound(id.to_string()))
    }

    fn notify(&self, event: StoreEvent) {
        metrics::counter!("store_mutations_total", "operation" => event.operation()).increment(1);
        for (_, listener) in &self.listeners {
            listener(&event, self);
        }
    }
}
