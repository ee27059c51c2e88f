//! Link entity representing one outbound entry on the profile page.

use serde::{Deserialize, Serialize};

/// A curated outbound link.
///
/// `order` is the link's rank among all links. After an add or a reorder the
/// ranks form the contiguous sequence `0..n` matching list position; a delete
/// leaves the remaining ranks untouched, so gaps are possible until the next
/// reorder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: String,
    pub title: String,
    pub url: String,
    pub enabled: bool,
    pub order: u32,
    pub click_count: u64,
}

impl Link {
    /// Creates a link that has never been clicked.
    pub fn new(id: String, title: String, url: String, enabled: bool, order: u32) -> Self {
        Self {
            id,
            title,
            url,
            enabled,
            order,
            click_count: 0,
        }
    }

    /// Counts one click-through.
    pub fn record_click(&mut self) {
        self.click_count = self.click_count.saturating_add(1);
    }

    /// Applies a partial update, leaving `None` fields unchanged.
    pub fn apply(&mut self, patch: LinkPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(url) = patch.url {
            self.url = url;
        }
        if let Some(enabled) = patch.enabled {
            self.enabled = enabled;
        }
    }
}

/// Partial update for an existing link.
///
/// `None` fields are left unchanged. The URL is stored as given; callers
/// sanitize it beforehand. `click_count` is not patchable: it only grows,
/// through [`Link::record_click`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkPatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub enabled: Option<bool>,
}
