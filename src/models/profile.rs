use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PortfolioItem, ValidationError};
use crate::valuation::wishlist;

const DEFAULT_AVATAR: &str = "https://picsum.photos/seed/guest/200/200";

/// The device-local user profile; the unit of persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub xp: u32,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub owned: Vec<PortfolioItem>,
    /// Watched catalog ids.
    #[serde(default)]
    pub wishlist: BTreeSet<String>,
}

fn default_level() -> u32 {
    1
}

impl UserProfile {
    /// Fresh profile for a newly signed-in collector.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            level: default_level(),
            xp: 0,
            avatar: DEFAULT_AVATAR.to_string(),
            is_premium: false,
            owned: Vec::new(),
            wishlist: BTreeSet::new(),
        }
    }

    pub fn is_watching(&self, sneaker_id: &str) -> bool {
        self.wishlist.contains(sneaker_id)
    }

    pub fn find_item(&self, id: Uuid) -> Option<&PortfolioItem> {
        self.owned.iter().find(|item| item.id == id)
    }

    /// Check a profile read from outside the store (a backup) against the
    /// same rules new acquisitions go through.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.trim().is_empty() {
            return Err(ValidationError::Empty("username"));
        }
        self.owned.iter().try_for_each(PortfolioItem::validate)
    }

    /// Flip `sneaker_id` on the wishlist. Returns true if it is now watched.
    pub fn toggle_wishlist(&mut self, sneaker_id: &str) -> bool {
        self.wishlist = wishlist::toggle(&self.wishlist, sneaker_id);
        self.is_watching(sneaker_id)
    }
}
