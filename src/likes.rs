use log::{debug, info};

use crate::error::ForkifyError;
use crate::model::LikedRecipe;
use crate::storage::Storage;

/// Storage key holding the serialized liked-recipes list
pub const LIKES_KEY: &str = "likes";

/// Liked recipes, persisted through a [`Storage`] after every change
pub struct Likes<S: Storage> {
    likes: Vec<LikedRecipe>,
    storage: S,
}

impl<S: Storage> Likes<S> {
    /// Start with an empty list; call [`Likes::read_storage`] to restore
    pub fn new(storage: S) -> Self {
        Self {
            likes: Vec::new(),
            storage,
        }
    }

    /// Create and immediately restore from storage
    pub fn restore(storage: S) -> Result<Self, ForkifyError> {
        let mut likes = Self::new(storage);
        likes.read_storage()?;
        Ok(likes)
    }

    /// Add a like. A recipe that is already liked is left as it was.
    ///
    /// The in-memory list only changes once storage has accepted the new list.
    pub fn add_like(&mut self, like: LikedRecipe) -> Result<&LikedRecipe, ForkifyError> {
        let index = match self.position(&like.id) {
            Some(index) => {
                debug!("recipe {} already liked", like.id);
                index
            }
            None => {
                let mut updated = self.likes.clone();
                updated.push(like);
                self.persist_data(&updated)?;
                self.likes = updated;
                self.likes.len() - 1
            }
        };
        Ok(&self.likes[index])
    }

    /// Remove a like, returning whether anything was removed.
    ///
    /// Nothing is removed if storage rejects the new list.
    pub fn delete_like(&mut self, id: &str) -> Result<bool, ForkifyError> {
        match self.position(id) {
            Some(index) => {
                let mut updated = self.likes.clone();
                updated.remove(index);
                self.persist_data(&updated)?;
                self.likes = updated;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn number_of_likes(&self) -> usize {
        self.likes.len()
    }

    pub fn likes(&self) -> &[LikedRecipe] {
        &self.likes
    }

    /// Replace the in-memory list with what storage holds.
    ///
    /// Duplicate ids in stored data keep their first occurrence.
    pub fn read_storage(&mut self) -> Result<(), ForkifyError> {
        let Some(raw) = self.storage.get(LIKES_KEY)? else {
            return Ok(());
        };
        let stored: Vec<LikedRecipe> = serde_json::from_str(&raw)?;

        self.likes.clear();
        for like in stored {
            if !self.is_liked(&like.id) {
                self.likes.push(like);
            }
        }
        info!("restored {} liked recipes", self.likes.len());
        Ok(())
    }

    fn persist_data(&self, likes: &[LikedRecipe]) -> Result<(), ForkifyError> {
        self.storage.set(LIKES_KEY, &serde_json::to_string(likes)?)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.likes.iter().position(|like| like.id == id)
    }
}
