//! Application Configuration

use crate::domain::value_object::page::DEFAULT_PAGE_SIZE;

/// Posts application configuration
#[derive(Debug, Clone)]
pub struct PostsConfig {
    /// Number of posts per listing page
    pub page_size: u32,
}

impl Default for PostsConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
