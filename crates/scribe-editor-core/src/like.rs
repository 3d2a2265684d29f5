//! Like button wire types.

use serde::{Deserialize, Serialize};

/// JSON body returned by the like toggle endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeResponse {
    pub liked: bool,
    pub like_count: u64,
}

pub fn like_endpoint(post_id: &str) -> String {
    format!("/post/{post_id}/like")
}

/// How a like button should look after a toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeButtonView {
    /// Whether the button carries the `liked` class.
    pub liked: bool,
    pub inner_html: String,
}

impl From<LikeResponse> for LikeButtonView {
    fn from(response: LikeResponse) -> Self {
        let inner_html = if response.liked {
            format!(
                "<i class=\"fas fa-heart\"></i> Liked ({})",
                response.like_count
            )
        } else {
            format!(
                "<i class=\"far fa-heart\"></i> Like ({})",
                response.like_count
            )
        };
        Self {
            liked: response.liked,
            inner_html,
        }
    }
}
