//! UGC share payloads, as they would be sent to `POST /ugcPosts`.

use std::collections::HashMap;

use serde::Serialize;

use crate::{Id, OrganizationId};

pub const SHARE_CONTENT: &str = "com.linkedin.ugc.ShareContent";
pub const MEMBER_NETWORK_VISIBILITY: &str = "com.linkedin.ugc.MemberNetworkVisibility";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleState {
    Published,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    Public,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShareMediaCategory {
    None,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Share {
    pub author: String,
    #[serde(rename = "lifecycleState")]
    pub lifecycle_state: LifecycleState,
    #[serde(rename = "specificContent")]
    pub specific_content: HashMap<String, ShareContent>,
    pub visibility: HashMap<String, Visibility>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ShareContent {
    #[serde(rename = "shareCommentary")]
    pub share_commentary: ShareCommentary,
    #[serde(rename = "shareMediaCategory")]
    pub share_media_category: ShareMediaCategory,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ShareCommentary {
    pub text: String,
}

impl Share {
    /// A published, public, text-only share authored by an organization.
    pub fn text(author: &OrganizationId, text: impl Into<String>) -> Self {
        let content = ShareContent {
            share_commentary: ShareCommentary { text: text.into() },
            share_media_category: ShareMediaCategory::None,
        };

        Self {
            author: author.urn(),
            lifecycle_state: LifecycleState::Published,
            specific_content: HashMap::from([(SHARE_CONTENT.to_owned(), content)]),
            visibility: HashMap::from([(MEMBER_NETWORK_VISIBILITY.to_owned(), Visibility::Public)]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_share_matches_wire_format() {
        let org = OrganizationId::from_id("YOUR_ORG_URN").unwrap();
        let share = Share::text(&org, "Hello");
        let value = serde_json::to_value(&share).unwrap();

        assert_eq!(
            value,
            json!({
                "author": "urn:li:organization:YOUR_ORG_URN",
                "lifecycleState": "PUBLISHED",
                "specificContent": {
                    "com.linkedin.ugc.ShareContent": {
                        "shareCommentary": {"text": "Hello"},
                        "shareMediaCategory": "NONE"
                    }
                },
                "visibility": {"com.linkedin.ugc.MemberNetworkVisibility": "PUBLIC"}
            })
        );
    }
}
