use fixtures::{Advocacy, Engagement, Profile, ReactionCount};
use serde::Serialize;

/// A serializable view bound to one template.
pub trait Page: Serialize {
    const TEMPLATE: &'static str;
}

#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub authenticated: bool,
    /// RFC 3339 time the token was stored.
    pub obtained_at: Option<String>,
    pub injection_enabled: bool,
}

impl Page for HomePage {
    const TEMPLATE: &'static str = "home.html";
}

#[derive(Debug, Clone, Serialize)]
pub struct PresetHelpPage {
    pub preset_configured: bool,
}

impl Page for PresetHelpPage {
    const TEMPLATE: &'static str = "preset_help.html";
}

#[derive(Debug, Clone, Serialize)]
pub struct PostPage {
    pub authenticated: bool,
}

impl Page for PostPage {
    const TEMPLATE: &'static str = "post.html";
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationPage {
    pub message: String,
    /// Pretty-printed share body.
    pub payload: String,
    pub reactions: Vec<ReactionCount>,
    pub engagement: Vec<Engagement>,
    pub advocacy: Vec<Advocacy>,
    pub authenticated: bool,
}

impl Page for SimulationPage {
    const TEMPLATE: &'static str = "simulation.html";
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfilePage {
    pub profile: Profile,
}

impl Page for ProfilePage {
    const TEMPLATE: &'static str = "profile.html";
}

/// Success and error pages share one layout.
#[derive(Debug, Clone, Serialize)]
pub struct MessagePage {
    pub title: String,
    pub message: String,
    pub detail: Option<String>,
    pub is_error: bool,
    pub next: Option<Link>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Link {
    pub href: String,
    pub label: String,
}

impl MessagePage {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            detail: None,
            is_error: false,
            next: None,
        }
    }

    pub fn error(
        title: impl Into<String>,
        message: impl Into<String>,
        detail: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            detail,
            is_error: true,
            next: None,
        }
    }

    pub fn with_link(mut self, href: impl Into<String>, label: impl Into<String>) -> Self {
        self.next = Some(Link {
            href: href.into(),
            label: label.into(),
        });
        self
    }
}

impl Page for MessagePage {
    const TEMPLATE: &'static str = "message.html";
}
