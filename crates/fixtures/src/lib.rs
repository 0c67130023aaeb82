//! Made-up members, comments and employees for the post simulation.
//!
//! Nothing in here is live data. The table is built once and handed to the
//! renderer; the functions over it are pure apart from the explicit `Rng`.

mod advocacy;
mod engagement;
mod profiles;

pub use advocacy::{Advocacy, Employee};
pub use engagement::{reaction_counts, Engagement, Reaction, ReactionCount};
pub use profiles::Profile;

use libs::chrono::NaiveDateTime;
use libs::fastrand::Rng;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone)]
pub struct Fixtures {
    profiles: Vec<Profile>,
    comments: Vec<engagement::CommentFixture>,
    employees: Vec<Employee>,
}

impl Fixtures {
    pub fn builtin() -> Self {
        Self {
            profiles: profiles::builtin(),
            comments: engagement::builtin(),
            employees: advocacy::builtin(),
        }
    }

    pub fn profile(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|profile| profile.id == id)
    }

    /// Member comments and reactions, timestamped relative to `now`.
    pub fn engagement(&self, now: NaiveDateTime) -> Vec<Engagement> {
        self.comments
            .iter()
            .filter_map(|comment| {
                let member = self.profile(comment.member_id)?;
                Some(Engagement {
                    member_id: member.id.clone(),
                    member_name: member.name.clone(),
                    headline: member.headline.clone(),
                    comment: comment.comment.to_owned(),
                    reaction: comment.reaction,
                    timestamp: (now - comment.ago).format(TIMESTAMP_FORMAT).to_string(),
                })
            })
            .collect()
    }

    /// Which employees reshared the post. Random on every call.
    pub fn advocacy(&self, rng: &mut Rng, now: NaiveDateTime) -> Vec<Advocacy> {
        advocacy::simulate(&self.employees, rng, now)
    }
}
