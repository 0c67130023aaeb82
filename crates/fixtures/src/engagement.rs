use libs::chrono::Duration;
use serde::Serialize;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Reaction {
    Like,
    Love,
    Clap,
    Insightful,
    Support,
}

#[derive(Debug, Clone)]
pub(crate) struct CommentFixture {
    pub member_id: &'static str,
    pub comment: &'static str,
    pub reaction: Reaction,
    pub ago: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Engagement {
    pub member_id: String,
    pub member_name: String,
    pub headline: String,
    pub comment: String,
    pub reaction: Reaction,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionCount {
    pub reaction: Reaction,
    pub count: usize,
}

/// Counts per reaction, in the order each reaction first shows up.
pub fn reaction_counts(engagement: &[Engagement]) -> Vec<ReactionCount> {
    let mut counts: Vec<ReactionCount> = vec![];
    for e in engagement {
        match counts.iter_mut().find(|c| c.reaction == e.reaction) {
            Some(count) => count.count += 1,
            None => counts.push(ReactionCount {
                reaction: e.reaction,
                count: 1,
            }),
        }
    }
    counts
}

pub(crate) fn builtin() -> Vec<CommentFixture> {
    vec![
        CommentFixture {
            member_id: "alice-johnson",
            comment: "Great post!",
            reaction: Reaction::Like,
            ago: Duration::minutes(15),
        },
        CommentFixture {
            member_id: "bob-smith",
            comment: "Interesting insight.",
            reaction: Reaction::Love,
            ago: Duration::minutes(45),
        },
        CommentFixture {
            member_id: "charlie-lee",
            comment: "Thanks for sharing!",
            reaction: Reaction::Clap,
            ago: Duration::minutes(70),
        },
        CommentFixture {
            member_id: "dana-whitfield",
            comment: "We are hiring for exactly this, DM me.",
            reaction: Reaction::Like,
            ago: Duration::minutes(95),
        },
        CommentFixture {
            member_id: "emeka-obi",
            comment: "Would love to read a follow-up on the numbers.",
            reaction: Reaction::Insightful,
            ago: Duration::minutes(130),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engagement(reaction: Reaction) -> Engagement {
        Engagement {
            member_id: "m".to_owned(),
            member_name: "M".to_owned(),
            headline: String::new(),
            comment: String::new(),
            reaction,
            timestamp: String::new(),
        }
    }

    #[test]
    fn counts_keep_first_seen_order() {
        let counts = reaction_counts(&[
            engagement(Reaction::Love),
            engagement(Reaction::Like),
            engagement(Reaction::Love),
        ]);
        assert_eq!(
            counts,
            vec![
                ReactionCount {
                    reaction: Reaction::Love,
                    count: 2
                },
                ReactionCount {
                    reaction: Reaction::Like,
                    count: 1
                },
            ]
        );
        assert!(reaction_counts(&[]).is_empty());
    }

    #[test]
    fn reaction_names() {
        assert_eq!(Reaction::Like.to_string(), "LIKE");
        assert_eq!(Reaction::Insightful.to_string(), "INSIGHTFUL");
    }
}
