use crate::TIMESTAMP_FORMAT;

use libs::chrono::{Duration, NaiveDateTime};
use libs::fastrand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub name: String,
    pub title: String,
}

/// One employee's part in spreading the post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advocacy {
    pub name: String,
    pub title: String,
    pub reshared: bool,
    /// Reactions their reshare collected. Zero when not reshared.
    pub reactions: u32,
    pub reshared_at: Option<String>,
}

pub(crate) fn builtin() -> Vec<Employee> {
    [
        ("Priya Natarajan", "VP Engineering"),
        ("Marcus Allen", "Account Executive"),
        ("Sofia Rossi", "UX Designer"),
        ("Tom Becker", "Customer Success Lead"),
        ("Yuki Tanaka", "Developer Advocate"),
        ("Grace Mensah", "People Operations"),
    ]
    .into_iter()
    .map(|(name, title)| Employee {
        name: name.to_owned(),
        title: title.to_owned(),
    })
    .collect()
}

pub(crate) fn simulate(employees: &[Employee], rng: &mut Rng, now: NaiveDateTime) -> Vec<Advocacy> {
    employees
        .iter()
        .map(|employee| {
            let reshared = rng.bool();
            let (reactions, reshared_at) = if reshared {
                let ago = Duration::minutes(rng.i64(5..180));
                (
                    rng.u32(1..=40),
                    Some((now - ago).format(TIMESTAMP_FORMAT).to_string()),
                )
            } else {
                (0, None)
            };

            Advocacy {
                name: employee.name.clone(),
                title: employee.title.clone(),
                reshared,
                reactions,
                reshared_at,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use libs::chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn same_seed_same_reshares() {
        let employees = builtin();
        let first = simulate(&employees, &mut Rng::with_seed(7), now());
        let second = simulate(&employees, &mut Rng::with_seed(7), now());
        assert_eq!(first, second);
        assert_eq!(first.len(), employees.len());
    }

    #[test]
    fn reshare_fields_are_consistent() {
        let employees = builtin();
        for seed in 0..20 {
            for advocacy in simulate(&employees, &mut Rng::with_seed(seed), now()) {
                if advocacy.reshared {
                    assert!((1..=40).contains(&advocacy.reactions));
                    assert!(advocacy.reshared_at.is_some());
                } else {
                    assert_eq!(advocacy.reactions, 0);
                    assert_eq!(advocacy.reshared_at, None);
                }
            }
        }
    }
}
