use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub headline: String,
    pub location: String,
    pub about: String,
    pub connections: u32,
}

fn profile(
    id: &str,
    name: &str,
    headline: &str,
    location: &str,
    about: &str,
    connections: u32,
) -> Profile {
    Profile {
        id: id.to_owned(),
        name: name.to_owned(),
        headline: headline.to_owned(),
        location: location.to_owned(),
        about: about.to_owned(),
        connections,
    }
}

pub(crate) fn builtin() -> Vec<Profile> {
    vec![
        profile(
            "alice-johnson",
            "Alice Johnson",
            "Head of Marketing at Northwind Traders",
            "Seattle, Washington",
            "Brand storyteller. Ten years of B2B campaigns and counting.",
            812,
        ),
        profile(
            "bob-smith",
            "Bob Smith",
            "Data Analyst | SQL, Python, dashboards",
            "Austin, Texas",
            "Turning messy spreadsheets into decisions.",
            347,
        ),
        profile(
            "charlie-lee",
            "Charlie Lee",
            "Product Manager at Contoso",
            "Toronto, Ontario",
            "Shipping things people actually use. Previously founder of a tiny SaaS.",
            1204,
        ),
        profile(
            "dana-whitfield",
            "Dana Whitfield",
            "Talent Acquisition Partner",
            "London, United Kingdom",
            "Connecting great people with great teams.",
            2310,
        ),
        profile(
            "emeka-obi",
            "Emeka Obi",
            "Software Engineer, Platform",
            "Lagos, Nigeria",
            "Distributed systems, coffee, and long bike rides.",
            530,
        ),
    ]
}
