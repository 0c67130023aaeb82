/// Scopes are a single space separated string on the wire and a set in the
/// model.
pub mod space_separated_scopes {
    use serde::{de, Deserialize, Serializer};
    use std::collections::HashSet;

    pub fn deserialize<'de, D>(d: D) -> Result<HashSet<String>, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let scopes: Option<String> = Option::deserialize(d)?;
        Ok(split(&scopes.unwrap_or_default()))
    }

    pub fn split(scopes: &str) -> HashSet<String> {
        scopes
            .split(|c: char| c == ' ' || c == ',')
            .filter(|scope| !scope.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    }

    pub fn serialize<S>(scopes: &HashSet<String>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut scopes = scopes.iter().map(String::as_str).collect::<Vec<_>>();
        scopes.sort_unstable();
        s.serialize_str(&scopes.join(" "))
    }
}
