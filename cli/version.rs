pub const GIT_COMMIT_HASH: &str = env!("GIT_COMMIT_HASH");

pub fn engage() -> String {
    let semver = env!("CARGO_PKG_VERSION");
    let short_hash = GIT_COMMIT_HASH.get(..7).unwrap_or(GIT_COMMIT_HASH);
    format!("{}+{}", semver, short_hash)
}
