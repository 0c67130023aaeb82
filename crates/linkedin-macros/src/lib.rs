/// Create a [`HashSet`](std::collections::HashSet) of scopes from a list of
/// string literals.
///
/// ```
/// use linkedin_macros::scopes;
///
/// let scopes = scopes!("r_organization_social", "w_member_social");
/// assert!(scopes.contains("w_member_social"));
/// ```
#[macro_export]
macro_rules! scopes {
    ($($key:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut container = ::std::collections::HashSet::<::std::string::String>::new();
        $(
            container.insert(::std::string::String::from($key));
        )*
        container
    }};
}
