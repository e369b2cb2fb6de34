use std::borrow::Cow;

/// A role a route demands, paired with the message sent when it is missing.
///
/// Every role goes through the same check; only the name and the denial text differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredRole {
    name: Cow<'static, str>,
    denial: Cow<'static, str>,
}

impl RequiredRole {
    pub fn admin() -> Self {
        Self::new("admin")
    }

    pub fn moderator() -> Self {
        Self::new("moderator")
    }

    /// Any role by name; the denial reads `Require <Name> Role!`.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        let denial = Cow::Owned(format!("Require {} Role!", capitalize(&name)));
        Self { name, denial }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn denial(&self) -> &Cow<'static, str> {
        &self.denial
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
