/// Principal context for a request (authenticated identity).
///
/// Inserted by the auth middleware after token verification and handed to
/// handlers as a request extension, so identity flows as an explicit value
/// rather than ambient global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    username: String,
}

impl PrincipalContext {
    pub fn new(username: String) -> Self {
        Self { username }
    }

    /// The authenticated principal's login handle.
    pub fn username(&self) -> &str {
        &self.username
    }
}
