use uuid::Uuid;

/// Caller identity resolved from a verified access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: Uuid,
    pub is_admin: bool,
}

impl CurrentUser {
    pub fn new(user_id: Uuid, is_admin: bool) -> Self {
        Self { user_id, is_admin }
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }
}
