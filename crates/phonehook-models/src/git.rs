/// Commit author identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitAuthor {
    /// Name.
    pub name: String,
    /// Email.
    pub email: String,
}

/// Credentials used to push on the downstream remote.
#[derive(Clone, PartialEq, Eq)]
pub struct GitCredentials {
    /// Username.
    pub username: String,
    /// Token, used as password.
    pub token: String,
}

impl std::fmt::Debug for GitCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitCredentials")
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Commit of every working tree change on a branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRequest {
    /// Branch receiving the commit.
    pub branch: String,
    /// Commit message.
    pub message: String,
    /// Author and committer.
    pub author: GitAuthor,
}

/// Push of a local branch to the same-named remote branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushRequest {
    /// Remote name.
    pub remote: String,
    /// Branch name.
    pub branch: String,
    /// Credentials.
    pub credentials: GitCredentials,
}

impl PushRequest {
    /// Get the non-forced refspec for the branch.
    pub fn refspec(&self) -> String {
        format!("refs/heads/{0}:refs/heads/{0}", self.branch)
    }
}
