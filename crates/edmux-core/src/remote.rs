//! Remote-directory detection for the window commands.
//!
//! Editors address files on remote machines with specs like
//! `/ssh:user@host:/srv/app` or plain `user@host:/srv/app`. When a window
//! command runs against such a directory, the shell in the new pane is local,
//! so an `ssh` login must be sent before the `cd`.

/// A parsed remote directory spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteContext {
    pub user: Option<String>,
    pub host: String,
    pub path: String,
}

impl RemoteContext {
    /// The intermediate login command sent before the directory change.
    pub fn login_command(&self) -> String {
        match &self.user {
            Some(user) => format!("ssh {user}@{}", self.host),
            None => format!("ssh {}", self.host),
        }
    }
}

fn split_host_part(host_part: &str) -> (Option<String>, String) {
    match host_part.split_once('@') {
        Some((user, host)) => (Some(user.to_string()), host.to_string()),
        None => (None, host_part.to_string()),
    }
}

/// Parse a directory spec into a [`RemoteContext`], or `None` for local
/// paths.
///
/// Recognized forms: `/ssh:[user@]host:path` (editor remote syntax) and
/// `[user@]host:path`. The bare form requires the `@` to be present so local
/// paths containing a colon are not misread.
pub fn parse_remote_dir(spec: &str) -> Option<RemoteContext> {
    if let Some(rest) = spec.strip_prefix("/ssh:") {
        let (host_part, path) = rest.split_once(':')?;
        if host_part.is_empty() || path.is_empty() {
            return None;
        }
        let (user, host) = split_host_part(host_part);
        return Some(RemoteContext {
            user,
            host,
            path: path.to_string(),
        });
    }

    if spec.contains('@') && !spec.starts_with('/') {
        let (host_part, path) = spec.split_once(':')?;
        if host_part.is_empty() || path.is_empty() || !host_part.contains('@') {
            return None;
        }
        let (user, host) = split_host_part(host_part);
        return Some(RemoteContext {
            user,
            host,
            path: path.to_string(),
        });
    }

    None
}
