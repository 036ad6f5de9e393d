use std::fmt;

/// One commit in the `baseline..HEAD` range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// First paragraph of the message on one line, as git's `%s` shows it
    pub subject: String,
    /// Full raw message, subject included
    pub body: String,
}

impl CommitRecord {
    /// Build a record from a full commit message
    pub fn from_message(message: impl Into<String>) -> Self {
        let body = message.into();
        let subject = body
            .lines()
            .map(str::trim)
            .skip_while(|line| line.is_empty())
            .take_while(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        CommitRecord { subject, body }
    }
}

/// Change impact of a commit range, derived from all its messages at once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImpactFlags {
    pub breaking: bool,
    pub feature: bool,
}

impl fmt::Display for ImpactFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.breaking, self.feature) {
            (true, _) => write!(f, "breaking"),
            (false, true) => write!(f, "feature"),
            (false, false) => write!(f, "fix"),
        }
    }
}
