use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Approval status of one athlete's membership in a team
///
/// New memberships start as `Pending` and are resolved to `Approved` or
/// `Declined` through administrative workflows outside this crate. A
/// `Declined` membership must carry a non-empty comment explaining the
/// decision; the other statuses must not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MembershipStatus {
    /// Membership request awaits a decision
    Pending,
    /// Membership request was approved
    Approved,
    /// Membership request was declined
    Declined,
}

impl MembershipStatus {
    /// Whether this status requires an accompanying comment
    pub fn requires_comment(&self) -> bool {
        matches!(self, MembershipStatus::Declined)
    }

    /// Canonical lowercase name, as stored by repositories
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipStatus::Pending => "pending",
            MembershipStatus::Approved => "approved",
            MembershipStatus::Declined => "declined",
        }
    }
}

impl std::fmt::Display for MembershipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MembershipStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(MembershipStatus::Pending),
            "approved" => Ok(MembershipStatus::Approved),
            "declined" => Ok(MembershipStatus::Declined),
            other => Err(format!("Unknown membership status: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_declined_requires_comment() {
        assert!(!MembershipStatus::Pending.requires_comment());
        assert!(!MembershipStatus::Approved.requires_comment());
        assert!(MembershipStatus::Declined.requires_comment());
    }

    #[test]
    fn status_display() {
        assert_eq!(MembershipStatus::Pending.to_string(), "pending");
        assert_eq!(MembershipStatus::Approved.to_string(), "approved");
        assert_eq!(MembershipStatus::Declined.to_string(), "declined");
    }

    #[test]
    fn status_parses_canonical_names() {
        assert_eq!(
            "pending".parse::<MembershipStatus>().unwrap(),
            MembershipStatus::Pending
        );
        assert_eq!(
            "approved".parse::<MembershipStatus>().unwrap(),
            MembershipStatus::Approved
        );
        assert_eq!(
            "declined".parse::<MembershipStatus>().unwrap(),
            MembershipStatus::Declined
        );
    }

    #[test]
    fn status_rejects_unknown_name() {
        assert!("rejected".parse::<MembershipStatus>().is_err());
    }
}
