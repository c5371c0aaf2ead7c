//! Enforcement-time IP policy derived from a link's rule rows.

use std::collections::HashSet;
use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use super::ip_rule::DownloadLinkIpAddress;

/// The effective IP policy of a download link.
///
/// Derived from the link's persisted rule rows. Allow-list rows take
/// precedence: if any exist, deny-list rows are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IpPolicy {
    /// No IP rules; every address is permitted.
    #[default]
    Unrestricted,
    /// Only the listed addresses are permitted.
    Allow(HashSet<IpAddr>),
    /// The listed addresses are blocked; all others are permitted.
    Deny(HashSet<IpAddr>),
}

impl IpPolicy {
    /// Derive the policy from a link's persisted rule rows.
    ///
    /// Stored addresses were format-checked at insertion time, so rows
    /// that fail to parse here are skipped.
    pub fn from_rules(rules: &[DownloadLinkIpAddress]) -> Self {
        let parse = |allowed: bool| -> HashSet<IpAddr> {
            rules
                .iter()
                .filter(|r| r.allowed == allowed)
                .filter_map(|r| r.ip_address.parse().ok())
                .collect()
        };

        let allow = parse(true);
        if !allow.is_empty() {
            return Self::Allow(allow);
        }
        let deny = parse(false);
        if !deny.is_empty() {
            return Self::Deny(deny);
        }
        Self::Unrestricted
    }

    /// Check whether the given address is permitted by this policy.
    pub fn permits(&self, ip: IpAddr) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::Allow(addresses) => addresses.contains(&ip),
            Self::Deny(addresses) => !addresses.contains(&ip),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(id: i64, ip_address: &str, allowed: bool) -> DownloadLinkIpAddress {
        DownloadLinkIpAddress {
            id,
            download_link_id: 1,
            ip_address: ip_address.to_string(),
            allowed,
        }
    }

    fn ip(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_rules_permits_everything() {
        let policy = IpPolicy::from_rules(&[]);
        assert_eq!(policy, IpPolicy::Unrestricted);
        assert!(policy.permits(ip("127.0.0.1")));
        assert!(policy.permits(ip("::1")));
    }

    #[test]
    fn test_allow_list_permits_only_listed() {
        let policy = IpPolicy::from_rules(&[
            rule(1, "127.0.0.1", true),
            rule(2, "127.0.0.2", true),
        ]);
        assert!(policy.permits(ip("127.0.0.1")));
        assert!(policy.permits(ip("127.0.0.2")));
        assert!(!policy.permits(ip("10.0.0.1")));
    }

    #[test]
    fn test_deny_list_blocks_only_listed() {
        let policy = IpPolicy::from_rules(&[rule(1, "127.0.0.1", false)]);
        assert!(!policy.permits(ip("127.0.0.1")));
        assert!(policy.permits(ip("10.0.0.1")));
    }

    #[test]
    fn test_allow_rows_take_precedence_over_deny_rows() {
        let policy = IpPolicy::from_rules(&[
            rule(1, "127.0.0.1", false),
            rule(2, "127.0.0.2", true),
        ]);
        assert!(matches!(policy, IpPolicy::Allow(_)));
        assert!(policy.permits(ip("127.0.0.2")));
        // Deny entry is ignored once an allow-list exists; the address is
        // still not permitted because it is absent from the allow-list.
        assert!(!policy.permits(ip("127.0.0.1")));
    }

    #[test]
    fn test_ipv6_addresses() {
        let policy = IpPolicy::from_rules(&[rule(1, "::1", true)]);
        assert!(policy.permits(ip("::1")));
        assert!(!policy.permits(ip("::2")));
    }
}
