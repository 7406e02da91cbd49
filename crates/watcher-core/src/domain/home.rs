/// Home-range classifier.
///
/// Built from a comma-separated prefix list such as
/// `"192.168.178.*,10.0.0.,172.16."`. Matching is a plain string prefix
/// test; there are no CIDR semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeRanges {
    prefixes: Vec<String>,
}

impl HomeRanges {
    /// Parse a comma-separated list. Entries are trimmed, trailing `*`
    /// wildcards are stripped and empty entries dropped.
    pub fn parse(list: &str) -> Self {
        let prefixes = list
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| p.trim_end_matches('*').to_string())
            .collect();

        Self { prefixes }
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn contains(&self, ip: &str) -> bool {
        !ip.is_empty() && self.prefixes.iter().any(|p| ip.starts_with(p.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_wildcards_and_blanks() {
        let ranges = HomeRanges::parse(" 192.168.178.* , ,10.0.0., 172.16.**");
        assert_eq!(ranges.prefixes(), ["192.168.178.", "10.0.0.", "172.16."]);
    }

    #[test]
    fn test_prefix_match() {
        let ranges = HomeRanges::parse("192.168.178.*,10.0.0.");
        assert!(ranges.contains("192.168.178.5"));
        assert!(ranges.contains("10.0.0.254"));
        assert!(!ranges.contains("8.8.8.8"));
        assert!(!ranges.contains("192.168.1.5"));
        assert!(!ranges.contains(""));
    }

    #[test]
    fn test_plain_string_prefix_has_no_netmask_semantics() {
        let ranges = HomeRanges::parse("10.1");
        assert!(ranges.contains("10.1.2.3"));
        assert!(ranges.contains("10.100.0.1"));
    }

    #[test]
    fn test_empty_list_matches_nothing() {
        let ranges = HomeRanges::parse("");
        assert!(ranges.prefixes().is_empty());
        assert!(!ranges.contains("192.168.178.5"));
    }
}
