//! Zone and record name helpers
//!
//! IONOS record names are fully qualified (`www.example.com`), zone names are
//! bare (`example.com`). Callers tend to carry FQDNs with a trailing dot, so
//! every comparison goes through [`normalize_domain_name`].

use crate::types::Zone;

/// 去掉域名末尾的点并转为小写
pub fn normalize_domain_name(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}

/// Pick the zone that hosts `domain`.
///
/// A zone matches when its name equals the domain or is a dot-separated
/// suffix of it; the longest match wins, so `sub.example.com` is preferred
/// over `example.com` when both are hosted.
pub fn find_zone_for_domain<'a>(zones: &'a [Zone], domain: &str) -> Option<&'a Zone> {
    let domain = normalize_domain_name(domain);

    zones
        .iter()
        .filter(|zone| {
            let zone_name = normalize_domain_name(&zone.name);
            !zone_name.is_empty()
                && (domain == zone_name || domain.ends_with(&format!(".{zone_name}")))
        })
        .max_by_key(|zone| normalize_domain_name(&zone.name).len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(id: &str, name: &str) -> Zone {
        Zone {
            id: id.to_string(),
            name: name.to_string(),
            zone_type: "NATIVE".to_string(),
        }
    }

    #[test]
    fn normalize_strips_dot_and_case() {
        assert_eq!(normalize_domain_name("WWW.Example.COM."), "www.example.com");
    }

    #[test]
    fn find_zone_longest_suffix() {
        let zones = vec![zone("1", "example.com"), zone("2", "sub.example.com")];
        let found = find_zone_for_domain(&zones, "_acme-challenge.a.sub.example.com.");
        assert_eq!(found.map(|z| z.id.as_str()), Some("2"));
    }

    #[test]
    fn find_zone_apex() {
        let zones = vec![zone("1", "example.com")];
        assert_eq!(
            find_zone_for_domain(&zones, "Example.com").map(|z| z.id.as_str()),
            Some("1")
        );
    }

    #[test]
    fn find_zone_requires_label_boundary() {
        let zones = vec![zone("1", "ample.com")];
        assert!(find_zone_for_domain(&zones, "example.com").is_none());
    }

    #[test]
    fn find_zone_none() {
        assert!(find_zone_for_domain(&[], "example.com").is_none());
    }
}
