use std::fmt;
use std::str::FromStr;

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// The implicit version of a project without a version file
    pub fn initial() -> Self {
        Version::default()
    }

    /// Parse a bare `MAJOR.MINOR.PATCH` string.
    ///
    /// Every component must be one or more ASCII digits and fit in a `u64`.
    /// Signs, whitespace, prefixes and suffixes are rejected.
    pub fn parse(text: &str) -> Option<Self> {
        let parts: Vec<&str> = text.split('.').collect();
        if parts.len() != 3 {
            return None;
        }

        let component = |part: &str| -> Option<u64> {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            part.parse::<u64>().ok()
        };

        Some(Version {
            major: component(parts[0])?,
            minor: component(parts[1])?,
            patch: component(parts[2])?,
        })
    }

    /// Derive the next version for the given marker.
    ///
    /// Bumping a component resets every lower component to zero. Returns
    /// `None` when the bumped component would overflow `u64`.
    pub fn bump(&self, marker: Marker) -> Option<Self> {
        let next = match marker {
            Marker::Major => Version {
                major: self.major.checked_add(1)?,
                minor: 0,
                patch: 0,
            },
            Marker::Minor => Version {
                major: self.major,
                minor: self.minor.checked_add(1)?,
                patch: 0,
            },
            Marker::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch.checked_add(1)?,
            },
        };
        Some(next)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Version::parse(s).ok_or_else(|| format!("invalid version '{}': expected X.Y.Z", s))
    }
}

/// Which version component a commit asks to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Major,
    Minor,
    Patch,
}

impl Marker {
    /// Markers in precedence order, highest first
    pub const PRECEDENCE: [Marker; 3] = [Marker::Major, Marker::Minor, Marker::Patch];

    /// The literal token that selects this marker in a commit message
    pub fn token(&self) -> &'static str {
        match self {
            Marker::Major => "[major]",
            Marker::Minor => "[minor]",
            Marker::Patch => "[patch]",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Marker::Major => "major",
            Marker::Minor => "minor",
            Marker::Patch => "patch",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
    }

    #[test]
    fn test_version_parse_leading_zeros_normalised() {
        let v = Version::parse("01.002.0").unwrap();
        assert_eq!(v, Version::new(1, 2, 0));
        assert_eq!(v.to_string(), "1.2.0");
    }

    #[test]
    fn test_version_parse_invalid() {
        assert!(Version::parse("1.2").is_none());
        assert!(Version::parse("1.2.3.4").is_none());
        assert!(Version::parse("v1.2.3").is_none());
        assert!(Version::parse("1.+2.3").is_none());
        assert!(Version::parse("1..3").is_none());
        assert!(Version::parse("1.2.3-rc1").is_none());
        assert!(Version::parse(" 1.2.3").is_none());
        assert!(Version::parse("not-a-version").is_none());
    }

    #[test]
    fn test_version_parse_overflow() {
        assert!(Version::parse("99999999999999999999999.0.0").is_none());
    }

    #[test]
    fn test_version_from_str() {
        let v: Version = "4.5.6".parse().unwrap();
        assert_eq!(v, Version::new(4, 5, 6));
        assert!("4.5".parse::<Version>().is_err());
    }

    #[test]
    fn test_version_bump_major() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(Marker::Major), Some(Version::new(2, 0, 0)));
    }

    #[test]
    fn test_version_bump_minor() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(Marker::Minor), Some(Version::new(1, 3, 0)));
    }

    #[test]
    fn test_version_bump_patch() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(Marker::Patch), Some(Version::new(1, 2, 4)));
    }

    #[test]
    fn test_bump_reset_semantics_across_inputs() {
        for major in [0, 1, 7, 120] {
            for minor in [0, 3, 99] {
                for patch in [0, 1, 42] {
                    let v = Version::new(major, minor, patch);
                    assert_eq!(v.bump(Marker::Major), Some(Version::new(major + 1, 0, 0)));
                    assert_eq!(v.bump(Marker::Minor), Some(Version::new(major, minor + 1, 0)));
                    assert_eq!(
                        v.bump(Marker::Patch),
                        Some(Version::new(major, minor, patch + 1))
                    );
                }
            }
        }
    }

    #[test]
    fn test_bump_does_not_mutate_original() {
        let v = Version::new(0, 9, 9);
        let _ = v.bump(Marker::Minor);
        assert_eq!(v, Version::new(0, 9, 9));
    }

    #[test]
    fn test_bump_overflow_is_refused() {
        let v = Version::new(u64::MAX, u64::MAX, u64::MAX);
        assert_eq!(v.bump(Marker::Major), None);
        assert_eq!(v.bump(Marker::Minor), None);
        assert_eq!(v.bump(Marker::Patch), None);
    }

    #[test]
    fn test_bump_at_max_of_lower_component() {
        // The reset component may sit at the maximum
        let v = Version::new(1, 2, u64::MAX);
        assert_eq!(v.bump(Marker::Minor), Some(Version::new(1, 3, 0)));
        assert_eq!(v.bump(Marker::Patch), None);
    }

    #[test]
    fn test_version_display() {
        assert_eq!(Version::new(1, 2, 3).to_string(), "1.2.3");
        assert_eq!(Version::initial().to_string(), "0.0.0");
    }

    #[test]
    fn test_marker_tokens() {
        assert_eq!(Marker::Major.token(), "[major]");
        assert_eq!(Marker::Minor.to_string(), "minor");
        assert_eq!(Marker::PRECEDENCE[0], Marker::Major);
    }
}
