use std::fmt;

/// The context a fixture was played in. Domestic fixtures carry the league's country,
/// continental fixtures bring together clubs of several countries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Competition {
    Domestic(String),
    Continental
}

impl Competition {
    /// Maps a context name to a competition. `continental` is the sentinel name used for
    /// cross-country fixtures (e.g. "Europe").
    pub fn from_context(context: &str, continental: &str) -> Competition {
        if context == continental {
            Competition::Continental
        } else {
            Competition::Domestic(context.to_string())
        }
    }

    pub fn is_continental(&self) -> bool {
        matches!(self, Competition::Continental)
    }

    /// Name of the context as written in the results data
    pub fn context_name<'a>(&'a self, continental: &'a str) -> &'a str {
        match self {
            Competition::Domestic(country) => country.as_str(),
            Competition::Continental => continental
        }
    }
}

impl fmt::Display for Competition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Competition::Domestic(country) => write!(f, "{}", country),
            Competition::Continental => write!(f, "continental")
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::structures::competition::Competition;

    #[test]
    fn test_from_context_domestic() {
        let competition = Competition::from_context("France", "Europe");

        assert_eq!(competition, Competition::Domestic("France".to_string()));
        assert!(!competition.is_continental());
    }

    #[test]
    fn test_from_context_continental() {
        let competition = Competition::from_context("Europe", "Europe");

        assert_eq!(competition, Competition::Continental);
        assert!(competition.is_continental());
    }

    #[test]
    fn test_context_name() {
        assert_eq!(Competition::Continental.context_name("Europe"), "Europe");
        assert_eq!(Competition::Domestic("Greece".to_string()).context_name("Europe"), "Greece");
    }
}
