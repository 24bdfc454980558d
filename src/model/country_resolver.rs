use thiserror::Error;

use crate::model::{country_membership::CountryMembership, structures::competition::Competition};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("No domestic country known for '{0}'")]
    UnresolvedEntity(String)
}

/// Country attributed to each side of a fixture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPair {
    pub home_country: String,
    pub away_country: String
}

/// Attributes a country to both sides of a fixture.
///
/// In a domestic league both clubs are attributed the league's country, whatever the
/// membership says. In a continental competition each club is attributed its primary
/// country (see [`CountryMembership::primary_country`]).
pub fn resolve_pair(
    competition: &Competition,
    home: &str,
    away: &str,
    membership: &CountryMembership
) -> Result<ResolvedPair, ResolveError> {
    match competition {
        Competition::Domestic(country) => Ok(ResolvedPair {
            home_country: country.clone(),
            away_country: country.clone()
        }),
        Competition::Continental => Ok(ResolvedPair {
            home_country: resolve_entity(home, membership)?,
            away_country: resolve_entity(away, membership)?
        })
    }
}

fn resolve_entity(entity: &str, membership: &CountryMembership) -> Result<String, ResolveError> {
    membership
        .primary_country(entity)
        .map(str::to_string)
        .ok_or_else(|| ResolveError::UnresolvedEntity(entity.to_string()))
}

#[cfg(test)]
mod tests {
    use crate::model::{
        country_membership::CountryMembership,
        country_resolver::{resolve_pair, ResolveError, ResolvedPair},
        structures::competition::Competition
    };

    fn membership() -> CountryMembership {
        vec![
            ("Olympiakos", "Greece"),
            ("APOEL", "Cyprus"),
            ("Aris", "Greece"),
            ("Aris", "Cyprus"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_domestic_context_wins() {
        let pair = resolve_pair(
            &Competition::Domestic("Greece".to_string()),
            "APOEL",
            "Unknown FC",
            &membership()
        );

        assert_eq!(
            pair,
            Ok(ResolvedPair {
                home_country: "Greece".to_string(),
                away_country: "Greece".to_string()
            })
        );
    }

    #[test]
    fn test_continental_uses_membership() {
        let pair = resolve_pair(&Competition::Continental, "Olympiakos", "APOEL", &membership()).unwrap();

        assert_eq!(pair.home_country, "Greece");
        assert_eq!(pair.away_country, "Cyprus");
    }

    #[test]
    fn test_continental_ambiguous_entity() {
        let pair = resolve_pair(&Competition::Continental, "Aris", "Olympiakos", &membership()).unwrap();

        assert_eq!(pair.home_country, "Cyprus");
    }

    #[test]
    fn test_continental_unresolved() {
        let home = resolve_pair(&Competition::Continental, "Liverpool", "APOEL", &membership());
        let away = resolve_pair(&Competition::Continental, "APOEL", "Liverpool", &membership());

        assert_eq!(home, Err(ResolveError::UnresolvedEntity("Liverpool".to_string())));
        assert_eq!(away, Err(ResolveError::UnresolvedEntity("Liverpool".to_string())));
    }
}
