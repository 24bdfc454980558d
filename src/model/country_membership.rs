use std::collections::{BTreeSet, HashMap};

use itertools::Itertools;

use crate::model::structures::{
    competition::Competition,
    match_record::{EntityId, MatchRecord}
};

/// The set of domestic leagues each club has played in.
///
/// Countries are kept ordered so that resolving a club with several candidate
/// countries is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryMembership {
    countries: HashMap<EntityId, BTreeSet<String>>
}

impl CountryMembership {
    pub fn new() -> CountryMembership {
        CountryMembership::default()
    }

    /// Builds the membership from the home sides of every domestic fixture.
    /// Away sides are not needed: in a league every club hosts at least once.
    pub fn from_records(records: &[MatchRecord]) -> CountryMembership {
        let mut membership = CountryMembership::new();

        for record in records {
            if let Competition::Domestic(country) = &record.competition {
                membership.insert(&record.home, country);
            }
        }

        membership
    }

    pub fn insert(&mut self, entity: &str, country: &str) {
        self.countries
            .entry(entity.to_string())
            .or_default()
            .insert(country.to_string());
    }

    pub fn contains(&self, entity: &str) -> bool {
        self.countries.contains_key(entity)
    }

    pub fn candidates(&self, entity: &str) -> Option<&BTreeSet<String>> {
        self.countries.get(entity)
    }

    /// The country a club is attributed to outside of its domestic league:
    /// the lexicographically smallest of its candidates.
    pub fn primary_country(&self, entity: &str) -> Option<&str> {
        self.candidates(entity)
            .and_then(|countries| countries.first())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Clubs seen in more than one domestic league, sorted by name.
    /// These usually are distinct clubs sharing a name.
    pub fn ambiguous(&self) -> Vec<(&EntityId, &BTreeSet<String>)> {
        self.countries
            .iter()
            .filter(|(_, countries)| countries.len() > 1)
            .sorted_by(|(a, _), (b, _)| a.cmp(b))
            .collect()
    }
}

impl<E: Into<EntityId>, C: Into<String>> FromIterator<(E, C)> for CountryMembership {
    fn from_iter<T: IntoIterator<Item = (E, C)>>(iter: T) -> Self {
        let mut membership = CountryMembership::new();
        for (entity, country) in iter {
            membership
                .countries
                .entry(entity.into())
                .or_default()
                .insert(country.into());
        }

        membership
    }
}
