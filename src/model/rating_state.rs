use indexmap::IndexMap;
use itertools::Itertools;

use crate::model::structures::match_record::EntityId;

/// Current rating of every club seen so far, in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingState {
    ratings: IndexMap<EntityId, i64>
}

impl RatingState {
    pub fn new() -> RatingState {
        RatingState::default()
    }

    pub fn get(&self, entity: &str) -> Option<i64> {
        self.ratings.get(entity).copied()
    }

    /// The club's current rating, or `default_rating` if it has not played yet
    pub fn get_or(&self, entity: &str, default_rating: i64) -> i64 {
        self.get(entity).unwrap_or(default_rating)
    }

    pub fn set(&mut self, entity: &str, rating: i64) {
        match self.ratings.get_mut(entity) {
            Some(current) => *current = rating,
            None => {
                self.ratings.insert(entity.to_string(), rating);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EntityId, i64)> {
        self.ratings.iter().map(|(entity, rating)| (entity, *rating))
    }

    /// Ratings sorted descending. Ties keep first-appearance order.
    pub fn standings(&self) -> Vec<(&EntityId, i64)> {
        self.iter().sorted_by(|(_, a), (_, b)| b.cmp(a)).collect()
    }
}

impl<E: Into<EntityId>> FromIterator<(E, i64)> for RatingState {
    fn from_iter<T: IntoIterator<Item = (E, i64)>>(iter: T) -> Self {
        RatingState {
            ratings: iter.into_iter().map(|(entity, rating)| (entity.into(), rating)).collect()
        }
    }
}
