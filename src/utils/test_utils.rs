use crate::model::{
    country_membership::CountryMembership,
    structures::{competition::Competition, match_record::MatchRecord}
};
use chrono::{Duration, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("Invalid test date")
}

pub fn generate_domestic_record(
    date: NaiveDate,
    country: &str,
    home: &str,
    away: &str,
    score: Option<&str>
) -> MatchRecord {
    MatchRecord {
        date,
        competition: Competition::Domestic(country.to_string()),
        home: home.to_string(),
        away: away.to_string(),
        score: score.map(str::to_string)
    }
}

pub fn generate_continental_record(date: NaiveDate, home: &str, away: &str, score: Option<&str>) -> MatchRecord {
    MatchRecord {
        date,
        competition: Competition::Continental,
        home: home.to_string(),
        away: away.to_string(),
        score: score.map(str::to_string)
    }
}

pub fn generate_membership(entries: &[(&str, &str)]) -> CountryMembership {
    entries.iter().map(|(entity, country)| (*entity, *country)).collect()
}

/// Generates a season of fixtures: a double round robin in every country, followed by
/// continental fixtures between the countries' clubs. Roughly 5% of fixtures have no
/// score and 1% a malformed one.
///
/// Results are reproducible for a given `seed`. Records are sorted by date.
pub fn generate_season(seed: u64, countries: &[&str], clubs_per_country: usize) -> Vec<MatchRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let start = date(2018, 8, 1);
    let mut records = Vec::new();

    if countries.is_empty() {
        return records;
    }

    let clubs: Vec<Vec<String>> = countries
        .iter()
        .map(|country| (1..=clubs_per_country).map(|i| format!("{} {}", country, i)).collect())
        .collect();

    for (country, country_clubs) in countries.iter().zip(&clubs) {
        let mut day = 0;
        for home in country_clubs {
            for away in country_clubs {
                if home == away {
                    continue;
                }

                records.push(generate_domestic_record(
                    start + Duration::days(day),
                    country,
                    home,
                    away,
                    random_score(&mut rng).as_deref()
                ));
                day += 1;
            }
        }
    }

    // Continental fixtures: each club hosts a random club from the next country
    let continental_start = start + Duration::days(7);
    for (i, country_clubs) in clubs.iter().enumerate() {
        let opponents = &clubs[(i + 1) % clubs.len()];
        for (day, home) in country_clubs.iter().enumerate() {
            let away = &opponents[rng.random_range(0..opponents.len())];
            records.push(generate_continental_record(
                continental_start + Duration::days(day as i64 * 3),
                home,
                away,
                random_score(&mut rng).as_deref()
            ));
        }
    }

    records.sort_by_key(|r| r.date);
    records
}

fn random_score(rng: &mut ChaCha8Rng) -> Option<String> {
    let roll: f64 = rng.random();
    if roll < 0.05 {
        return None;
    }

    if roll < 0.06 {
        return Some("P - P".to_string());
    }

    Some(format!("{} - {}", rng.random_range(0..5), rng.random_range(0..5)))
}
