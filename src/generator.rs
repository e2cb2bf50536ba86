// src/generator.rs
//
// Synthetic listing generator. Stands in for a real places lookup: same
// inputs (query + optional location), same output (a list of records).

use rand::{ Rng, SeedableRng, rngs::StdRng };

use crate::{
    business::BusinessRecord,
    config::consts::*,
    error::SearchError,
};

pub const CATEGORIES: &[&str] = &[
    "Restaurant", "Cafe", "Store", "Salon", "Gym", "Pharmacy", "Bakery", "Hotel",
];

pub const NAME_TOKENS: &[&str] = &[
    "Golden", "Royal", "Prime", "Elite", "Modern", "Classic", "Fresh", "Urban", "Cozy", "Grand",
];

pub const STREETS: &[&str] = &[
    "Main St", "Oak Ave", "Pine Rd", "Maple Dr", "Cedar Ln", "Elm St", "Park Ave", "Lake Rd",
];

/// A validated search request. The query is kept exactly as typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    query: String,
    location: String,
}

impl SearchQuery {
    pub fn new(query: &str, location: &str) -> Result<Self, SearchError> {
        if query.trim().is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        Ok(Self { query: s!(query), location: s!(location) })
    }

    pub fn query(&self) -> &str { &self.query }

    pub fn location(&self) -> &str { &self.location }

    /// Location used in addresses; only an empty field falls back to the default.
    pub fn location_or_default(&self) -> &str {
        if self.location.is_empty() { DEFAULT_LOCATION } else { &self.location }
    }
}

/// Anything that can answer a search. The mock below is the only one today;
/// a real provider would slot in behind the same trait.
pub trait BusinessSource: Send + Sync {
    fn search(&self, request: &SearchQuery) -> Vec<BusinessRecord>;
}

/// Random listings. With a seed, the same request always yields the same records.
#[derive(Clone, Debug, Default)]
pub struct MockSource {
    seed: Option<u64>,
}

impl MockSource {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }
}

impl BusinessSource for MockSource {
    fn search(&self, request: &SearchQuery) -> Vec<BusinessRecord> {
        match self.seed {
            Some(seed) => generate_with(&mut StdRng::seed_from_u64(seed), request),
            None => generate_with(&mut rand::rng(), request),
        }
    }
}

/// Validate, then generate with the thread-local RNG.
pub fn generate(query: &str, location: &str) -> Result<Vec<BusinessRecord>, SearchError> {
    let request = SearchQuery::new(query, location)?;
    Ok(MockSource::default().search(&request))
}

pub fn generate_with<R: Rng>(rng: &mut R, request: &SearchQuery) -> Vec<BusinessRecord> {
    let count = rng.random_range(MIN_RESULTS..=MAX_RESULTS);
    (0..count).map(|_| one_record(rng, request)).collect()
}

fn pick<R: Rng>(rng: &mut R, vocab: &'static [&'static str]) -> &'static str {
    vocab[rng.random_range(0..vocab.len())]
}

fn one_record<R: Rng>(rng: &mut R, request: &SearchQuery) -> BusinessRecord {
    let category = pick(rng, CATEGORIES);
    let token = pick(rng, NAME_TOKENS);
    let street = pick(rng, STREETS);
    let street_num: u32 = rng.random_range(1..=999);

    let area: u32 = rng.random_range(100..=999);
    let exchange: u32 = rng.random_range(100..=999);
    let line: u32 = rng.random_range(1000..=9999);

    let postal: u32 = rng.random_range(10000..=99999);

    // Uniform over [3.0, 5.0), rounded to one decimal (5.0 reachable by rounding).
    let raw = rng.random::<f64>() * (RATING_MAX - RATING_MIN) + RATING_MIN;
    let rating = (raw * 10.0).round() / 10.0;
    let reviews = rng.random_range(REVIEWS_MIN..=REVIEWS_MAX);

    BusinessRecord {
        name: compose_name(token, request.query(), category),
        phone: format!("+1 ({area}) {exchange}-{line}"),
        address: format!(
            "{street_num} {street}, {}, {REGION_CODE} {postal}",
            request.location_or_default()
        ),
        rating: Some(rating),
        reviews: Some(reviews),
    }
}

// The category only shows when the query is empty, which validation rules out.
fn compose_name(token: &str, query: &str, category: &str) -> String {
    let subject = if query.is_empty() { category } else { query };
    join!(token, " ", subject)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_query_is_rejected() {
        assert_eq!(SearchQuery::new("  \t ", "Chicago"), Err(SearchError::EmptyQuery));
        assert_eq!(generate("", "Chicago"), Err(SearchError::EmptyQuery));
    }

    #[test]
    fn query_is_kept_verbatim() {
        let q = SearchQuery::new("  Coffee shops ", "").unwrap();
        assert_eq!(q.query(), "  Coffee shops ");
        assert_eq!(q.location_or_default(), "New York");
    }

    #[test]
    fn whitespace_location_is_not_replaced() {
        let q = SearchQuery::new("Gyms", " ").unwrap();
        assert_eq!(q.location_or_default(), " ");
    }

    #[test]
    fn name_prefers_query_over_category() {
        assert_eq!(compose_name("Royal", "Coffee shops", "Bakery"), "Royal Coffee shops");
        assert_eq!(compose_name("Royal", "", "Bakery"), "Royal Bakery");
    }

    #[test]
    fn seeded_source_is_reproducible() {
        let q = SearchQuery::new("Gyms", "Austin").unwrap();
        let a = MockSource::new(Some(7)).search(&q);
        let b = MockSource::new(Some(7)).search(&q);
        assert_eq!(a, b);
    }

    #[test]
    fn record_fields_stay_in_range() {
        let q = SearchQuery::new("Bakeries", "Denver").unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..50 {
            let rows = generate_with(&mut rng, &q);
            assert!((MIN_RESULTS..=MAX_RESULTS).contains(&rows.len()));
            for r in rows {
                let rating = r.rating.unwrap();
                assert!((RATING_MIN..=RATING_MAX).contains(&rating));
                assert_eq!((rating * 10.0).round() / 10.0, rating);
                assert!((REVIEWS_MIN..=REVIEWS_MAX).contains(&r.reviews.unwrap()));
                assert!(NAME_TOKENS.iter().any(|t| r.name == format!("{t} Bakeries")));
                assert!(STREETS.iter().any(|s| r.address.contains(s)));
            }
        }
    }
}
