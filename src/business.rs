// src/business.rs

/// One synthetic business listing.
///
/// Records are never edited after generation; a new search replaces the
/// whole result set.
#[derive(Clone, Debug, PartialEq)]
pub struct BusinessRecord {
    pub name: String,
    pub phone: String,
    pub address: String,
    /// 3.0..=5.0, one decimal place.
    pub rating: Option<f64>,
    /// 10..=509
    pub reviews: Option<u32>,
}

impl BusinessRecord {
    pub fn rating_text(&self) -> String {
        match self.rating {
            Some(r) => format!("{r:.1}"),
            None => s!(crate::config::consts::PLACEHOLDER),
        }
    }

    pub fn reviews_text(&self) -> String {
        match self.reviews {
            Some(n) => n.to_string(),
            None => s!(crate::config::consts::PLACEHOLDER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(rating: Option<f64>, reviews: Option<u32>) -> BusinessRecord {
        BusinessRecord {
            name: s!("Golden Tea"),
            phone: s!("+1 (212) 555-0101"),
            address: s!("12 Main St, Boston, NY 02110"),
            rating,
            reviews,
        }
    }

    #[test]
    fn optional_fields_fall_back_to_placeholder() {
        let r = rec(None, None);
        assert_eq!(r.rating_text(), "N/A");
        assert_eq!(r.reviews_text(), "N/A");
    }

    #[test]
    fn rating_keeps_one_decimal() {
        let r = rec(Some(4.0), Some(42));
        assert_eq!(r.rating_text(), "4.0");
        assert_eq!(r.reviews_text(), "42");
    }
}
