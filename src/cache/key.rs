use std::fmt;

/// What: Normalized signature of an API lookup.
///
/// Details:
/// - Built only through the constructors below, which normalize their input,
///   so equal queries always produce equal keys.
/// - Variants are distinct, so an ingredient query can never collide with a
///   cuisine query or a detail lookup regardless of the strings involved.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Ingredient search; lowercased, trimmed, sorted and deduplicated.
    Ingredients(Vec<String>),
    /// Cuisine search with an optional meal type.
    Cuisine {
        /// Lowercased cuisine name.
        cuisine: String,
        /// Lowercased meal type; `None` when not given or blank.
        meal_type: Option<String>,
    },
    /// Detail lookup for one recipe id.
    Details(u64),
}

/// Trim and lowercase one query term.
fn normalize(term: &str) -> String {
    term.trim().to_lowercase()
}

impl CacheKey {
    /// What: Build the key for an ingredient search.
    ///
    /// Inputs:
    /// - `ingredients`: Raw terms as typed by the user
    ///
    /// Output:
    /// - Key whose term list is trimmed, lowercased, free of blanks, sorted and
    ///   deduplicated.
    #[must_use]
    pub fn ingredients<S: AsRef<str>>(ingredients: &[S]) -> Self {
        let mut terms: Vec<String> = ingredients
            .iter()
            .map(|s| normalize(s.as_ref()))
            .filter(|s| !s.is_empty())
            .collect();
        terms.sort();
        terms.dedup();
        Self::Ingredients(terms)
    }

    /// What: Build the key for a cuisine search.
    ///
    /// Inputs:
    /// - `cuisine`: Cuisine name in any case
    /// - `meal_type`: Optional meal type; blank is the same as absent
    #[must_use]
    pub fn cuisine(cuisine: &str, meal_type: Option<&str>) -> Self {
        Self::Cuisine {
            cuisine: normalize(cuisine),
            meal_type: meal_type.map(normalize).filter(|m| !m.is_empty()),
        }
    }

    /// Key for a recipe detail lookup.
    #[must_use]
    pub const fn details(id: u64) -> Self {
        Self::Details(id)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ingredients(terms) => write!(f, "ingredients:{}", terms.join(",")),
            Self::Cuisine { cuisine, meal_type } => {
                write!(f, "cuisine:{cuisine}:{}", meal_type.as_deref().unwrap_or(""))
            }
            Self::Details(id) => write!(f, "details:{id}"),
        }
    }
}
