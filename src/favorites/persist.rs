use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::state::Recipe;

/// JSON file holding the user's saved recipes.
#[derive(Clone, Debug)]
pub struct FavoritesStore {
    /// Location of the favorites file.
    path: PathBuf,
}

impl FavoritesStore {
    /// Store backed by the file at `path`; nothing is touched until used.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// What: Load saved recipes from disk.
    ///
    /// Output:
    /// - The stored list, or an empty list when the file is missing or malformed.
    ///
    /// Details:
    /// - A missing file is the normal first-run state and is not logged.
    /// - Read or parse failures are logged at warn level and otherwise ignored.
    #[must_use]
    pub fn load(&self) -> Vec<Recipe> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    tracing::warn!(
                        path = %self.path.display(),
                        error = %e,
                        "[Favorites] Failed to read favorites file"
                    );
                }
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<Recipe>>(&raw) {
            Ok(list) => {
                tracing::debug!(
                    path = %self.path.display(),
                    count = list.len(),
                    "[Favorites] Loaded favorites"
                );
                list
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "[Favorites] Favorites file is malformed; treating as empty"
                );
                Vec::new()
            }
        }
    }

    /// What: Overwrite the favorites file with `favorites`.
    ///
    /// Inputs:
    /// - `favorites`: Complete list to persist
    ///
    /// Output:
    /// - `Ok(())` once the file is written
    ///
    /// # Errors
    /// - Returns `Err` when the parent directory cannot be created or the file
    ///   cannot be written.
    ///
    /// Details:
    /// - The whole list is rewritten on every call, pretty printed with a
    ///   four-space indent.
    pub fn save(&self, favorites: &[Recipe]) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        favorites.serialize(&mut ser).map_err(io::Error::other)?;
        fs::write(&self.path, buf)?;
        tracing::debug!(
            path = %self.path.display(),
            count = favorites.len(),
            "[Favorites] Saved favorites"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::FavoritesStore;
    use crate::state::{Ingredient, Nutrient, Nutrition, Recipe};

    fn sample(id: u64) -> Recipe {
        Recipe {
            id,
            title: format!("Dish {id}"),
            ready_in_minutes: Some(25),
            servings: Some(2),
            cuisines: vec!["Italian".into()],
            source_name: Some("Kitchen".into()),
            source_url: Some(format!("https://example.com/{id}")),
            extended_ingredients: vec![Ingredient {
                amount: Some(0.5),
                unit: "cup".into(),
                name: "rice".into(),
            }],
            instructions: Some("<ol><li>Cook.</li></ol>".into()),
            nutrition: Some(Nutrition {
                nutrients: vec![Nutrient {
                    name: "Calories".into(),
                    amount: 321.5,
                    unit: "kcal".into(),
                }],
            }),
            aggregate_likes: Some(12),
            ..Recipe::default()
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FavoritesStore::new(dir.path().join("nested").join("favorites.json"));
        let list = vec![sample(1), sample(2)];
        store.save(&list).expect("save favorites");
        assert_eq!(store.load(), list);
    }

    #[test]
    fn long_decimal_amounts_reload_exactly() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FavoritesStore::new(dir.path().join("favorites.json"));
        let mut recipe = sample(4);
        recipe.extended_ingredients = [97.027_325_200_008_55, 14.505_507_100_057_383, 20.325_373_100_039_346]
            .into_iter()
            .map(|amount| Ingredient {
                amount: Some(amount),
                unit: "g".into(),
                name: "flour".into(),
            })
            .collect();
        if let Some(nutrition) = recipe.nutrition.as_mut() {
            nutrition.nutrients[0].amount = 0.1 + 0.2;
        }
        store.save(std::slice::from_ref(&recipe)).expect("save favorites");
        let loaded = store.load();
        assert_eq!(loaded, vec![recipe.clone()]);
        let bits = |r: &Recipe| -> Vec<u64> {
            r.extended_ingredients
                .iter()
                .filter_map(|i| i.amount.map(f64::to_bits))
                .collect()
        };
        assert_eq!(bits(&loaded[0]), bits(&recipe));
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FavoritesStore::new(dir.path().join("absent.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn malformed_file_loads_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("favorites.json");
        std::fs::write(&path, "{ not json").expect("write garbage");
        assert!(FavoritesStore::new(&path).load().is_empty());
    }

    #[test]
    fn saved_file_uses_four_space_indent_and_camel_case() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FavoritesStore::new(dir.path().join("favorites.json"));
        store.save(&[sample(3)]).expect("save favorites");
        let body = std::fs::read_to_string(store.path()).expect("read back");
        assert!(body.contains("\n        \"id\": 3"));
        assert!(body.contains("\"readyInMinutes\": 25"));
    }
}
