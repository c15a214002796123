//! Favorites: a JSON-file-backed list of saved recipes, unique by id.

mod persist;

pub use persist::FavoritesStore;

use crate::state::Recipe;

/// Outcome of [`toggle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggled {
    /// The recipe was appended.
    Added,
    /// The recipe with that id was removed.
    Removed,
}

/// Whether a recipe with `id` is saved.
#[must_use]
pub fn contains(favorites: &[Recipe], id: u64) -> bool {
    favorites.iter().any(|f| f.id == id)
}

/// Append `recipe` unless its id is already saved; returns whether it was added.
pub fn add(favorites: &mut Vec<Recipe>, recipe: Recipe) -> bool {
    if contains(favorites, recipe.id) {
        return false;
    }
    favorites.push(recipe);
    true
}

/// Remove every entry with `id`; returns whether anything was removed.
pub fn remove(favorites: &mut Vec<Recipe>, id: u64) -> bool {
    let before = favorites.len();
    favorites.retain(|f| f.id != id);
    favorites.len() != before
}

/// What: Add the recipe if absent, remove it by id if present.
///
/// Inputs:
/// - `favorites`: Current list, mutated in place
/// - `recipe`: Recipe being toggled
///
/// Output:
/// - Which way the toggle went; the caller persists the list.
pub fn toggle(favorites: &mut Vec<Recipe>, recipe: &Recipe) -> Toggled {
    if remove(favorites, recipe.id) {
        Toggled::Removed
    } else {
        favorites.push(recipe.clone());
        Toggled::Added
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(id: u64) -> Recipe {
        Recipe {
            id,
            title: format!("r{id}"),
            ..Recipe::default()
        }
    }

    #[test]
    fn adding_duplicate_id_is_noop() {
        let mut list = vec![r(1)];
        let mut dup = r(1);
        dup.title = "other title".into();
        assert!(!add(&mut list, dup));
        assert_eq!(list, vec![r(1)]);
    }

    #[test]
    fn removing_absent_id_leaves_list_unchanged() {
        let mut list = vec![r(1), r(2)];
        assert!(!remove(&mut list, 9));
        assert_eq!(list, vec![r(1), r(2)]);
    }

    #[test]
    fn toggle_adds_then_removes_preserving_order() {
        let mut list = vec![r(1), r(2)];
        assert_eq!(toggle(&mut list, &r(3)), Toggled::Added);
        assert_eq!(list, vec![r(1), r(2), r(3)]);
        assert_eq!(toggle(&mut list, &r(2)), Toggled::Removed);
        assert_eq!(list, vec![r(1), r(3)]);
        assert!(!contains(&list, 2));
    }
}
