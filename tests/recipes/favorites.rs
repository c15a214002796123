//! Favorites list semantics and file persistence.

use recipe_finder::favorites::{self, FavoritesStore, Toggled};
use recipe_finder::state::{Ingredient, Recipe};

fn recipe(id: u64, title: &str) -> Recipe {
    Recipe {
        id,
        title: title.into(),
        ready_in_minutes: Some(25),
        servings: Some(4),
        cuisines: vec!["Mexican".into()],
        source_url: Some(format!("https://example.com/{id}")),
        extended_ingredients: vec![Ingredient {
            amount: Some(1.5),
            unit: "cups".into(),
            name: "beans".into(),
        }],
        ..Recipe::default()
    }
}

#[test]
fn save_then_load_returns_equal_list() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FavoritesStore::new(dir.path().join("nested").join("favorites.json"));
    let list = vec![recipe(1, "Tacos"), recipe(2, "Burrito")];
    store.save(&list).expect("save favorites");
    assert_eq!(store.load(), list);
}

#[test]
fn malformed_file_loads_as_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("favorites.json");
    std::fs::write(&path, "{ not json").expect("write garbage");
    assert!(FavoritesStore::new(path).load().is_empty());
}

#[test]
fn toggle_adds_then_removes() {
    let mut list = vec![recipe(1, "Tacos")];
    assert_eq!(favorites::toggle(&mut list, &recipe(2, "Burrito")), Toggled::Added);
    assert_eq!(list.len(), 2);
    assert_eq!(favorites::toggle(&mut list, &recipe(1, "Tacos")), Toggled::Removed);
    assert_eq!(list.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2]);
}

#[test]
fn duplicate_add_and_missing_remove_are_no_ops() {
    let mut list = vec![recipe(1, "Tacos")];
    assert!(!favorites::add(&mut list, recipe(1, "Tacos again")));
    assert!(!favorites::remove(&mut list, 99));
    assert_eq!(list, vec![recipe(1, "Tacos")]);
}
