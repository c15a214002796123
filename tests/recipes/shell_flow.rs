//! A scripted menu session against an in-memory API.

use std::cell::Cell;
use std::time::Duration;

use recipe_finder::app::{Shell, ShellOptions};
use recipe_finder::favorites::FavoritesStore;
use recipe_finder::sources::{RecipeApi, Result};
use recipe_finder::state::{Recipe, RecipeSummary};
use recipe_finder::ui::Painter;

struct CountingApi {
    recipe: Recipe,
    calls: Cell<usize>,
}

impl RecipeApi for CountingApi {
    async fn search_recipes_by_ingredients(
        &self,
        _ingredients: &[String],
    ) -> Result<Vec<RecipeSummary>> {
        self.calls.set(self.calls.get() + 1);
        Ok(vec![RecipeSummary {
            id: self.recipe.id,
            title: self.recipe.title.clone(),
            used_ingredient_count: None,
            missed_ingredient_count: None,
        }])
    }

    async fn find_recipes_by_cuisine(
        &self,
        _cuisine: &str,
        _meal_type: Option<&str>,
    ) -> Result<Vec<RecipeSummary>> {
        self.calls.set(self.calls.get() + 1);
        Ok(Vec::new())
    }

    async fn get_recipe_details(&self, id: u64) -> Result<Recipe> {
        self.calls.set(self.calls.get() + 1);
        if id == self.recipe.id {
            Ok(self.recipe.clone())
        } else {
            Err(format!("no recipe {id}").into())
        }
    }
}

#[tokio::test]
async fn repeated_search_hits_cache_and_favorite_is_saved() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("favorites.json");
    let api = CountingApi {
        recipe: Recipe {
            id: 11,
            title: "Miso Soup".into(),
            ready_in_minutes: Some(15),
            ..Recipe::default()
        },
        calls: Cell::new(0),
    };
    let options = ShellOptions {
        favorites: FavoritesStore::new(&path),
        cache_ttl: Duration::from_secs(3600),
        cache_capacity: 16,
        painter: Painter::new(false),
        width: 72,
        message_delay: Duration::ZERO,
        clear_screen: false,
        opener: Box::new(|_: &str| false),
    };
    // search, open, save, back, back; same search again, back; exit
    let script = "1\ntofu, miso\n1\n1\n0\n0\n1\nmiso,tofu\n0\n4\n";
    let mut shell = Shell::new(&api, script.as_bytes(), Vec::new(), options);
    shell.run().await.expect("session ends cleanly");
    let transcript = String::from_utf8(shell.into_output()).expect("utf-8");

    assert_eq!(api.calls.get(), 2, "one search and one detail lookup");
    assert!(transcript.contains("Loading recipes from cache..."));
    assert!(transcript.contains("Recipe saved to favorites!"));
    let saved = FavoritesStore::new(&path).load();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].title, "Miso Soup");
}
