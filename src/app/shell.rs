//! Menu-driven loop over any line reader and writer.

use std::io::{self, BufRead, ErrorKind, Write};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use crate::cache::{CacheKey, ResponseCache};
use crate::favorites::{self, FavoritesStore, Toggled};
use crate::logic::{SharePlatform, share_url, sort_by_difficulty};
use crate::sources::{self, RecipeApi};
use crate::state::{Recipe, RecipeSummary};
use crate::ui::Painter;
use crate::ui::views::{recipe_details, recipe_table, text_panel, title_panel};
use crate::util::strip_markup;

/// Cuisines offered by the cuisine search.
pub const CUISINES: [&str; 8] = [
    "Italian", "Chinese", "Mexican", "Indian", "Japanese", "Thai", "French", "Spanish",
];
/// Meal types accepted by the cuisine search.
pub const MEAL_TYPES: [&str; 5] = ["main course", "dessert", "appetizer", "breakfast", "soup"];

/// Callback that opens a URL and reports whether a browser was launched.
pub type UrlOpener<'a> = Box<dyn FnMut(&str) -> bool + 'a>;

/// Knobs for a [`Shell`], normally derived from settings.
pub struct ShellOptions<'a> {
    /// Where favorites are persisted.
    pub favorites: FavoritesStore,
    /// Validity window of cached responses.
    pub cache_ttl: Duration,
    /// Maximum cached responses per cache.
    pub cache_capacity: usize,
    /// Message styling.
    pub painter: Painter,
    /// Width tables and panels are drawn at.
    pub width: u16,
    /// Pause after transient messages.
    pub message_delay: Duration,
    /// Clear the terminal before each screen.
    pub clear_screen: bool,
    /// Share-link launcher.
    pub opener: UrlOpener<'a>,
}

/// Interactive recipe browser.
///
/// Owns the response caches for the session; the favorites file is re-read
/// whenever a screen needs it so external edits are picked up.
pub struct Shell<'a, A, R, W> {
    /// Recipe lookups.
    api: &'a A,
    /// User input, one answer per line.
    input: R,
    /// Screen output.
    out: W,
    /// Search results keyed by normalized query.
    searches: ResponseCache<Vec<Recipe>>,
    /// Detail records keyed by recipe id.
    details: ResponseCache<Recipe>,
    /// Favorites file.
    favorites: FavoritesStore,
    /// Message styling.
    painter: Painter,
    /// Drawing width.
    width: u16,
    /// Pause after transient messages.
    message_delay: Duration,
    /// Clear the terminal before each screen.
    clear_screen: bool,
    /// Share-link launcher.
    opener: UrlOpener<'a>,
}

// Driven from the main thread; the futures never cross threads.
#[allow(clippy::future_not_send)]
impl<'a, A, R, W> Shell<'a, A, R, W>
where
    A: RecipeApi,
    R: BufRead,
    W: Write,
{
    /// Build a shell reading answers from `input` and drawing to `out`.
    #[must_use]
    pub fn new(api: &'a A, input: R, out: W, options: ShellOptions<'a>) -> Self {
        Self {
            api,
            input,
            out,
            searches: ResponseCache::new(options.cache_ttl, options.cache_capacity),
            details: ResponseCache::new(options.cache_ttl, options.cache_capacity),
            favorites: options.favorites,
            painter: options.painter,
            width: options.width,
            message_delay: options.message_delay,
            clear_screen: options.clear_screen,
            opener: options.opener,
        }
    }

    /// Give back the output sink (used by tests to inspect the transcript).
    #[must_use]
    pub fn into_output(self) -> W {
        self.out
    }

    /// What: Run the main menu until the user exits.
    ///
    /// Output:
    /// - `Ok(())` on Exit or end of input.
    ///
    /// # Errors
    /// - Terminal read/write failures.
    pub async fn run(&mut self) -> io::Result<()> {
        match self.main_menu().await {
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                tracing::info!("input closed; leaving menu");
                let bye = self.painter.error("Exiting the application. Goodbye!");
                writeln!(self.out, "\n{bye}")?;
                self.out.flush()
            }
            other => other,
        }
    }

    /// Top-level menu loop.
    async fn main_menu(&mut self) -> io::Result<()> {
        loop {
            self.clear()?;
            self.heading("Recipe Finder & Meal Planner")?;
            self.say("1. Search recipes by ingredients")?;
            self.say("2. Search recipes by cuisine")?;
            self.say("3. View favorite recipes")?;
            self.say("4. Exit")?;
            match self.prompt("Enter your choice: ")?.as_str() {
                "1" => self.search_by_ingredients().await?,
                "2" => self.search_by_cuisine().await?,
                "3" => self.view_favorites().await?,
                "4" => {
                    let bye = self.painter.error("Exiting the application. Goodbye!");
                    self.say(&bye)?;
                    return self.out.flush();
                }
                _ => {
                    self.error("Invalid choice, please try again.")?;
                    self.pause().await;
                }
            }
        }
    }

    /// What: Ask for comma-separated ingredients and show matching recipes.
    ///
    /// Details:
    /// - Served from the cache when the same ingredient set was searched
    ///   within the expiry window.
    async fn search_by_ingredients(&mut self) -> io::Result<()> {
        self.clear()?;
        self.heading("Search Recipes by Ingredients")?;
        self.say("Enter ingredients separated by commas (e.g., chicken, rice, tomatoes).")?;
        let raw = self.prompt("Ingredients: ")?;
        let ingredients: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToOwned::to_owned)
            .collect();
        if ingredients.is_empty() {
            self.error("Input cannot be empty.")?;
            return self.wait_enter("Press Enter to return to the main menu...");
        }

        let key = CacheKey::ingredients(&ingredients);
        let recipes = if let Some(hit) = self.cached_search(&key)? {
            hit
        } else {
            self.note("Searching for recipes...")?;
            let api = self.api;
            let found = api.search_recipes_by_ingredients(&ingredients).await;
            let summaries = self.report("ingredient search", found)?.unwrap_or_default();
            self.resolve_and_cache(key, summaries).await?
        };

        if recipes.is_empty() {
            self.error("Could not find any recipes with those ingredients.")?;
            return self.wait_enter("Press Enter to return to the main menu...");
        }
        self.select_recipe_flow(recipes).await
    }

    /// What: Ask for a cuisine and optional meal type and show matching recipes.
    async fn search_by_cuisine(&mut self) -> io::Result<()> {
        self.clear()?;
        self.heading("Search Recipes by Cuisine")?;
        let label = self.painter.heading("Available Cuisines:");
        self.say(&format!("{label} {}", CUISINES.join(", ")))?;
        let cuisine = self.prompt("Choose a cuisine: ")?.to_lowercase();
        if !CUISINES.iter().any(|c| c.to_lowercase() == cuisine) {
            self.error("Invalid cuisine.")?;
            return self.wait_enter("Press Enter to return...");
        }

        let label = self.painter.heading("Available Meal Types (optional):");
        self.say(&format!("{label} {}", MEAL_TYPES.join(", ")))?;
        let meal_type = self
            .prompt("Choose a meal type (or press Enter to skip): ")?
            .to_lowercase();
        let meal_type = (!meal_type.is_empty()).then_some(meal_type);
        if let Some(m) = &meal_type
            && !MEAL_TYPES.contains(&m.as_str())
        {
            self.error("Invalid meal type.")?;
            return self.wait_enter("Press Enter to return...");
        }

        let key = CacheKey::cuisine(&cuisine, meal_type.as_deref());
        let recipes = if let Some(hit) = self.cached_search(&key)? {
            hit
        } else {
            self.note("Searching for recipes...")?;
            let api = self.api;
            let found = api
                .find_recipes_by_cuisine(&cuisine, meal_type.as_deref())
                .await;
            let summaries = self.report("cuisine search", found)?.unwrap_or_default();
            self.resolve_and_cache(key, summaries).await?
        };

        if recipes.is_empty() {
            self.error("Could not find any recipes for this cuisine.")?;
            return self.wait_enter("Press Enter to return...");
        }
        self.select_recipe_flow(recipes).await
    }

    /// Cached, non-empty search results for `key`.
    fn cached_search(&mut self, key: &CacheKey) -> io::Result<Option<Vec<Recipe>>> {
        match self.searches.get(key) {
            Some(hit) if !hit.is_empty() => {
                self.note("Loading recipes from cache...")?;
                Ok(Some(hit))
            }
            _ => Ok(None),
        }
    }

    /// What: Fetch full details for each summary and cache the non-empty list.
    ///
    /// Details:
    /// - Detail records are cached per id, so overlapping searches reuse them.
    /// - Failed lookups are reported and skipped.
    async fn resolve_and_cache(
        &mut self,
        key: CacheKey,
        summaries: Vec<RecipeSummary>,
    ) -> io::Result<Vec<Recipe>> {
        if !summaries.is_empty() {
            self.note("Fetching recipe details...")?;
        }
        let mut recipes = Vec::with_capacity(summaries.len());
        for summary in summaries {
            let detail_key = CacheKey::details(summary.id);
            let detail = if let Some(hit) = self.details.get(&detail_key) {
                Some(hit)
            } else {
                let api = self.api;
                let fetched = api.get_recipe_details(summary.id).await;
                let fetched = self.report("recipe details", fetched)?;
                if let Some(recipe) = &fetched {
                    self.details.set(detail_key, recipe.clone());
                }
                fetched
            };
            if let Some(mut recipe) = detail {
                recipe.used_ingredient_count = recipe
                    .used_ingredient_count
                    .or(summary.used_ingredient_count);
                recipe.missed_ingredient_count = recipe
                    .missed_ingredient_count
                    .or(summary.missed_ingredient_count);
                recipes.push(recipe);
            }
        }
        if !recipes.is_empty() {
            tracing::info!(key = %key, count = recipes.len(), "caching search results");
            self.searches.set(key, recipes.clone());
        }
        Ok(recipes)
    }

    /// What: Turn an API error into a printed message and an absent result.
    fn report<T>(&mut self, what: &str, result: sources::Result<T>) -> io::Result<Option<T>> {
        match result {
            Ok(v) => Ok(Some(v)),
            Err(e) => {
                tracing::warn!(request = what, error = %e, "API request failed");
                self.error(&format!("Error connecting to Spoonacular API: {e}"))?;
                Ok(None)
            }
        }
    }

    /// What: Show a recipe list and open details for the chosen number.
    async fn select_recipe_flow(&mut self, mut recipes: Vec<Recipe>) -> io::Result<()> {
        sort_by_difficulty(&mut recipes);
        self.print_lines(&recipe_table(&recipes, self.width))?;
        loop {
            self.say("\n--- Options ---")?;
            self.say(&format!(
                "Enter a recipe number (1-{}) to view details.",
                recipes.len()
            ))?;
            self.say("0. Return to main menu")?;
            let choice = self.prompt("Enter your choice: ")?;
            match choice.parse::<usize>() {
                Ok(0) => return Ok(()),
                Ok(n) if n <= recipes.len() => {
                    self.view_recipe_details(&recipes[n - 1]).await?;
                    self.clear()?;
                    self.print_lines(&recipe_table(&recipes, self.width))?;
                }
                Ok(_) => self.error("Invalid recipe number.")?,
                Err(_) => self.error("Please enter a number.")?,
            }
        }
    }

    /// What: Detail page with favorite toggle and sharing.
    ///
    /// Details:
    /// - Toggling rewrites the whole favorites file.
    /// - Removing a favorite also drops its cached detail record.
    async fn view_recipe_details(&mut self, recipe: &Recipe) -> io::Result<()> {
        let mut saved = self.favorites.load();
        loop {
            let is_favorite = favorites::contains(&saved, recipe.id);
            self.clear()?;
            self.print_lines(&recipe_details(recipe, self.width))?;
            self.say("\n--- Options ---")?;
            self.say(if is_favorite {
                "1. Remove from favorites"
            } else {
                "1. Save to favorites"
            })?;
            self.say("2. Share recipe")?;
            self.say("0. Return to previous menu")?;
            match self.prompt("Enter your choice: ")?.as_str() {
                "1" => {
                    let toggled = favorites::toggle(&mut saved, recipe);
                    if toggled == Toggled::Removed {
                        self.details.remove(&CacheKey::details(recipe.id));
                    }
                    match self.favorites.save(&saved) {
                        Ok(()) => {
                            tracing::info!(id = recipe.id, ?toggled, "favorites updated");
                            self.success(match toggled {
                                Toggled::Added => "Recipe saved to favorites!",
                                Toggled::Removed => "Recipe removed from favorites!",
                            })?;
                        }
                        Err(e) => {
                            tracing::warn!(
                                path = %self.favorites.path().display(),
                                error = %e,
                                "failed to save favorites"
                            );
                            self.error(&format!("Could not save favorites: {e}"))?;
                        }
                    }
                    self.pause().await;
                }
                "2" => self.share_recipe(recipe).await?,
                "0" => return Ok(()),
                _ => {
                    self.error("Invalid choice.")?;
                    self.pause().await;
                }
            }
        }
    }

    /// What: List saved recipes and open details for the chosen number.
    ///
    /// Details:
    /// - The list is reloaded after each detail view, so removals show up
    ///   immediately; an emptied list returns to the main menu.
    async fn view_favorites(&mut self) -> io::Result<()> {
        loop {
            self.clear()?;
            self.heading("Favorite Recipes")?;
            let mut saved = self.favorites.load();
            if saved.is_empty() {
                self.error("You have no favorite recipes yet.")?;
                return self.wait_enter("Press Enter to return to the main menu...");
            }
            sort_by_difficulty(&mut saved);
            self.print_lines(&recipe_table(&saved, self.width))?;
            self.say("\n--- Options ---")?;
            self.say("Enter a recipe number to view details.")?;
            self.say("0. Return to main menu")?;
            let choice = self.prompt("Enter your choice: ")?;
            match choice.parse::<usize>() {
                Ok(0) => return Ok(()),
                Ok(n) if n <= saved.len() => self.view_recipe_details(&saved[n - 1]).await?,
                Ok(_) => {
                    self.error("Invalid recipe number.")?;
                    self.pause().await;
                }
                Err(_) => {
                    self.error("Please enter a number.")?;
                    self.pause().await;
                }
            }
        }
    }

    /// What: Offer share targets and open the chosen link in the browser.
    async fn share_recipe(&mut self, recipe: &Recipe) -> io::Result<()> {
        if share_url(recipe, SharePlatform::Facebook).is_none() {
            self.error("Sorry, no shareable link available for this recipe.")?;
            self.pause().await;
            return Ok(());
        }
        loop {
            self.clear()?;
            self.heading(&format!("Share: {}", recipe.title))?;
            let about = recipe
                .summary
                .as_deref()
                .map(strip_markup)
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "No description available.".to_string());
            self.print_lines(&text_panel("About", &[about], self.width))?;
            for (i, platform) in SharePlatform::ALL.iter().enumerate() {
                self.say(&format!("{}. {}", i + 1, platform.label()))?;
            }
            self.say("0. Back to recipe")?;
            let choice = self.prompt("Choose a platform: ")?;
            let platform = match choice.parse::<usize>() {
                Ok(0) => return Ok(()),
                Ok(n) if n <= SharePlatform::ALL.len() => SharePlatform::ALL[n - 1],
                _ => {
                    self.error("Invalid choice.")?;
                    self.pause().await;
                    continue;
                }
            };
            let Some(url) = share_url(recipe, platform) else {
                continue;
            };
            self.say("Opening share link in your browser...")?;
            self.out.flush()?;
            if !(self.opener)(&url) {
                self.error("Could not open a browser. Copy this link instead:")?;
                self.say(&url)?;
            }
            self.wait_enter("Press Enter to continue...")?;
        }
    }

    /// Clear the screen when attached to a terminal.
    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    /// Write one line.
    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")
    }

    /// Write each line in order.
    fn print_lines(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    /// Boxed heading.
    fn heading(&mut self, text: &str) -> io::Result<()> {
        let panel = title_panel(text, self.width);
        let painted: Vec<String> = panel.iter().map(|l| self.painter.heading(l)).collect();
        self.print_lines(&painted)
    }

    /// Error-colored message.
    fn error(&mut self, text: &str) -> io::Result<()> {
        let line = self.painter.error(text);
        self.say(&line)
    }

    /// Confirmation message.
    fn success(&mut self, text: &str) -> io::Result<()> {
        let line = self.painter.success(text);
        self.say(&line)
    }

    /// Status line, flushed so it shows before a slow request.
    fn note(&mut self, text: &str) -> io::Result<()> {
        let line = self.painter.note(text);
        self.say(&line)?;
        self.out.flush()
    }

    /// What: Print `label`, read one line and return it trimmed.
    ///
    /// # Errors
    /// - `UnexpectedEof` when input is closed, which ends the session.
    fn prompt(&mut self, label: &str) -> io::Result<String> {
        let label = self.painter.prompt(label);
        write!(self.out, "{label}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }

    /// Prompt with `label` and discard the answer.
    fn wait_enter(&mut self, label: &str) -> io::Result<()> {
        self.prompt(label).map(|_| ())
    }

    /// Let a transient message stay readable before the screen is redrawn.
    async fn pause(&mut self) {
        if let Err(e) = self.out.flush() {
            tracing::debug!(error = %e, "failed to flush output before pause");
        }
        if !self.message_delay.is_zero() {
            tokio::time::sleep(self.message_delay).await;
        }
    }
}
