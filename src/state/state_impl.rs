use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::logger::LogBuffer;
use crate::recipe::{
    category_by_id, seed_recipes, Category, Recipe, CATEGORIES, DEFAULT_CATEGORY_ID,
};
use crate::ui::SPINNER_FRAME_COUNT;
use log::*;
use ratatui::widgets::ListState;
use std::collections::HashSet;
use tui_textarea::TextArea;

use super::error::StateError;
use super::navigation::{Focus, View};

const SEARCH_PLACEHOLDER: &str = "搜索食材或食谱 (如: 豆腐, 减脂餐)";

/// Houses data representative of application state.
///
/// Recipes, favorites, the base view and the detail overlay are owned here
/// and mutated only through the methods below.
pub struct State {
    net_sender: Option<NetworkEventSender>,
    log_buffer: LogBuffer,
    theme: crate::ui::Theme,
    spinner_index: usize,
    view: View,
    focus: Focus,
    active_category_id: String,
    category_index: usize,
    recipes: Vec<Recipe>,
    recipes_list_state: ListState,
    loading: bool,
    latest_request_id: u64,
    selected_recipe: Option<Recipe>, // Detail overlay, independent of `view`
    detail_scroll: u16,
    favorites: HashSet<String>,
    search_mode: bool,
    search_input: TextArea<'static>,
    log_visible: bool,
}

fn empty_search_input() -> TextArea<'static> {
    let mut input = TextArea::default();
    input.set_placeholder_text(SEARCH_PLACEHOLDER);
    input
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        let category_index = CATEGORIES
            .iter()
            .position(|c| c.id == DEFAULT_CATEGORY_ID)
            .unwrap_or(0);
        let mut recipes_list_state = ListState::default();
        recipes_list_state.select(Some(0));
        State {
            net_sender: None,
            log_buffer: LogBuffer::new(),
            theme: crate::ui::Theme::default(),
            spinner_index: 0,
            view: View::Home,
            focus: Focus::Recipes,
            active_category_id: DEFAULT_CATEGORY_ID.to_string(),
            category_index,
            recipes: seed_recipes(),
            recipes_list_state,
            loading: false,
            latest_request_id: 0,
            selected_recipe: None,
            detail_scroll: 0,
            favorites: HashSet::new(),
            search_mode: false,
            search_input: empty_search_input(),
            log_visible: false,
        }
    }
}

impl State {
    pub fn new(
        net_sender: NetworkEventSender,
        log_buffer: LogBuffer,
        theme: crate::ui::Theme,
    ) -> Self {
        State {
            net_sender: Some(net_sender),
            log_buffer,
            theme,
            ..State::default()
        }
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> &crate::ui::Theme {
        &self.theme
    }

    /// Get the shared log buffer.
    ///
    pub fn get_log_buffer(&self) -> &LogBuffer {
        &self.log_buffer
    }

    /// Advance the spinner index.
    ///
    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index += 1;
        if self.spinner_index >= SPINNER_FRAME_COUNT {
            self.spinner_index = 0;
        }
        self
    }

    /// Return the current spinner index.
    ///
    pub fn get_spinner_index(&self) -> &usize {
        &self.spinner_index
    }

    /// Return the current base view.
    ///
    pub fn current_view(&self) -> &View {
        &self.view
    }

    /// Switch the base view, resetting the list cursor for the new view.
    ///
    pub fn set_view(&mut self, view: View) -> &mut Self {
        if self.view != view {
            debug!("Switching view to {:?}", view);
            self.view = view;
            self.focus = Focus::Recipes;
            self.reset_recipe_cursor();
        }
        self
    }

    pub fn next_view(&mut self) -> &mut Self {
        let view = self.view.next();
        self.set_view(view)
    }

    pub fn previous_view(&mut self) -> &mut Self {
        let view = self.view.previous();
        self.set_view(view)
    }

    /// Return the current focus.
    ///
    pub fn current_focus(&self) -> &Focus {
        &self.focus
    }

    /// Toggle focus between the category strip and the recipe list. The
    /// favorites view has no categories.
    ///
    pub fn toggle_focus(&mut self) -> &mut Self {
        self.focus = match (self.view, self.focus) {
            (View::Favorites, _) => Focus::Recipes,
            (_, Focus::Categories) => Focus::Recipes,
            (_, Focus::Recipes) => Focus::Categories,
        };
        self
    }

    /// Return the id of the active category.
    ///
    pub fn get_active_category_id(&self) -> &str {
        &self.active_category_id
    }

    /// Return the highlighted category index.
    ///
    pub fn current_category_index(&self) -> usize {
        self.category_index
    }

    pub fn next_category_index(&mut self) -> &mut Self {
        self.category_index = (self.category_index + 1) % CATEGORIES.len();
        self
    }

    pub fn previous_category_index(&mut self) -> &mut Self {
        self.category_index = match self.category_index {
            0 => CATEGORIES.len() - 1,
            i => i - 1,
        };
        self
    }

    /// Select the highlighted category.
    ///
    pub fn select_current_category(&mut self) -> &mut Self {
        let category = CATEGORIES[self.category_index % CATEGORIES.len()];
        self.select_category(&category)
    }

    /// Make the category active and replace the list with recipes for its
    /// query.
    ///
    pub fn select_category(&mut self, category: &Category) -> &mut Self {
        info!("Selected category '{}'", category.name);
        self.active_category_id = category.id.to_string();
        if let Some(index) = CATEGORIES.iter().position(|c| c.id == category.id) {
            self.category_index = index;
        }
        self.load_recipes(category.query, false)
    }

    /// Select a catalog category by id.
    ///
    pub fn select_category_by_id(&mut self, id: &str) -> Result<&mut Self, StateError> {
        let category = category_by_id(id).ok_or_else(|| StateError::UnknownCategory {
            id: id.to_string(),
        })?;
        Ok(self.select_category(category))
    }

    /// Return whether a generation request is in flight.
    ///
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Request recipes for the query from the network thread. The request
    /// gets the next sequence number; only the response to the newest
    /// request is applied.
    ///
    pub fn load_recipes(&mut self, query: &str, append: bool) -> &mut Self {
        self.latest_request_id += 1;
        self.loading = true;
        let event = NetworkEvent::LoadRecipes {
            query: query.to_string(),
            append,
            request_id: self.latest_request_id,
        };
        if let Err(e) = self.dispatch(event) {
            error!("Failed to request recipes for '{}': {}", query, e);
            self.loading = false;
        }
        self
    }

    fn dispatch(&self, event: NetworkEvent) -> Result<(), StateError> {
        let sender = self
            .net_sender
            .as_ref()
            .ok_or(StateError::NetworkChannelNotSet)?;
        sender
            .send(event)
            .map_err(|e| StateError::NetworkSendFailed(e.to_string()))
    }

    /// Apply the result of a generation request.
    ///
    /// Responses to superseded requests are discarded. An empty result
    /// leaves the list untouched; otherwise it replaces the list or, when
    /// appending, is placed ahead of the existing recipes.
    ///
    pub fn apply_recipes(
        &mut self,
        request_id: u64,
        recipes: Vec<Recipe>,
        append: bool,
    ) -> &mut Self {
        if request_id != self.latest_request_id {
            debug!(
                "Discarding stale response {} (latest request is {})",
                request_id, self.latest_request_id
            );
            return self;
        }
        self.loading = false;
        if recipes.is_empty() {
            warn!("No new recipes received, keeping current list.");
            return self;
        }
        let added = recipes.len();
        if append {
            // Keep the highlighted card by shifting past the new ones this view shows
            let shift = match self.view {
                View::Favorites => recipes
                    .iter()
                    .filter(|r| self.favorites.contains(&r.id))
                    .count(),
                View::Home | View::Explore => added,
            };
            let selection = self.recipes_list_state.selected();
            let mut combined = recipes;
            combined.append(&mut self.recipes);
            self.recipes = combined;
            self.recipes_list_state.select(selection.map(|i| i + shift));
            self.clamp_recipe_cursor();
        } else {
            self.recipes = recipes;
            self.reset_recipe_cursor();
        }
        info!("Showing {} recipes ({} new).", self.recipes.len(), added);
        self
    }

    /// Load more recipes for the active category, ahead of the current
    /// ones. Does nothing while loading or when the list is empty.
    ///
    pub fn load_more(&mut self) -> &mut Self {
        if self.loading || self.recipes.is_empty() {
            return self;
        }
        let query = match category_by_id(&self.active_category_id) {
            Some(category) => category.query.to_string(),
            None => self.active_category_id.clone(),
        };
        self.load_recipes(&query, true)
    }

    /// Return whether the load more action is offered.
    ///
    pub fn can_load_more(&self) -> bool {
        !self.loading && !self.recipes.is_empty()
    }

    /// Return all recipes in the current list.
    ///
    pub fn get_recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Return the recipes listed by the current view.
    ///
    pub fn visible_recipes(&self) -> Vec<&Recipe> {
        match self.view {
            View::Favorites => self
                .recipes
                .iter()
                .filter(|r| self.favorites.contains(&r.id))
                .collect(),
            View::Home | View::Explore => self.recipes.iter().collect(),
        }
    }

    pub fn get_recipes_list_state(&mut self) -> &mut ListState {
        &mut self.recipes_list_state
    }

    fn reset_recipe_cursor(&mut self) {
        let select = if self.visible_recipes().is_empty() {
            None
        } else {
            Some(0)
        };
        self.recipes_list_state.select(select);
    }

    /// Return the highlighted recipe in the current view.
    ///
    pub fn current_recipe(&self) -> Option<&Recipe> {
        let index = self.recipes_list_state.selected()?;
        self.visible_recipes().get(index).copied()
    }

    pub fn next_recipe_index(&mut self) -> &mut Self {
        let count = self.visible_recipes().len();
        if count == 0 {
            self.recipes_list_state.select(None);
            return self;
        }
        let next = match self.recipes_list_state.selected() {
            Some(i) if i + 1 < count => i + 1,
            _ => 0,
        };
        self.recipes_list_state.select(Some(next));
        self
    }

    pub fn previous_recipe_index(&mut self) -> &mut Self {
        let count = self.visible_recipes().len();
        if count == 0 {
            self.recipes_list_state.select(None);
            return self;
        }
        let previous = match self.recipes_list_state.selected() {
            Some(i) if i > 0 && i <= count => i - 1,
            _ => count - 1,
        };
        self.recipes_list_state.select(Some(previous));
        self
    }

    /// Return whether recipe cards accept selection. While a request is in
    /// flight Home cards are disabled and Explore shows a spinner instead.
    ///
    pub fn cards_enabled(&self) -> bool {
        !(self.loading && matches!(self.view, View::Home | View::Explore))
    }

    /// Open the detail overlay for the highlighted recipe.
    ///
    pub fn open_current_recipe(&mut self) -> &mut Self {
        if !self.cards_enabled() {
            debug!("Ignoring recipe selection while loading.");
            return self;
        }
        let recipe = self.current_recipe().cloned();
        if recipe.is_some() {
            self.select_recipe(recipe);
        }
        self
    }

    /// Set or clear the recipe shown in the detail overlay.
    ///
    pub fn select_recipe(&mut self, recipe: Option<Recipe>) -> &mut Self {
        self.detail_scroll = 0;
        self.selected_recipe = recipe;
        self
    }

    pub fn get_selected_recipe(&self) -> Option<&Recipe> {
        self.selected_recipe.as_ref()
    }

    pub fn has_selected_recipe(&self) -> bool {
        self.selected_recipe.is_some()
    }

    pub fn get_detail_scroll(&self) -> u16 {
        self.detail_scroll
    }

    pub fn scroll_detail_down(&mut self) -> &mut Self {
        self.detail_scroll = self.detail_scroll.saturating_add(1);
        self
    }

    pub fn scroll_detail_up(&mut self) -> &mut Self {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
        self
    }

    /// Flip favorite membership of the recipe id.
    ///
    pub fn toggle_favorite(&mut self, recipe_id: &str) -> &mut Self {
        if !self.favorites.remove(recipe_id) {
            self.favorites.insert(recipe_id.to_string());
        }
        if self.view == View::Favorites {
            self.clamp_recipe_cursor();
        }
        self
    }

    /// Toggle the favorite of the recipe in the overlay or, without an
    /// overlay, the highlighted one.
    ///
    pub fn toggle_current_favorite(&mut self) -> &mut Self {
        let recipe_id = self
            .selected_recipe
            .as_ref()
            .or_else(|| self.current_recipe())
            .map(|r| r.id.clone());
        match recipe_id {
            Some(id) => self.toggle_favorite(&id),
            None => self,
        }
    }

    pub fn is_favorite(&self, recipe_id: &str) -> bool {
        self.favorites.contains(recipe_id)
    }

    pub fn get_favorites(&self) -> &HashSet<String> {
        &self.favorites
    }

    fn clamp_recipe_cursor(&mut self) {
        let count = self.visible_recipes().len();
        let select = match self.recipes_list_state.selected() {
            _ if count == 0 => None,
            Some(i) if i >= count => Some(count - 1),
            Some(i) => Some(i),
            None => Some(0),
        };
        self.recipes_list_state.select(select);
    }

    /// Search for the text. Blank text does nothing; otherwise the view
    /// switches to explore and the list is replaced with results for the
    /// untrimmed text.
    ///
    pub fn submit_search(&mut self, text: &str) -> &mut Self {
        if text.trim().is_empty() {
            return self;
        }
        info!("Searching for '{}'", text);
        self.set_view(View::Explore);
        self.load_recipes(text, false)
    }

    pub fn is_search_mode(&self) -> bool {
        self.search_mode
    }

    pub fn enter_search_mode(&mut self) -> &mut Self {
        self.search_mode = true;
        self
    }

    pub fn exit_search_mode(&mut self) -> &mut Self {
        self.search_mode = false;
        self
    }

    pub fn add_search_char(&mut self, c: char) -> &mut Self {
        self.search_input.insert_char(c);
        self
    }

    pub fn remove_search_char(&mut self) -> &mut Self {
        self.search_input.delete_char();
        self
    }

    /// Return the text typed into the search box.
    ///
    pub fn get_search_text(&self) -> String {
        self.search_input.lines().join(" ")
    }

    pub fn get_search_input(&mut self) -> &mut TextArea<'static> {
        &mut self.search_input
    }

    /// Submit the search box text and leave search mode. The typed text is
    /// kept in the box.
    ///
    pub fn submit_search_input(&mut self) -> &mut Self {
        let text = self.get_search_text();
        self.search_mode = false;
        self.submit_search(&text)
    }

    /// Clear the search box.
    ///
    pub fn clear_search_input(&mut self) -> &mut Self {
        self.search_input = empty_search_input();
        self
    }

    pub fn is_log_visible(&self) -> bool {
        self.log_visible
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.log_visible = !self.log_visible;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};
    use std::sync::mpsc::{channel, Receiver};

    fn state_with_channel() -> (State, Receiver<NetworkEvent>) {
        let (tx, rx) = channel();
        (
            State::new(tx, LogBuffer::new(), crate::ui::Theme::default()),
            rx,
        )
    }

    fn fake_recipes(count: usize) -> Vec<Recipe> {
        (0..count)
            .map(|i| {
                let mut recipe: Recipe = Faker.fake();
                recipe.id = format!("generated-{}-{}", i, uuid::Uuid::new_v4());
                recipe
            })
            .collect()
    }

    fn ids(recipes: &[Recipe]) -> Vec<String> {
        recipes.iter().map(|r| r.id.clone()).collect()
    }

    fn expect_load(rx: &Receiver<NetworkEvent>) -> (String, bool, u64) {
        match rx.try_recv().expect("expected a network event") {
            NetworkEvent::LoadRecipes {
                query,
                append,
                request_id,
            } => (query, append, request_id),
        }
    }

    #[test]
    fn initial_state_shows_two_seeds() {
        let state = State::default();
        assert_eq!(*state.current_view(), View::Home);
        assert_eq!(state.get_recipes().len(), 2);
        assert_eq!(ids(state.get_recipes()), vec!["seed-1", "seed-2"]);
        assert_eq!(state.get_active_category_id(), "fat-loss");
        assert!(!state.is_loading());
        assert!(state.get_selected_recipe().is_none());
    }

    #[test]
    fn load_recipes_sets_loading_and_sends_event() {
        let (mut state, rx) = state_with_channel();
        state.load_recipes("豆腐", false);
        assert!(state.is_loading());
        let (query, append, request_id) = expect_load(&rx);
        assert_eq!(query, "豆腐");
        assert!(!append);
        assert_eq!(request_id, 1);
    }

    #[test]
    fn load_recipes_without_channel_clears_loading() {
        let mut state = State::default();
        state.load_recipes("豆腐", false);
        assert!(!state.is_loading());
    }

    #[test]
    fn selecting_category_replaces_seeds() {
        let (mut state, rx) = state_with_channel();
        state.select_category_by_id("muscle").unwrap();
        assert_eq!(state.get_active_category_id(), "muscle");
        let (query, append, request_id) = expect_load(&rx);
        assert_eq!(query, "高蛋白健身后的恢复餐");
        assert!(!append);

        let generated = fake_recipes(5);
        state.apply_recipes(request_id, generated.clone(), append);
        assert!(!state.is_loading());
        assert_eq!(state.get_recipes().len(), 5);
        assert_eq!(ids(state.get_recipes()), ids(&generated));
        let current = ids(state.get_recipes());
        assert!(!current.contains(&"seed-1".to_string()));
        assert!(!current.contains(&"seed-2".to_string()));
    }

    #[test]
    fn select_unknown_category_is_error() {
        let (mut state, rx) = state_with_channel();
        assert!(matches!(
            state.select_category_by_id("dessert"),
            Err(StateError::UnknownCategory { .. })
        ));
        assert!(rx.try_recv().is_err());
        assert!(!state.is_loading());
    }

    #[test]
    fn load_more_prepends_and_preserves_order() {
        let (mut state, rx) = state_with_channel();
        state.select_category_by_id("muscle").unwrap();
        let (_, _, request_id) = expect_load(&rx);
        let first = fake_recipes(5);
        state.apply_recipes(request_id, first.clone(), false);

        state.load_more();
        let (query, append, request_id) = expect_load(&rx);
        assert_eq!(query, "高蛋白健身后的恢复餐");
        assert!(append);
        let more = fake_recipes(3);
        state.apply_recipes(request_id, more.clone(), append);

        assert_eq!(state.get_recipes().len(), 8);
        let mut expected = ids(&more);
        expected.extend(ids(&first));
        assert_eq!(ids(state.get_recipes()), expected);
    }

    #[test]
    fn load_more_is_noop_while_loading_or_empty() {
        let (mut state, rx) = state_with_channel();
        state.load_recipes("豆腐", false);
        let _ = expect_load(&rx);
        assert!(!state.can_load_more());
        state.load_more();
        assert!(rx.try_recv().is_err());

        let mut state = State {
            recipes: vec![],
            ..State::default()
        };
        assert!(!state.can_load_more());
        state.load_more();
        assert!(!state.is_loading());
    }

    #[test]
    fn load_more_falls_back_to_raw_category_id() {
        let (mut state, rx) = state_with_channel();
        state.active_category_id = "custom".to_string();
        state.load_more();
        let (query, append, _) = expect_load(&rx);
        assert_eq!(query, "custom");
        assert!(append);
    }

    #[test]
    fn empty_result_keeps_list_and_clears_loading() {
        let (mut state, rx) = state_with_channel();
        let before = ids(state.get_recipes());
        state.load_recipes("豆腐", false);
        let (_, append, request_id) = expect_load(&rx);
        state.apply_recipes(request_id, vec![], append);
        assert!(!state.is_loading());
        assert_eq!(ids(state.get_recipes()), before);
    }

    #[test]
    fn stale_response_is_discarded() {
        let (mut state, rx) = state_with_channel();
        state.load_recipes("first", false);
        let (_, _, first_id) = expect_load(&rx);
        state.load_recipes("second", false);
        let (_, _, second_id) = expect_load(&rx);
        assert!(second_id > first_id);

        state.apply_recipes(first_id, fake_recipes(4), false);
        assert!(state.is_loading());
        assert_eq!(ids(state.get_recipes()), vec!["seed-1", "seed-2"]);

        let latest = fake_recipes(2);
        state.apply_recipes(second_id, latest.clone(), false);
        assert!(!state.is_loading());
        assert_eq!(ids(state.get_recipes()), ids(&latest));
    }

    #[test]
    fn double_toggle_restores_favorites() {
        let mut state = State::default();
        let before = state.get_favorites().clone();
        state.toggle_favorite("seed-1");
        assert!(state.is_favorite("seed-1"));
        state.toggle_favorite("seed-1");
        assert!(!state.is_favorite("seed-1"));
        assert_eq!(*state.get_favorites(), before);
    }

    #[test]
    fn blank_search_does_nothing() {
        let (mut state, rx) = state_with_channel();
        for text in ["", "   ", "\t\n"] {
            state.submit_search(text);
            assert_eq!(*state.current_view(), View::Home);
            assert!(!state.is_loading());
            assert!(rx.try_recv().is_err());
        }
    }

    #[test]
    fn search_switches_to_explore_with_raw_text() {
        let (mut state, rx) = state_with_channel();
        state.submit_search(" 豆腐 ");
        assert_eq!(*state.current_view(), View::Explore);
        let (query, append, _) = expect_load(&rx);
        assert_eq!(query, " 豆腐 ");
        assert!(!append);
    }

    #[test]
    fn search_input_submits_typed_text() {
        let (mut state, rx) = state_with_channel();
        state.enter_search_mode();
        for c in "鸡蛋x".chars() {
            state.add_search_char(c);
        }
        state.remove_search_char();
        assert_eq!(state.get_search_text(), "鸡蛋");
        state.submit_search_input();
        assert!(!state.is_search_mode());
        let (query, _, _) = expect_load(&rx);
        assert_eq!(query, "鸡蛋");
        state.clear_search_input();
        assert_eq!(state.get_search_text(), "");
    }

    #[test]
    fn select_recipe_is_overlay_over_view() {
        let mut state = State::default();
        state.set_view(View::Favorites);
        let recipe = state.get_recipes()[1].clone();
        state.select_recipe(Some(recipe.clone()));
        assert_eq!(*state.current_view(), View::Favorites);
        assert_eq!(state.get_selected_recipe(), Some(&recipe));
        state.select_recipe(None);
        assert!(!state.has_selected_recipe());
        assert_eq!(*state.current_view(), View::Favorites);
    }

    #[test]
    fn home_cards_disabled_while_loading() {
        let (mut state, rx) = state_with_channel();
        state.load_recipes("豆腐", false);
        let _ = expect_load(&rx);
        assert!(!state.cards_enabled());
        state.open_current_recipe();
        assert!(!state.has_selected_recipe());

        state.set_view(View::Explore);
        assert!(!state.cards_enabled());

        state.set_view(View::Favorites);
        assert!(state.cards_enabled());
    }

    #[test]
    fn explore_results_not_selectable_during_search() {
        let (mut state, rx) = state_with_channel();
        state.submit_search("豆腐");
        let _ = expect_load(&rx);
        state.open_current_recipe();
        assert!(!state.has_selected_recipe());
    }

    #[test]
    fn load_more_landing_on_favorites_keeps_cursor_valid() {
        let (mut state, rx) = state_with_channel();
        state.toggle_favorite("seed-1");
        state.load_more();
        let (_, _, request_id) = expect_load(&rx);
        state.set_view(View::Favorites);

        state.apply_recipes(request_id, fake_recipes(5), true);

        assert_eq!(state.get_recipes().len(), 7);
        assert_eq!(state.get_recipes_list_state().selected(), Some(0));
        assert_eq!(state.current_recipe().map(|r| r.id.as_str()), Some("seed-1"));
    }

    #[test]
    fn open_current_recipe_uses_cursor() {
        let mut state = State::default();
        state.next_recipe_index();
        state.open_current_recipe();
        assert_eq!(state.get_selected_recipe().map(|r| r.id.as_str()), Some("seed-2"));
    }

    #[test]
    fn favorites_view_lists_only_favorites_in_order() {
        let mut state = State::default();
        let generated = fake_recipes(4);
        state.recipes = generated.clone();
        state.toggle_favorite(&generated[3].id);
        state.toggle_favorite(&generated[1].id);
        state.set_view(View::Favorites);
        let visible: Vec<&str> = state.visible_recipes().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(visible, vec![generated[1].id.as_str(), generated[3].id.as_str()]);
        assert_eq!(state.current_recipe().map(|r| r.id.clone()), Some(generated[1].id.clone()));
    }

    #[test]
    fn unfavoriting_last_item_clears_cursor() {
        let mut state = State::default();
        state.toggle_favorite("seed-2");
        state.set_view(View::Favorites);
        assert!(state.current_recipe().is_some());
        state.toggle_current_favorite();
        assert!(state.visible_recipes().is_empty());
        assert!(state.current_recipe().is_none());
    }

    #[test]
    fn toggle_current_favorite_prefers_overlay() {
        let mut state = State::default();
        let second = state.get_recipes()[1].clone();
        state.select_recipe(Some(second));
        state.toggle_current_favorite();
        assert!(state.is_favorite("seed-2"));
        assert!(!state.is_favorite("seed-1"));
    }

    #[test]
    fn recipe_cursor_wraps() {
        let mut state = State::default();
        assert_eq!(state.recipes_list_state.selected(), Some(0));
        state.next_recipe_index();
        assert_eq!(state.recipes_list_state.selected(), Some(1));
        state.next_recipe_index();
        assert_eq!(state.recipes_list_state.selected(), Some(0));
        state.previous_recipe_index();
        assert_eq!(state.recipes_list_state.selected(), Some(1));
    }

    #[test]
    fn append_keeps_highlighted_recipe() {
        let (mut state, rx) = state_with_channel();
        state.next_recipe_index();
        state.load_more();
        let (_, append, request_id) = expect_load(&rx);
        state.apply_recipes(request_id, fake_recipes(3), append);
        assert_eq!(state.current_recipe().map(|r| r.id.as_str()), Some("seed-2"));
    }

    #[test]
    fn category_cursor_wraps_and_selects() {
        let (mut state, rx) = state_with_channel();
        assert_eq!(state.current_category_index(), 0);
        state.previous_category_index();
        assert_eq!(state.current_category_index(), CATEGORIES.len() - 1);
        state.next_category_index();
        state.next_category_index();
        assert_eq!(state.current_category_index(), 1);
        state.select_current_category();
        assert_eq!(state.get_active_category_id(), "muscle");
        let (query, _, _) = expect_load(&rx);
        assert_eq!(query, "高蛋白健身后的恢复餐");
    }

    #[test]
    fn toggle_focus_skips_categories_in_favorites() {
        let mut state = State::default();
        state.toggle_focus();
        assert_eq!(*state.current_focus(), Focus::Categories);
        state.set_view(View::Favorites);
        assert_eq!(*state.current_focus(), Focus::Recipes);
        state.toggle_focus();
        assert_eq!(*state.current_focus(), Focus::Recipes);
    }

    #[test]
    fn view_cycle() {
        let mut state = State::default();
        state.next_view();
        assert_eq!(*state.current_view(), View::Explore);
        state.previous_view();
        state.previous_view();
        assert_eq!(*state.current_view(), View::Favorites);
    }

    #[test]
    fn detail_scroll_saturates() {
        let mut state = State::default();
        state.scroll_detail_up();
        assert_eq!(state.get_detail_scroll(), 0);
        state.scroll_detail_down().scroll_detail_down();
        assert_eq!(state.get_detail_scroll(), 2);
        state.select_recipe(None);
        assert_eq!(state.get_detail_scroll(), 0);
    }

    #[test]
    fn spinner_wraps() {
        let mut state = State::default();
        for _ in 0..SPINNER_FRAME_COUNT {
            state.advance_spinner_index();
        }
        assert_eq!(*state.get_spinner_index(), 0);
    }

    #[test]
    fn toggle_log() {
        let mut state = State::default();
        assert!(!state.is_log_visible());
        state.toggle_log();
        assert!(state.is_log_visible());
    }
}
