use crate::gemini::Gemini;
use crate::state::State;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    LoadRecipes {
        query: String,
        append: bool,
        request_id: u64,
    },
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    gemini: &'a Gemini,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, gemini: &'a Gemini) -> Self {
        Handler { state, gemini }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::LoadRecipes {
                query,
                append,
                request_id,
            } => self.load_recipes(query, append, request_id).await?,
        }
        Ok(())
    }

    /// Generate recipes for the query and hand them to state. The state lock
    /// is not held during the request.
    ///
    async fn load_recipes(
        &mut self,
        query: String,
        append: bool,
        request_id: u64,
    ) -> Result<()> {
        info!("Generating recipes for '{}'...", query);
        let recipes = self.gemini.generate_recipes(&query).await;
        let mut state = self.state.lock().await;
        state.apply_recipes(request_id, recipes, append);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::GenerationOptions;
    use crate::logger::LogBuffer;
    use httpmock::MockServer;
    use serde_json::json;
    use std::sync::mpsc::channel;

    fn envelope(count: usize) -> serde_json::Value {
        let items: Vec<serde_json::Value> = (0..count)
            .map(|i| {
                json!({
                    "title": format!("高蛋白餐{}", i),
                    "description": "饱腹",
                    "calories": 300 + i,
                    "timeMinutes": 20,
                    "difficulty": "Easy",
                    "tags": ["高蛋白"],
                    "ingredients": ["鸡胸肉 200g"],
                    "steps": ["煮熟。"],
                    "macros": { "protein": 40, "fat": 6, "carbs": 12 }
                })
            })
            .collect();
        let text = serde_json::Value::Array(items).to_string();
        json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        })
    }

    fn shared_state() -> (Arc<Mutex<State>>, std::sync::mpsc::Receiver<Event>) {
        let (tx, rx) = channel();
        let state = State::new(tx, LogBuffer::new(), crate::ui::Theme::default());
        (Arc::new(Mutex::new(state)), rx)
    }

    #[tokio::test]
    async fn category_request_replaces_seed_recipes() -> Result<()> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST")
                    .path("/models/gemini-2.5-flash:generateContent")
                    .body_contains("高蛋白健身后的恢复餐");
                then.status(200).json_body(envelope(5));
            })
            .await;

        let gemini = Gemini::new("key", &server.base_url(), GenerationOptions::default());
        let (state, rx) = shared_state();
        state.lock().await.select_category_by_id("muscle")?;
        let event = rx.try_recv()?;

        let mut handler = Handler::new(&state, &gemini);
        handler.handle(event).await?;
        mock.assert_async().await;

        let state = state.lock().await;
        assert!(!state.is_loading());
        assert_eq!(state.get_recipes().len(), 5);
        assert!(state
            .get_recipes()
            .iter()
            .all(|r| r.id != "seed-1" && r.id != "seed-2"));
        assert!(state
            .get_recipes()
            .iter()
            .all(|r| r.category == "高蛋白健身后的恢复餐"));
        Ok(())
    }

    #[tokio::test]
    async fn failed_request_keeps_list_and_clears_loading() -> Result<()> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST");
                then.status(503);
            })
            .await;

        let gemini = Gemini::new("key", &server.base_url(), GenerationOptions::default());
        let (state, rx) = shared_state();
        state.lock().await.submit_search("豆腐");
        let event = rx.try_recv()?;

        Handler::new(&state, &gemini).handle(event).await?;
        mock.assert_async().await;

        let state = state.lock().await;
        assert!(!state.is_loading());
        let ids: Vec<&str> = state.get_recipes().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["seed-1", "seed-2"]);
        Ok(())
    }

    #[tokio::test]
    async fn load_more_prepends_generated_recipes() -> Result<()> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST");
                then.status(200).json_body(envelope(3));
            })
            .await;

        let gemini = Gemini::new("key", &server.base_url(), GenerationOptions::default());
        let (state, rx) = shared_state();
        state.lock().await.load_more();
        let event = rx.try_recv()?;
        assert!(matches!(event, Event::LoadRecipes { append: true, .. }));

        Handler::new(&state, &gemini).handle(event).await?;
        mock.assert_async().await;

        let state = state.lock().await;
        let ids: Vec<&str> = state.get_recipes().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), 5);
        assert_eq!(&ids[3..], &["seed-1", "seed-2"]);
        Ok(())
    }
}
