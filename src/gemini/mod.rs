mod client;
mod error;
mod models;
mod prompt;

pub use client::Client;
pub use error::GeminiError;
pub use prompt::{build_prompt, recipe_schema};

use crate::recipe::{Difficulty, Macros, Recipe};
use crate::utils::text_processing::strip_code_fence;
use log::*;
use models::GenerateContentRequest;
use serde::Deserialize;
use uuid::Uuid;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_RECIPE_COUNT: usize = 5;

/// Tunables for a generation request.
///
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationOptions {
    pub model: String,
    pub temperature: f64,
    pub recipe_count: usize,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        GenerationOptions {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            recipe_count: DEFAULT_RECIPE_COUNT,
        }
    }
}

/// Shape of one generated recipe before local fields are attached.
///
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedRecipe {
    title: String,
    description: String,
    calories: u32,
    time_minutes: u32,
    difficulty: Difficulty,
    tags: Vec<String>,
    ingredients: Vec<String>,
    steps: Vec<String>,
    macros: Macros,
}

/// Responsible for turning a theme query into recipes through the external
/// structured-generation service.
///
pub struct Gemini {
    client: Client,
    options: GenerationOptions,
}

impl Gemini {
    /// Returns a new instance for the given API key, base URL and options.
    ///
    pub fn new(api_key: &str, base_url: &str, options: GenerationOptions) -> Gemini {
        debug!(
            "Initializing generation client for model '{}' at {}...",
            options.model, base_url
        );
        Gemini {
            client: Client::new(api_key, base_url),
            options,
        }
    }

    /// Return freshly generated recipes for the query.
    ///
    /// Every failure is logged and reported as an empty vector, which callers
    /// treat as "no new data".
    ///
    pub async fn generate_recipes(&self, query: &str) -> Vec<Recipe> {
        match self.try_generate_recipes(query).await {
            Ok(recipes) => recipes,
            Err(e) => {
                error!("Error generating recipes for '{}': {}", query, e);
                vec![]
            }
        }
    }

    async fn try_generate_recipes(&self, query: &str) -> Result<Vec<Recipe>, GeminiError> {
        let request = GenerateContentRequest::json(
            build_prompt(query, self.options.recipe_count),
            recipe_schema(),
            self.options.temperature,
        );
        let text = match self
            .client
            .generate_content(&self.options.model, &request)
            .await?
        {
            Some(text) => text,
            None => {
                warn!("Generation service returned no text for '{}'.", query);
                return Ok(vec![]);
            }
        };
        let recipes = parse_recipes(&text, query)?;
        info!("Generated {} recipes for '{}'.", recipes.len(), query);
        Ok(recipes)
    }
}

/// Parse generated JSON text into recipes labelled with the query.
///
/// The whole array is rejected if any item violates the schema.
///
pub fn parse_recipes(text: &str, query: &str) -> Result<Vec<Recipe>, GeminiError> {
    let generated: Vec<GeneratedRecipe> = serde_json::from_str(strip_code_fence(text))?;
    Ok(generated
        .into_iter()
        .map(|g| {
            let image_url = placeholder_image_url(&g.title, g.calories);
            Recipe {
                id: Uuid::new_v4().to_string(),
                title: g.title,
                description: g.description,
                calories: g.calories,
                time_minutes: g.time_minutes,
                difficulty: g.difficulty,
                tags: g.tags,
                ingredients: g.ingredients,
                steps: g.steps,
                macros: g.macros,
                image_url: Some(image_url),
                category: query.to_string(),
            }
        })
        .collect())
}

/// Return a decorative placeholder image URL. The seed is the title length
/// in UTF-16 code units plus calories and collides freely.
///
pub fn placeholder_image_url(title: &str, calories: u32) -> String {
    let seed = title.encode_utf16().count() as u64 + u64::from(calories);
    format!("https://picsum.photos/seed/{}/600/400", seed)
}
