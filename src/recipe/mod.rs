//! Recipe domain model.
//!
//! This module defines the data shapes rendered by the UI and produced by the
//! generation adapter:
//! - `Recipe` and its `Macros` breakdown
//! - `Difficulty` levels
//! - the static `Category` catalog and the seeded starter recipes

mod catalog;

pub use catalog::{category_by_id, seed_recipes, CATEGORIES, DEFAULT_CATEGORY_ID};

use fake::{Dummy, Faker};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro nutrient breakdown per serving, in grams.
///
#[derive(Clone, Debug, Default, Dummy, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

/// Specifying how demanding a recipe is to cook.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Return the badge label shown on cards.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "简单易上手",
            Difficulty::Medium => "进阶烹饪",
            Difficulty::Hard => "挑战级",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Dummy<Faker> for Difficulty {
    fn dummy_with_rng<R: Rng + ?Sized>(_: &Faker, rng: &mut R) -> Self {
        match rng.gen_range(0..3) {
            0 => Difficulty::Easy,
            1 => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }
}

/// Defines recipe data structure.
///
/// `id` is unique within the list held by the application state. It is
/// assigned locally and never part of the generated payload.
///
#[derive(Clone, Debug, Dummy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub calories: u32,
    pub time_minutes: u32,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub macros: Macros,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub category: String,
}

impl Recipe {
    /// Return at most three tags for compact card display.
    ///
    pub fn card_tags(&self) -> &[String] {
        &self.tags[..self.tags.len().min(3)]
    }

    /// Return the ingredients as a plain-text shopping list.
    ///
    pub fn shopping_list(&self) -> String {
        let mut list = format!("{}\n", self.title);
        for ingredient in &self.ingredients {
            list.push_str("- ");
            list.push_str(ingredient);
            list.push('\n');
        }
        list
    }
}

/// Defines a preconfigured browsing category.
///
/// `query` is the theme text sent to the generator when the category is
/// chosen.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub query: &'static str,
    pub icon: &'static str,
}
