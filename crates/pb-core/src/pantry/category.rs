//! Pantry categories.
//!
//! The category of a pantry item is its first tag. The declaration order of
//! [`Category::ALL`] is the display priority of category groups.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Veggies")]
    Veggies,
    #[serde(rename = "Fruits")]
    Fruits,
    #[serde(rename = "Meat")]
    Meat,
    #[serde(rename = "Fish")]
    Fish,
    #[serde(rename = "Dairy")]
    Dairy,
    #[serde(rename = "Grains & Pasta")]
    GrainsAndPasta,
    #[serde(rename = "Canned & Jars")]
    CannedAndJars,
    #[serde(rename = "Spices")]
    Spices,
    #[serde(rename = "Baking")]
    Baking,
    #[serde(rename = "Sauces & Condiments")]
    SaucesAndCondiments,
    #[serde(rename = "Snacks")]
    Snacks,
    #[serde(rename = "Frozen")]
    Frozen,
    #[serde(rename = "Drinks")]
    Drinks,
    #[serde(rename = "Other")]
    Other,
}

/// Category used for items without a (non-empty) first tag.
pub const DEFAULT_CATEGORY: Category = Category::Other;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown pantry category: {0}")]
pub struct UnknownCategory(pub String);

impl Category {
    /// All categories in display priority order.
    pub const ALL: [Category; 14] = [
        Category::Veggies,
        Category::Fruits,
        Category::Meat,
        Category::Fish,
        Category::Dairy,
        Category::GrainsAndPasta,
        Category::CannedAndJars,
        Category::Spices,
        Category::Baking,
        Category::SaucesAndCondiments,
        Category::Snacks,
        Category::Frozen,
        Category::Drinks,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Veggies => "Veggies",
            Category::Fruits => "Fruits",
            Category::Meat => "Meat",
            Category::Fish => "Fish",
            Category::Dairy => "Dairy",
            Category::GrainsAndPasta => "Grains & Pasta",
            Category::CannedAndJars => "Canned & Jars",
            Category::Spices => "Spices",
            Category::Baking => "Baking",
            Category::SaucesAndCondiments => "Sauces & Condiments",
            Category::Snacks => "Snacks",
            Category::Frozen => "Frozen",
            Category::Drinks => "Drinks",
            Category::Other => "Other",
        }
    }

    /// Exact (case-sensitive) label lookup.
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Position in the priority list, `None` for labels outside the list.
    pub fn priority_of(label: &str) -> Option<usize> {
        Category::ALL.iter().position(|c| c.label() == label)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_label(s).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
