use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::errors::DomainError;
use super::validation::ValidationErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    MilkTea,
    FruitTea,
    Specialty,
}

impl Category {
    pub fn display_name(self) -> &'static str {
        match self {
            Category::MilkTea => "Milk Tea",
            Category::FruitTea => "Fruit Tea",
            Category::Specialty => "Specialty",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "milk-tea" => Ok(Category::MilkTea),
            "fruit-tea" => Ok(Category::FruitTea),
            "specialty" => Ok(Category::Specialty),
            other => Err(format!("unknown category '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: u32,
    pub image: String,
    pub category: Category,
    pub popular: bool,
}

/// Editor form for adding or changing a menu item.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct MenuDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Option<u32>,
    #[serde(default)]
    pub image: String,
    pub category: Category,
    #[serde(default)]
    pub popular: bool,
}

impl MenuDraft {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.name.trim().is_empty() || self.price.unwrap_or(0) == 0 {
            errors.add("menu_item", "Please fill in all required fields.");
        }
        errors.into_result(())
    }

    pub fn into_item(self, id: u32) -> MenuItem {
        MenuItem {
            id,
            name: self.name,
            description: self.description,
            price: self.price.unwrap_or(0),
            image: self.image,
            category: self.category,
            popular: self.popular,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MenuFilter {
    pub category: Option<Category>,
    pub query: String,
}

impl MenuFilter {
    pub fn from_params(category: Option<&str>, query: Option<&str>) -> Result<Self, DomainError> {
        let category = match category {
            None | Some("all") | Some("") => None,
            Some(c) => Some(c.parse().map_err(DomainError::InvalidInput)?),
        };
        Ok(Self {
            category,
            query: query.unwrap_or_default().to_string(),
        })
    }

    pub fn matches(&self, item: &MenuItem) -> bool {
        let category_ok = self.category.map_or(true, |c| c == item.category);
        let query = self.query.to_lowercase();
        category_ok
            && (item.name.to_lowercase().contains(&query)
                || item.description.to_lowercase().contains(&query))
    }
}
