use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Drink {
    pub id: u32,
    pub name: String,
    pub price: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Topping {
    pub id: u32,
    pub name: String,
    pub price: u32,
}

/// Source of the orderable drinks and toppings.
pub trait Catalog: Send + Sync + 'static {
    fn drinks(&self) -> &[Drink];
    fn toppings(&self) -> &[Topping];

    fn drink(&self, id: u32) -> Option<&Drink> {
        self.drinks().iter().find(|d| d.id == id)
    }

    fn topping(&self, id: u32) -> Option<&Topping> {
        self.toppings().iter().find(|t| t.id == id)
    }
}
