use crate::domain::catalog::{Catalog, Drink, Topping};

const DRINKS: [(u32, &str, u32); 12] = [
    (1, "Classic Milk Tea", 120),
    (2, "Taro Milk Tea", 135),
    (3, "Thai Milk Tea", 130),
    (4, "Matcha Milk Tea", 150),
    (5, "Mango Tango", 150),
    (6, "Passion Fruit Green Tea", 145),
    (7, "Strawberry Lychee", 160),
    (8, "Peach Oolong", 140),
    (9, "Brown Sugar Boba Milk", 170),
    (10, "Rose Milk Tea", 160),
    (11, "Oreo Cream Cheese", 175),
    (12, "Tiramisu Milk Tea", 180),
];

const TOPPINGS: [(u32, &str, u32); 6] = [
    (1, "Tapioca Pearls", 20),
    (2, "Grass Jelly", 25),
    (3, "Aloe Vera", 30),
    (4, "Crystal Boba", 25),
    (5, "Pudding", 30),
    (6, "Fruit Jellies", 25),
];

/// The shop's fixed drink and topping list.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    drinks: Vec<Drink>,
    toppings: Vec<Topping>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self {
            drinks: DRINKS
                .iter()
                .map(|&(id, name, price)| Drink {
                    id,
                    name: name.to_string(),
                    price,
                })
                .collect(),
            toppings: TOPPINGS
                .iter()
                .map(|&(id, name, price)| Topping {
                    id,
                    name: name.to_string(),
                    price,
                })
                .collect(),
        }
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog for StaticCatalog {
    fn drinks(&self) -> &[Drink] {
        &self.drinks
    }

    fn toppings(&self) -> &[Topping] {
        &self.toppings
    }
}
