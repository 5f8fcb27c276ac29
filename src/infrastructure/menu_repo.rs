use std::sync::Mutex;

use crate::domain::errors::DomainError;
use crate::domain::menu::{Category, MenuDraft, MenuFilter, MenuItem};
use crate::domain::ports::MenuRepository;

/// Every orderable drink, under its catalog id so that a menu link
/// `/orders/new?item=<id>` preselects the same drink.
const SAMPLE_ITEMS: [(u32, &str, &str, u32, &str, Category, bool); 12] = [
    (
        1,
        "Classic Milk Tea",
        "Our signature milk tea with brown sugar boba pearls",
        120,
        "https://images.unsplash.com/photo-1558857563-c0c6dd611b86",
        Category::MilkTea,
        true,
    ),
    (
        2,
        "Taro Milk Tea",
        "Creamy taro root blended with milk tea and chewy boba",
        135,
        "https://images.unsplash.com/photo-1541696490-8744a5dc0228",
        Category::MilkTea,
        false,
    ),
    (
        3,
        "Thai Milk Tea",
        "Strong black tea blended with condensed milk and spices",
        130,
        "https://images.unsplash.com/photo-1576092768241-dec231879fc3",
        Category::MilkTea,
        false,
    ),
    (
        4,
        "Matcha Milk Tea",
        "Premium Japanese matcha with milk and honey boba",
        150,
        "https://images.unsplash.com/photo-1591849018711-a9a4068d66dc",
        Category::MilkTea,
        true,
    ),
    (
        5,
        "Mango Tango",
        "Fresh mango puree with coconut jelly and tapioca pearls",
        150,
        "https://images.unsplash.com/photo-1560023907-5f339537639a",
        Category::FruitTea,
        true,
    ),
    (
        6,
        "Passion Fruit Green Tea",
        "Tangy passion fruit with jasmine green tea and aloe vera cubes",
        145,
        "https://images.unsplash.com/photo-1546039907-4d2e1c1c3a65",
        Category::FruitTea,
        false,
    ),
    (
        7,
        "Strawberry Lychee",
        "Sweet strawberry and lychee with fruit bits and pink boba",
        160,
        "https://images.unsplash.com/photo-1579954115545-a95591f28bfc",
        Category::FruitTea,
        false,
    ),
    (
        8,
        "Peach Oolong",
        "Premium oolong tea with fresh peach puree and white pearls",
        140,
        "https://images.unsplash.com/photo-1542444256-164bd34dbe23",
        Category::FruitTea,
        false,
    ),
    (
        9,
        "Brown Sugar Boba Milk",
        "Fresh milk with homemade brown sugar syrup and warm boba",
        170,
        "https://images.unsplash.com/photo-1627783288350-8c8f6e2db708",
        Category::Specialty,
        true,
    ),
    (
        10,
        "Rose Milk Tea",
        "Fragrant rose-infused milk tea with crystal boba",
        160,
        "https://images.unsplash.com/photo-1606471191009-63994c53433b",
        Category::Specialty,
        false,
    ),
    (
        11,
        "Oreo Cream Cheese",
        "Blended Oreo cookies with sweet cream cheese foam",
        175,
        "https://images.unsplash.com/photo-1572490122747-3968b75cc699",
        Category::Specialty,
        false,
    ),
    (
        12,
        "Tiramisu Milk Tea",
        "Coffee-infused milk tea with mascarpone cream and cocoa",
        180,
        "https://images.unsplash.com/photo-1592285896110-2d64dcd0ccfd",
        Category::Specialty,
        false,
    ),
];

#[derive(Debug, Default)]
pub struct InMemoryMenuRepository {
    items: Mutex<Vec<MenuItem>>,
}

impl InMemoryMenuRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        let items = SAMPLE_ITEMS
            .iter()
            .map(
                |&(id, name, description, price, image, category, popular)| MenuItem {
                    id,
                    name: name.to_string(),
                    description: description.to_string(),
                    price,
                    image: image.to_string(),
                    category,
                    popular,
                },
            )
            .collect();
        Self {
            items: Mutex::new(items),
        }
    }
}

impl MenuRepository for InMemoryMenuRepository {
    fn list(&self, filter: &MenuFilter) -> Result<Vec<MenuItem>, DomainError> {
        let items = self.items.lock()?;
        Ok(items.iter().filter(|i| filter.matches(i)).cloned().collect())
    }

    fn count(&self) -> Result<usize, DomainError> {
        Ok(self.items.lock()?.len())
    }

    fn create(&self, draft: MenuDraft) -> Result<MenuItem, DomainError> {
        let mut items = self.items.lock()?;
        let id = items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        let item = draft.into_item(id);
        items.push(item.clone());
        Ok(item)
    }

    fn update(&self, id: u32, draft: MenuDraft) -> Result<MenuItem, DomainError> {
        let mut items = self.items.lock()?;
        let slot = items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(DomainError::NotFound)?;
        *slot = draft.into_item(id);
        Ok(slot.clone())
    }

    fn delete(&self, id: u32) -> Result<MenuItem, DomainError> {
        let mut items = self.items.lock()?;
        let index = items
            .iter()
            .position(|i| i.id == id)
            .ok_or(DomainError::NotFound)?;
        Ok(items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Catalog;
    use crate::infrastructure::catalog::StaticCatalog;

    fn draft(name: &str) -> MenuDraft {
        MenuDraft {
            name: name.to_string(),
            description: "Roasted oolong with cheese foam".to_string(),
            price: Some(165),
            image: String::new(),
            category: Category::Specialty,
            popular: false,
        }
    }

    #[test]
    fn seeded_menu_mirrors_the_order_catalog() {
        let repo = InMemoryMenuRepository::seeded();
        let items = repo.list(&MenuFilter::default()).expect("list failed");
        let catalog = StaticCatalog::new();

        assert_eq!(items.len(), catalog.drinks().len());
        for drink in catalog.drinks() {
            let item = items
                .iter()
                .find(|i| i.id == drink.id)
                .unwrap_or_else(|| panic!("{} missing from the menu", drink.name));
            assert_eq!(item.name, drink.name);
            assert_eq!(item.price, drink.price);
        }
    }

    #[test]
    fn create_uses_max_id_plus_one() {
        let repo = InMemoryMenuRepository::seeded();
        repo.delete(3).expect("delete failed");
        let item = repo.create(draft("Cheese Foam Oolong")).expect("create failed");
        assert_eq!(item.id, 13);
        assert_eq!(repo.count().expect("count failed"), 12);
    }

    #[test]
    fn first_item_on_empty_menu_gets_id_one() {
        let repo = InMemoryMenuRepository::new();
        let item = repo.create(draft("Cheese Foam Oolong")).expect("create failed");
        assert_eq!(item.id, 1);
    }

    #[test]
    fn update_replaces_the_whole_item() {
        let repo = InMemoryMenuRepository::seeded();
        let item = repo.update(2, draft("Taro Slush")).expect("update failed");
        assert_eq!(item.id, 2);
        assert_eq!(item.category, Category::Specialty);

        let listed = repo.list(&MenuFilter::default()).expect("list failed");
        assert!(listed.iter().any(|i| i.name == "Taro Slush"));
        assert!(!listed.iter().any(|i| i.name == "Taro Milk Tea"));
    }

    #[test]
    fn update_and_delete_unknown_are_not_found() {
        let repo = InMemoryMenuRepository::seeded();
        assert!(matches!(
            repo.update(42, draft("Ghost")),
            Err(DomainError::NotFound)
        ));
        assert!(matches!(repo.delete(42), Err(DomainError::NotFound)));
    }

    #[test]
    fn list_filters_by_category() {
        let repo = InMemoryMenuRepository::seeded();
        let filter = MenuFilter {
            category: Some(Category::MilkTea),
            query: String::new(),
        };
        assert_eq!(repo.list(&filter).expect("list failed").len(), 4);
    }
}
