use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::domain::menu::{MenuDraft, MenuFilter, MenuItem};
use crate::domain::notification::Notification;
use crate::domain::ports::{MenuRepository, Notifier};

pub struct MenuService<M, N> {
    repo: Arc<M>,
    notifier: N,
}

impl<M: MenuRepository, N: Notifier> MenuService<M, N> {
    pub fn new(repo: Arc<M>, notifier: N) -> Self {
        Self { repo, notifier }
    }

    pub fn list(&self, filter: &MenuFilter) -> Result<Vec<MenuItem>, DomainError> {
        self.repo.list(filter)
    }

    pub fn create(&self, draft: MenuDraft) -> Result<MenuItem, DomainError> {
        self.check(&draft)?;
        let item = self.repo.create(draft)?;
        self.notifier.notify(&Notification::new(
            "Item Added",
            format!("{} has been added to the menu.", item.name),
        ));
        Ok(item)
    }

    pub fn update(&self, id: u32, draft: MenuDraft) -> Result<MenuItem, DomainError> {
        self.check(&draft)?;
        let item = self.repo.update(id, draft)?;
        self.notifier.notify(&Notification::new(
            "Item Updated",
            format!("{} has been updated.", item.name),
        ));
        Ok(item)
    }

    pub fn delete(&self, id: u32) -> Result<MenuItem, DomainError> {
        let item = self.repo.delete(id)?;
        self.notifier.notify(&Notification::new(
            "Item Deleted",
            format!("{} has been removed from the menu.", item.name),
        ));
        Ok(item)
    }

    fn check(&self, draft: &MenuDraft) -> Result<(), DomainError> {
        draft.validate().map_err(|errors| {
            self.notifier.notify(&Notification::destructive(
                "Error",
                "Please fill in all required fields.",
            ));
            DomainError::Validation(errors)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::Category;
    use crate::infrastructure::menu_repo::InMemoryMenuRepository;
    use crate::infrastructure::notifier::LogNotifier;

    fn service() -> MenuService<InMemoryMenuRepository, LogNotifier> {
        MenuService::new(Arc::new(InMemoryMenuRepository::seeded()), LogNotifier)
    }

    fn draft(name: &str, price: Option<u32>) -> MenuDraft {
        MenuDraft {
            name: name.to_string(),
            description: "Peach oolong with crystal boba".to_string(),
            price,
            image: String::new(),
            category: Category::FruitTea,
            popular: true,
        }
    }

    #[test]
    fn incomplete_draft_is_not_saved() {
        let service = service();
        let err = service.create(draft("", Some(140))).expect_err("no name");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            service.list(&MenuFilter::default()).expect("list").len(),
            12
        );
    }

    #[test]
    fn create_edit_delete_cycle() {
        let service = service();
        let created = service
            .create(draft("Lychee Oolong", Some(140)))
            .expect("create");
        assert_eq!(created.id, 13);

        let updated = service
            .update(13, draft("Lychee Oolong Deluxe", Some(155)))
            .expect("update");
        assert_eq!(updated.price, 155);

        let deleted = service.delete(13).expect("delete");
        assert_eq!(deleted.name, "Lychee Oolong Deluxe");
        assert!(matches!(service.delete(13), Err(DomainError::NotFound)));
    }

    #[test]
    fn search_spans_name_and_description() {
        let service = service();
        let filter = MenuFilter {
            category: None,
            query: "boba".to_string(),
        };
        let names: Vec<String> = service
            .list(&filter)
            .expect("list")
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "Classic Milk Tea",
                "Taro Milk Tea",
                "Matcha Milk Tea",
                "Strawberry Lychee",
                "Brown Sugar Boba Milk",
                "Rose Milk Tea"
            ]
        );
    }
}
