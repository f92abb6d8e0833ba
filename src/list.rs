use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ingredient::Ingredient;
use crate::quantity::Quantity;
use crate::unit::Unit;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub id: String,
    pub quantity: Option<Quantity>,
    pub unit: Option<Unit>,
    pub name: String,
}

/// Shopping list built up from recipe ingredients
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShoppingList {
    items: Vec<ShoppingListItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(
        &mut self,
        quantity: Option<Quantity>,
        unit: Option<Unit>,
        name: impl Into<String>,
    ) -> &ShoppingListItem {
        self.items.push(ShoppingListItem {
            id: Uuid::new_v4().to_string(),
            quantity,
            unit,
            name: name.into(),
        });
        &self.items[self.items.len() - 1]
    }

    /// Add one item per ingredient, returning the new items
    pub fn add_ingredients(&mut self, ingredients: &[Ingredient]) -> &[ShoppingListItem] {
        let start = self.items.len();
        for ingredient in ingredients {
            self.add_item(ingredient.quantity, ingredient.unit, ingredient.name.clone());
        }
        &self.items[start..]
    }

    pub fn delete_item(&mut self, id: &str) -> bool {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn update_count(&mut self, id: &str, quantity: Option<Quantity>) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&ShoppingListItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[ShoppingListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_item_assigns_unique_ids() {
        let mut list = ShoppingList::new();
        let first = list.add_item(Quantity::new(1, 2), Some(Unit::Cup), "flour").id.clone();
        let second = list.add_item(Quantity::new(1, 2), Some(Unit::Cup), "flour").id.clone();
        assert_ne!(first, second);
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(&first).unwrap().name, "flour");
    }

    #[test]
    fn test_add_ingredients_is_one_to_one() {
        let ingredients = vec![
            Ingredient::parse("2 cups milk"),
            Ingredient::parse("salt"),
        ];
        let mut list = ShoppingList::new();
        list.add_item(None, None, "bread");

        let added = list.add_ingredients(&ingredients);
        assert_eq!(added.len(), 2);
        assert_eq!(added[0].quantity, Some(Quantity::whole(2)));
        assert_eq!(added[0].unit, Some(Unit::Cup));
        assert_eq!(added[1].name, "salt");
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_delete_item() {
        let mut list = ShoppingList::new();
        let id = list.add_item(None, None, "eggs").id.clone();
        list.add_item(None, None, "butter");

        assert!(list.delete_item(&id));
        assert!(!list.delete_item(&id));
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].name, "butter");
    }

    #[test]
    fn test_update_count() {
        let mut list = ShoppingList::new();
        let id = list.add_item(Some(Quantity::whole(1)), Some(Unit::Lb), "beef").id.clone();

        assert!(list.update_count(&id, Quantity::new(3, 2)));
        assert_eq!(list.get(&id).unwrap().quantity, Quantity::new(3, 2));
        assert!(!list.update_count("missing", None));
    }

    #[test]
    fn test_empty_list() {
        let list = ShoppingList::new();
        assert!(list.is_empty());
        assert!(list.items().is_empty());
    }
}
