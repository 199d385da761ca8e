// In memory implementation of the travel storage ports.
//
// - One lock guards every table so that a cascade delete and a report read
//   never observe each other half way.
// - Seeded with the default catalog; `empty()` starts without one.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::modules::travel::core::catalog::{
    Category, PaymentType, default_categories, default_payment_types,
};
use crate::modules::travel::core::expense::Expense;
use crate::modules::travel::core::ports::{
    CatalogRepository, ExpenseRepository, StoreError, TripRepository,
};
use crate::modules::travel::core::trip::Trip;

#[derive(Default)]
struct Tables {
    trips: HashMap<String, Trip>,
    expenses: HashMap<String, Expense>,
    categories: HashMap<String, Category>,
    payment_types: HashMap<String, PaymentType>,
}

#[derive(Default)]
pub struct InMemoryTravelStore {
    tables: RwLock<Tables>,
    is_offline: bool,
}

impl InMemoryTravelStore {
    pub fn new() -> Self {
        let tables = Tables {
            categories: default_categories()
                .into_iter()
                .map(|c| (c.category_id.clone(), c))
                .collect(),
            payment_types: default_payment_types()
                .into_iter()
                .map(|p| (p.payment_type_id.clone(), p))
                .collect(),
            ..Tables::default()
        };
        Self {
            tables: RwLock::new(tables),
            is_offline: false,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Travel store offline".into()));
        }
        Ok(())
    }
}

fn insert_new<T>(
    table: &mut HashMap<String, T>,
    entity: &'static str,
    id: &str,
    row: T,
) -> Result<(), StoreError> {
    if table.contains_key(id) {
        return Err(StoreError::Backend(format!("{entity} {id} already exists")));
    }
    table.insert(id.to_string(), row);
    Ok(())
}

fn replace_existing<T>(
    table: &mut HashMap<String, T>,
    entity: &'static str,
    id: &str,
    row: T,
) -> Result<(), StoreError> {
    match table.get_mut(id) {
        Some(slot) => {
            *slot = row;
            Ok(())
        }
        None => Err(StoreError::Missing {
            entity,
            id: id.to_string(),
        }),
    }
}

fn remove_unused<T>(
    table: &mut HashMap<String, T>,
    entity: &'static str,
    id: &str,
    referencing_expenses: usize,
) -> Result<(), StoreError> {
    if !table.contains_key(id) {
        return Err(StoreError::Missing {
            entity,
            id: id.to_string(),
        });
    }
    if referencing_expenses > 0 {
        return Err(StoreError::InUse {
            entity,
            id: id.to_string(),
            count: referencing_expenses,
        });
    }
    table.remove(id);
    Ok(())
}

fn remove_existing<T>(
    table: &mut HashMap<String, T>,
    entity: &'static str,
    id: &str,
) -> Result<T, StoreError> {
    table.remove(id).ok_or_else(|| StoreError::Missing {
        entity,
        id: id.to_string(),
    })
}

#[async_trait]
impl TripRepository for InMemoryTravelStore {
    async fn insert(&self, trip: Trip) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        let id = trip.trip_id.clone();
        insert_new(&mut tables.trips, "trip", &id, trip)
    }

    async fn update(&self, trip: Trip) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        let id = trip.trip_id.clone();
        replace_existing(&mut tables.trips, "trip", &id, trip)
    }

    async fn get(&self, trip_id: &str) -> Result<Option<Trip>, StoreError> {
        self.ensure_online()?;
        Ok(self.tables.read().await.trips.get(trip_id).cloned())
    }

    async fn list(&self) -> Result<Vec<Trip>, StoreError> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        let mut trips: Vec<Trip> = tables.trips.values().cloned().collect();
        trips.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.trip_id.cmp(&a.trip_id))
        });
        Ok(trips)
    }

    async fn delete_with_expenses(&self, trip_id: &str) -> Result<usize, StoreError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        remove_existing(&mut tables.trips, "trip", trip_id)?;
        let before = tables.expenses.len();
        tables.expenses.retain(|_, e| e.trip_id != trip_id);
        Ok(before - tables.expenses.len())
    }
}

#[async_trait]
impl ExpenseRepository for InMemoryTravelStore {
    async fn insert(&self, expense: Expense) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        let id = expense.expense_id.clone();
        insert_new(&mut tables.expenses, "expense", &id, expense)
    }

    async fn update(&self, expense: Expense) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        let id = expense.expense_id.clone();
        replace_existing(&mut tables.expenses, "expense", &id, expense)
    }

    async fn get(&self, expense_id: &str) -> Result<Option<Expense>, StoreError> {
        self.ensure_online()?;
        Ok(self.tables.read().await.expenses.get(expense_id).cloned())
    }

    async fn delete(&self, expense_id: &str) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        remove_existing(&mut tables.expenses, "expense", expense_id).map(|_| ())
    }

    async fn list(&self) -> Result<Vec<Expense>, StoreError> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        let mut expenses: Vec<Expense> = tables.expenses.values().cloned().collect();
        expenses.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.expense_id.cmp(&a.expense_id))
        });
        Ok(expenses)
    }

    async fn list_by_trip(&self, trip_id: &str) -> Result<Vec<Expense>, StoreError> {
        let mut expenses = ExpenseRepository::list(self).await?;
        expenses.retain(|e| e.trip_id == trip_id);
        Ok(expenses)
    }

}

#[async_trait]
impl CatalogRepository for InMemoryTravelStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        self.ensure_online()?;
        let mut categories: Vec<Category> =
            self.tables.read().await.categories.values().cloned().collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn get_category(&self, category_id: &str) -> Result<Option<Category>, StoreError> {
        self.ensure_online()?;
        Ok(self.tables.read().await.categories.get(category_id).cloned())
    }

    async fn insert_category(&self, category: Category) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        let id = category.category_id.clone();
        insert_new(&mut tables.categories, "category", &id, category)
    }

    async fn update_category(&self, category: Category) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        let id = category.category_id.clone();
        replace_existing(&mut tables.categories, "category", &id, category)
    }

    async fn delete_category_if_unused(&self, category_id: &str) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        let in_use = tables
            .expenses
            .values()
            .filter(|e| e.category_id == category_id)
            .count();
        remove_unused(&mut tables.categories, "category", category_id, in_use)
    }

    async fn list_payment_types(&self) -> Result<Vec<PaymentType>, StoreError> {
        self.ensure_online()?;
        let mut payment_types: Vec<PaymentType> = self
            .tables
            .read()
            .await
            .payment_types
            .values()
            .cloned()
            .collect();
        payment_types.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(payment_types)
    }

    async fn get_payment_type(
        &self,
        payment_type_id: &str,
    ) -> Result<Option<PaymentType>, StoreError> {
        self.ensure_online()?;
        Ok(self
            .tables
            .read()
            .await
            .payment_types
            .get(payment_type_id)
            .cloned())
    }

    async fn insert_payment_type(&self, payment_type: PaymentType) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        let id = payment_type.payment_type_id.clone();
        insert_new(&mut tables.payment_types, "payment type", &id, payment_type)
    }

    async fn update_payment_type(&self, payment_type: PaymentType) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        let id = payment_type.payment_type_id.clone();
        replace_existing(&mut tables.payment_types, "payment type", &id, payment_type)
    }

    async fn delete_payment_type_if_unused(
        &self,
        payment_type_id: &str,
    ) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        let in_use = tables
            .expenses
            .values()
            .filter(|e| e.payment_type_id == payment_type_id)
            .count();
        remove_unused(
            &mut tables.payment_types,
            "payment type",
            payment_type_id,
            in_use,
        )
    }
}
