// Catalog maintenance for categories and payment types.

use std::sync::Arc;

use uuid::Uuid;

use crate::modules::travel::core::catalog::{Category, PaymentType};
use crate::modules::travel::core::ports::{CatalogRepository, StoreError};
use crate::modules::travel::use_cases::manage_catalog::command::{
    CategoryInput, PaymentTypeInput,
};
use crate::modules::travel::use_cases::manage_catalog::decide::{
    DecideError, decide_category, decide_payment_type,
};
use crate::shared::application::errors::ApplicationError;

fn rejected(reason: DecideError) -> ApplicationError {
    ApplicationError::Domain(reason.to_string())
}

fn store_failure(e: StoreError) -> ApplicationError {
    match e {
        StoreError::Missing { entity, id } => ApplicationError::not_found(entity, id),
        StoreError::InUse { entity, id, count } => ApplicationError::InUse { entity, id, count },
        other => other.into(),
    }
}

pub struct CatalogHandler<TStore>
where
    TStore: CatalogRepository + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> CatalogHandler<TStore>
where
    TStore: CatalogRepository + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, ApplicationError> {
        Ok(self.store.list_categories().await?)
    }

    pub async fn create_category(&self, input: CategoryInput) -> Result<Category, ApplicationError> {
        let id = Uuid::now_v7().to_string();
        let category = decide_category(id, input).map_err(rejected)?;
        self.store.insert_category(category.clone()).await?;
        tracing::info!(category_id = %category.category_id, name = %category.name, "category created");
        Ok(category)
    }

    pub async fn update_category(
        &self,
        category_id: &str,
        input: CategoryInput,
    ) -> Result<Category, ApplicationError> {
        let category = decide_category(category_id.to_string(), input).map_err(rejected)?;
        self.store
            .update_category(category.clone())
            .await
            .map_err(store_failure)?;
        tracing::info!(%category_id, "category updated");
        Ok(category)
    }

    pub async fn delete_category(&self, category_id: &str) -> Result<(), ApplicationError> {
        self.store
            .delete_category_if_unused(category_id)
            .await
            .map_err(store_failure)?;
        tracing::info!(%category_id, "category deleted");
        Ok(())
    }

    pub async fn list_payment_types(&self) -> Result<Vec<PaymentType>, ApplicationError> {
        Ok(self.store.list_payment_types().await?)
    }

    pub async fn create_payment_type(
        &self,
        input: PaymentTypeInput,
    ) -> Result<PaymentType, ApplicationError> {
        let id = Uuid::now_v7().to_string();
        let payment_type = decide_payment_type(id, input).map_err(rejected)?;
        self.store.insert_payment_type(payment_type.clone()).await?;
        tracing::info!(
            payment_type_id = %payment_type.payment_type_id,
            name = %payment_type.name,
            "payment type created"
        );
        Ok(payment_type)
    }

    pub async fn update_payment_type(
        &self,
        payment_type_id: &str,
        input: PaymentTypeInput,
    ) -> Result<PaymentType, ApplicationError> {
        let payment_type =
            decide_payment_type(payment_type_id.to_string(), input).map_err(rejected)?;
        self.store
            .update_payment_type(payment_type.clone())
            .await
            .map_err(store_failure)?;
        tracing::info!(%payment_type_id, "payment type updated");
        Ok(payment_type)
    }

    pub async fn delete_payment_type(&self, payment_type_id: &str) -> Result<(), ApplicationError> {
        self.store
            .delete_payment_type_if_unused(payment_type_id)
            .await
            .map_err(store_failure)?;
        tracing::info!(%payment_type_id, "payment type deleted");
        Ok(())
    }
}
