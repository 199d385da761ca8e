// Pure decisions for catalog maintenance.
//
// - Names are required; icons fall back to a generic glyph.
// - Whether a row is still referenced is settled by the store at delete time.

use crate::modules::travel::core::catalog::{Category, PaymentType};
use crate::modules::travel::use_cases::manage_catalog::command::{
    CategoryInput, PaymentTypeInput,
};

const DEFAULT_ICON: &str = "fas fa-tag";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("name is required")]
    MissingName,
}

fn normalize(name: &str, icon: &str) -> Result<(String, String), DecideError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DecideError::MissingName);
    }
    let icon = match icon.trim() {
        "" => DEFAULT_ICON,
        icon => icon,
    };
    Ok((name.to_string(), icon.to_string()))
}

pub fn decide_category(category_id: String, input: CategoryInput) -> Result<Category, DecideError> {
    let (name, icon) = normalize(&input.name, &input.icon)?;
    Ok(Category {
        category_id,
        name,
        icon,
    })
}

pub fn decide_payment_type(
    payment_type_id: String,
    input: PaymentTypeInput,
) -> Result<PaymentType, DecideError> {
    let (name, icon) = normalize(&input.name, &input.icon)?;
    Ok(PaymentType {
        payment_type_id,
        name,
        icon,
        is_cash: input.is_cash,
    })
}
