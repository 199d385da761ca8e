// Lookup tables that expenses are tagged with.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: String,
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentType {
    pub payment_type_id: String,
    pub name: String,
    pub icon: String,
    /// Expenses paid with this type are taken from the trip's cash in hand.
    pub is_cash: bool,
}

pub const CASH_PAYMENT_TYPE_ID: &str = "pt-cash";

pub fn default_categories() -> Vec<Category> {
    [
        ("cat-fuel", "Combustível", "fas fa-gas-pump"),
        ("cat-food", "Alimentação", "fas fa-utensils"),
        ("cat-lodging", "Hospedagem", "fas fa-bed"),
        ("cat-transport", "Transporte", "fas fa-car"),
        ("cat-entertainment", "Entretenimento", "fas fa-ticket-alt"),
        ("cat-shopping", "Compras", "fas fa-shopping-bag"),
        ("cat-other", "Outros", "fas fa-ellipsis-h"),
    ]
    .into_iter()
    .map(|(id, name, icon)| Category {
        category_id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}

pub fn default_payment_types() -> Vec<PaymentType> {
    [
        (CASH_PAYMENT_TYPE_ID, "Dinheiro", "fas fa-money-bill-wave", true),
        ("pt-credit-card", "Cartão de Crédito", "fas fa-credit-card", false),
        ("pt-debit-card", "Cartão de Débito", "fas fa-credit-card", false),
        ("pt-pix", "PIX", "fas fa-mobile-alt", false),
        ("pt-transfer", "Transferência", "fas fa-exchange-alt", false),
    ]
    .into_iter()
    .map(|(id, name, icon, is_cash)| PaymentType {
        payment_type_id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        is_cash,
    })
    .collect()
}
