#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryInput {
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentTypeInput {
    pub name: String,
    pub icon: String,
    pub is_cash: bool,
}
