pub mod add;
pub mod analytics;
pub mod backup;
pub mod checkout;
pub mod del;
pub mod edit;
pub mod export;
pub mod reminder;
