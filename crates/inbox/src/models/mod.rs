//! Domain models for accounts, labels and inbox categories

mod account;
mod category;
mod label;

pub use account::{Account, AccountSource, StaticAccountSource};
pub use category::{Category, CategoryTotals};
pub use label::{CanonicalName, LabelRow, PrimaryLabel};
