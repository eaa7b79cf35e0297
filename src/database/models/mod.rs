pub mod activity;
pub mod column;
pub mod user;

pub use activity::ActivityRecord;
pub use column::{ColumnDescriptor, ColumnRow};
pub use user::PublicUser;
