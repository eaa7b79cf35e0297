pub mod models;
pub mod pools;
pub mod rows;

pub use pools::AppState;
