pub mod check;
pub mod list;
pub mod month;
pub mod notify;
pub mod week;
