//! UI Components
//!
//! One component per page plus the pieces they share.

mod toasts;
mod food_image;
mod item_row;
mod search_page;
mod admin_page;
mod login_page;

pub use toasts::Toasts;
pub use search_page::SearchPage;
pub use admin_page::AdminPage;
pub use login_page::LoginPage;
