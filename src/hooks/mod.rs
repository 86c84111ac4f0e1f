pub mod use_hash_page;
pub mod use_login_status;
pub mod use_page_loader;

pub use use_hash_page::use_hash_page;
pub use use_login_status::use_login_status;
pub use use_page_loader::{run_loader, use_page_loader};
