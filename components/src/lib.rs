pub mod error_banner;
pub mod user_fields;
pub mod user_item;
pub mod user_list;
