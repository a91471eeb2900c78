pub mod create_user;
pub mod delete_by_id;
pub mod delete_by_name;
pub mod rename_pricing;
pub mod sample;
pub mod update_pricing;
