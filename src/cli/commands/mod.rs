mod migrate;
mod reslug;
mod repair;
mod images;
mod slug;

pub use migrate::handle_migrate_command;
pub use reslug::handle_reslug_command;
pub use repair::handle_repair_command;
pub use images::handle_images_command;
pub use slug::handle_slug_command;
