pub mod use_address_history_loader;
pub mod use_feed_pump;
