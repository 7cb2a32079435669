pub mod addon;
pub mod error;
pub mod link_handler;
pub mod listing_service;
pub mod mobile_service;
pub mod share_link_service;
