pub mod notification_host;
pub mod page_header;
pub mod pagination_controls;
