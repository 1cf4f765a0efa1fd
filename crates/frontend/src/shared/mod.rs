pub mod api_utils;
pub mod capabilities;
pub mod components;
pub mod config;
pub mod error;
pub mod icons;
