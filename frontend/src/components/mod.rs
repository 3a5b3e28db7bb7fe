pub mod chart;
pub mod chat;
pub mod home;
pub mod navbar;
pub mod results;
pub mod upload_form;
pub mod utils;
