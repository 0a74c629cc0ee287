pub mod record;
pub mod upload;
