pub mod errors;
pub mod category;
pub mod organization;
pub mod document;

pub use category::Category;
pub use document::Document;
pub use organization::{Organization, OrganizationInput};
