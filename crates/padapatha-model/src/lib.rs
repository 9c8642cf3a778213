pub mod document;
pub mod error;
pub mod manifest;
pub mod page;
pub mod site;

pub use document::*;
pub use error::*;
pub use manifest::*;
pub use page::*;
pub use site::*;
