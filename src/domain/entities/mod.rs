pub mod application;
pub mod credentials;
pub mod manifest;

pub use application::{Application, GitSource};
pub use credentials::Credentials;
pub use manifest::Manifest;
