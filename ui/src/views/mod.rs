mod landing;
pub use landing::Landing;

mod placeholder;
pub use placeholder::Placeholder;
