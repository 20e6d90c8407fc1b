pub mod abm;
pub mod landing;
pub mod seo;
pub mod settings;

pub use abm::AbmPage;
pub use landing::LandingPage;
pub use seo::SeoPage;
pub use settings::SettingsPage;
