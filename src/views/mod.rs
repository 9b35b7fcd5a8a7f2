pub mod chat;
pub mod features;
pub mod home;
pub mod resources;

pub use chat::ChatView;
pub use features::FeaturesView;
pub use home::HomeView;
pub use resources::ResourcesView;
