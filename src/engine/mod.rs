pub mod registry;
pub mod session;
pub mod shared;

pub use registry::SocialEngine;
pub use session::SessionStore;
pub use shared::SharedEngine;
