//! UI Components
//!
//! Reusable Leptos components.

mod destination_card;
mod fallback_image;
mod footer;
mod navbar;
mod password_input;
mod place_card;
mod preloader;
mod require_auth;
mod shimmer_card;
mod toast;

pub use destination_card::DestinationCard;
pub use fallback_image::{FallbackImage, HERO_PLACEHOLDER};
pub use footer::Footer;
pub use navbar::Navbar;
pub use password_input::PasswordInput;
pub use place_card::PlaceCard;
pub use preloader::Preloader;
pub use require_auth::RequireAuth;
pub use shimmer_card::ShimmerGrid;
pub use toast::{ToastHost, Toasts};
