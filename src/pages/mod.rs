//! Routed Pages
//!
//! One component per client-side route.

mod about;
mod contact;
mod home;
mod login;
mod not_found;
mod place_details;
mod places;
mod register;

pub use about::About;
pub use contact::Contact;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use place_details::PlaceDetails;
pub use places::Places;
pub use register::Register;

/// Fetch lifecycle of a page
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Failed(String),
    Loaded(T),
}
