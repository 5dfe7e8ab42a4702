pub mod home;
pub mod products;
