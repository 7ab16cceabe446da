pub mod animals;
pub mod donations;
pub mod newsletter;
pub mod shop;
pub mod users;
