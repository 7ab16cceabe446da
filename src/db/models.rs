use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnimalType {
    Dog,
    Cat,
    Other,
}

impl AnimalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimalType::Dog => "dog",
            AnimalType::Cat => "cat",
            AnimalType::Other => "other",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DonationCategory {
    Food,
    Medical,
    Shelter,
}

impl DonationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DonationCategory::Food => "food",
            DonationCategory::Medical => "medical",
            DonationCategory::Shelter => "shelter",
        }
    }
}

/// A registered user. The password is stored as submitted and is never
/// serialized; use [`PublicUser`] for responses.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PublicUser {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        PublicUser {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AnimalType,
    pub breed: String,
    pub age: String,
    pub gender: Gender,
    pub image: String,
    pub description: String,
    pub is_adopted: bool,
    pub is_rescued: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewAnimal {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AnimalType,
    pub breed: String,
    pub age: String,
    pub gender: Gender,
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub is_adopted: bool,
    #[serde(default = "default_rescued")]
    pub is_rescued: bool,
}

fn default_rescued() -> bool {
    true
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Newsletter {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewNewsletter {
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShopItem {
    pub id: i32,
    pub name: String,
    pub price: i64,
    pub description: String,
    pub image: String,
    pub rating: u8,
    pub category: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct NewShopItem {
    pub name: String,
    pub price: i64,
    pub description: String,
    pub image: String,
    #[serde(default = "default_rating")]
    pub rating: u8,
    pub category: String,
}

fn default_rating() -> u8 {
    5
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DonationOption {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub amount: i64,
    pub category: DonationCategory,
    pub icon: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct NewDonationOption {
    pub title: String,
    pub description: String,
    pub amount: i64,
    pub category: DonationCategory,
    pub icon: String,
}
