use serde::{Deserialize, Serialize};

use crate::models::lenient::{null_as_default, or_default};
use crate::models::user::UserId;

pub type PetId = i64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetType {
    #[default]
    Dog,
    Cat,
}

impl PetType {
    pub fn emoji(self) -> &'static str {
        match self {
            PetType::Dog => "🐕",
            PetType::Cat => "🐈",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetSex {
    #[default]
    Male,
    Female,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetSize {
    Small,
    Medium,
    Large,
}

impl PetSize {
    /// Size bucket from weight in lbs: < 25 small, < 60 medium, else large
    pub fn from_weight(weight: f64) -> Self {
        if weight < 25.0 {
            PetSize::Small
        } else if weight < 60.0 {
            PetSize::Medium
        } else {
            PetSize::Large
        }
    }
}

/// Pet as listed by `GET /api/pets`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    #[serde(default, deserialize_with = "or_default")]
    pub owner_id: Option<UserId>,
    /// Unknown types show as dogs
    #[serde(rename = "type", default, deserialize_with = "or_default")]
    pub pet_type: PetType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "or_default")]
    pub breed: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub weight: Option<f64>,
    #[serde(default, deserialize_with = "or_default")]
    pub age: Option<u32>,
    #[serde(default, deserialize_with = "or_default")]
    pub sex: Option<PetSex>,
    #[serde(default, deserialize_with = "or_default")]
    pub size: Option<PetSize>,
}

impl Pet {
    pub fn breed_label(&self) -> &str {
        match self.breed.as_deref() {
            Some(breed) if !breed.trim().is_empty() => breed,
            _ => "Mixed breed",
        }
    }

    pub fn type_label(&self) -> &'static str {
        match self.pet_type {
            PetType::Dog => "Dog",
            PetType::Cat => "Cat",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PetsResponse {
    #[serde(default)]
    pub pets: Vec<Pet>,
}

/// Body of `POST /api/pets` from the add-pet modal
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewPet {
    #[serde(rename = "type")]
    pub pet_type: PetType,
    pub name: String,
    pub breed: String,
    pub weight: f64,
    #[serde(rename = "ageYears")]
    pub age_years: u32,
    #[serde(rename = "ageMonths")]
    pub age_months: u32,
    pub sex: PetSex,
    pub size: PetSize,
}
