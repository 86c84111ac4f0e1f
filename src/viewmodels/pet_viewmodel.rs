// ============================================================================
// PET VIEWMODEL - pets, profile details, platform stats
// ============================================================================

use crate::errors::ValidationError;
use crate::models::pet::NewPet;
use crate::models::{Pet, PetId, PetSex, PetSize, PetType, PlatformStats, UserProfile};
use crate::services::{ApiClient, GlooTransport, HttpTransport};
use crate::utils::validation::parse_number_or_zero;

/// Raw add-pet modal inputs; type and sex come from the selection
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AddPetForm {
    pub name: String,
    pub breed: String,
    pub weight: String,
    pub age_years: String,
    pub age_months: String,
}

impl AddPetForm {
    pub fn validate(&self, pet_type: PetType, sex: PetSex) -> Result<NewPet, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField("Pet name"));
        }
        let weight: f64 = parse_number_or_zero(&self.weight, "Weight")?;

        Ok(NewPet {
            pet_type,
            name: name.to_string(),
            breed: self.breed.trim().to_string(),
            weight,
            age_years: parse_number_or_zero(&self.age_years, "Age (years)")?,
            age_months: parse_number_or_zero(&self.age_months, "Age (months)")?,
            sex,
            size: PetSize::from_weight(weight),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PetOutcome {
    Invalid(ValidationError),
    Added,
    Removed,
    AddFailed(String),
    RemoveFailed(String),
}

impl PetOutcome {
    pub fn alert_text(&self) -> String {
        match self {
            PetOutcome::Invalid(error) => error.to_string(),
            PetOutcome::Added => "Pet added successfully!".to_string(),
            PetOutcome::Removed => "Pet removed.".to_string(),
            PetOutcome::AddFailed(error) => format!("Failed to add pet: {}", error),
            PetOutcome::RemoveFailed(error) => format!("Failed to remove pet: {}", error),
        }
    }

    /// Pet list changed and should be reloaded
    pub fn changed(&self) -> bool {
        matches!(self, PetOutcome::Added | PetOutcome::Removed)
    }
}

pub fn remove_confirm_text(pet: &Pet) -> String {
    format!("Remove {} from your pets?", pet.name)
}

pub struct PetViewModel<T = GlooTransport> {
    api: ApiClient<T>,
}

impl PetViewModel {
    pub fn new() -> Self {
        Self::with_client(ApiClient::new())
    }
}

impl<T: HttpTransport> PetViewModel<T> {
    pub fn with_client(api: ApiClient<T>) -> Self {
        Self { api }
    }

    /// `None` leaves whatever is on screen
    pub async fn load_pets(&self) -> Option<Vec<Pet>> {
        match self.api.pets().await {
            Ok(response) => {
                log::info!("🐾 {} pets loaded", response.pets.len());
                Some(response.pets)
            }
            Err(e) => {
                log::error!("❌ Failed to load pets: {}", e);
                None
            }
        }
    }

    pub async fn add_pet(&self, form: &AddPetForm, pet_type: PetType, sex: PetSex) -> PetOutcome {
        let pet = match form.validate(pet_type, sex) {
            Ok(pet) => pet,
            Err(error) => return PetOutcome::Invalid(error),
        };

        match self.api.create_pet(&pet).await {
            Ok(_) => {
                log::info!("✅ Pet added: {}", pet.name);
                PetOutcome::Added
            }
            Err(e) => {
                log::error!("❌ Failed to add pet: {}", e);
                PetOutcome::AddFailed(e.to_string())
            }
        }
    }

    pub async fn delete_pet(&self, id: PetId) -> PetOutcome {
        match self.api.delete_pet(id).await {
            Ok(_) => {
                log::info!("🗑️ Pet {} removed", id);
                PetOutcome::Removed
            }
            Err(e) => {
                log::error!("❌ Failed to remove pet {}: {}", id, e);
                PetOutcome::RemoveFailed(e.to_string())
            }
        }
    }

    /// Extended profile; `None` means the session user alone is shown
    pub async fn load_profile(&self) -> Option<UserProfile> {
        match self.api.profile().await {
            Ok(response) if response.success => response.data.map(|data| data.user),
            Ok(_) => None,
            Err(e) => {
                log::error!("❌ Failed to load user profile: {}", e);
                None
            }
        }
    }

    pub async fn load_platform_stats(&self) -> Option<PlatformStats> {
        match self.api.stats().await {
            Ok(response) if response.success => response.stats,
            Ok(_) => None,
            Err(e) => {
                log::warn!("⚠️ Stats unavailable: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::transport::testing::MockTransport;
    use crate::services::HttpMethod;
    use serde_json::json;

    fn vm(transport: MockTransport) -> PetViewModel<MockTransport> {
        PetViewModel::with_client(ApiClient::with_transport("/api", transport))
    }

    fn form(weight: &str) -> AddPetForm {
        AddPetForm {
            name: "Max".to_string(),
            breed: "Beagle".to_string(),
            weight: weight.to_string(),
            age_years: "4".to_string(),
            age_months: "".to_string(),
        }
    }

    #[tokio::test]
    async fn empty_pet_list_loads_as_empty() {
        let vm = vm(MockTransport::new().reply(200, json!({"pets": []})));
        assert_eq!(vm.load_pets().await, Some(vec![]));
    }

    #[tokio::test]
    async fn failed_pet_load_leaves_list_alone() {
        let vm = vm(MockTransport::new().reply(401, json!({"message": "Please login first"})));
        assert_eq!(vm.load_pets().await, None);
    }

    #[tokio::test]
    async fn add_pet_sends_sized_payload() {
        let vm = vm(MockTransport::new().reply(201, json!({"success": true})));
        let outcome = vm.add_pet(&form("30"), PetType::Dog, PetSex::Female).await;
        assert_eq!(outcome, PetOutcome::Added);
        assert!(outcome.changed());

        let body = vm.api.transport().requests()[0].body.clone().unwrap();
        assert_eq!(
            body,
            json!({
                "type": "dog", "name": "Max", "breed": "Beagle", "weight": 30.0,
                "ageYears": 4, "ageMonths": 0, "sex": "female", "size": "medium"
            })
        );
    }

    #[tokio::test]
    async fn add_pet_without_name_sends_nothing() {
        let vm = vm(MockTransport::new());
        let outcome = vm
            .add_pet(&AddPetForm { name: " ".to_string(), ..form("10") }, PetType::Cat, PetSex::Male)
            .await;
        assert_eq!(outcome, PetOutcome::Invalid(ValidationError::MissingField("Pet name")));
        assert_eq!(vm.api.transport().request_count(), 0);
    }

    #[tokio::test]
    async fn add_pet_failure_reports_server_message() {
        let vm = vm(MockTransport::new().reply(400, json!({"message": "Owner not found"})));
        let outcome = vm.add_pet(&form("80"), PetType::Dog, PetSex::Male).await;
        assert_eq!(outcome.alert_text(), "Failed to add pet: Owner not found");
    }

    #[tokio::test]
    async fn add_pet_ignores_error_field() {
        let vm = vm(MockTransport::new().reply(404, json!({"error": "Not found"})));
        let outcome = vm.add_pet(&form("80"), PetType::Dog, PetSex::Male).await;
        assert_eq!(outcome.alert_text(), "Failed to add pet: API call failed");
    }

    #[tokio::test]
    async fn mixed_pet_list_still_loads() {
        let vm = vm(MockTransport::new().reply(
            200,
            json!({"pets": [
                {"id": 1, "name": "Max", "size": "Large"},
                {"id": 2, "name": "Bella", "type": "cat", "size": "medium"},
                {"id": 3, "name": null}
            ]}),
        ));
        let pets = vm.load_pets().await.unwrap();
        assert_eq!(pets.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(pets[2].name, "");
    }

    #[tokio::test]
    async fn delete_pet_hits_pet_url() {
        let vm = vm(MockTransport::new().reply(200, json!({"success": true})));
        assert_eq!(vm.delete_pet(12).await, PetOutcome::Removed);
        let request = &vm.api.transport().requests()[0];
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.url, "/api/pets/12");
    }

    #[tokio::test]
    async fn profile_falls_back_when_unavailable() {
        let vm = vm(MockTransport::new()
            .reply(200, json!({"success": true, "data": {"user": {"phone": "15551234567"}, "dogs": []}}))
            .reply(401, json!({"success": false})));
        let profile = vm.load_profile().await.unwrap();
        assert_eq!(profile.phone.as_deref(), Some("15551234567"));
        assert_eq!(vm.load_profile().await, None);
    }

    #[tokio::test]
    async fn platform_stats_need_success_flag() {
        let vm = vm(MockTransport::new()
            .reply(200, json!({"success": true, "stats": {"totalUsers": 3, "totalDogs": 5, "owners": 2, "walkers": 1}}))
            .reply(200, json!({"success": false}))
            .fail("offline"));

        let stats = vm.load_platform_stats().await.unwrap();
        assert_eq!(stats.total_dogs, 5);
        assert_eq!(vm.api.transport().requests()[0].url, "/api/stats");
        assert!(vm.load_platform_stats().await.is_none());
        assert!(vm.load_platform_stats().await.is_none());
    }

    #[test]
    fn weight_must_be_numeric() {
        assert_eq!(
            form("heavy").validate(PetType::Dog, PetSex::Male),
            Err(ValidationError::InvalidNumber("Weight"))
        );
    }
}
