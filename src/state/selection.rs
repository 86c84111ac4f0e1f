// ============================================================================
// SELECTION STATE - choices made by clicks, read at submit time
// ============================================================================

use crate::models::{AccountType, PetId, PetSex, PetType, Rating, Schedule, TimeSlot, WalkerId};

/// One option group rendered as mutually exclusive buttons
pub trait Choice: Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    /// Wire value
    fn value(self) -> &'static str;

    fn label(self) -> &'static str;
}

impl Choice for AccountType {
    const ALL: &'static [Self] = &[AccountType::Owner, AccountType::Walker];

    fn value(self) -> &'static str {
        match self {
            AccountType::Owner => "owner",
            AccountType::Walker => "walker",
        }
    }

    fn label(self) -> &'static str {
        match self {
            AccountType::Owner => "🐕 Pet Owner",
            AccountType::Walker => "🚶 Pet Walker",
        }
    }
}

impl Choice for PetType {
    const ALL: &'static [Self] = &[PetType::Dog, PetType::Cat];

    fn value(self) -> &'static str {
        match self {
            PetType::Dog => "dog",
            PetType::Cat => "cat",
        }
    }

    fn label(self) -> &'static str {
        match self {
            PetType::Dog => "🐕 Dog",
            PetType::Cat => "🐈 Cat",
        }
    }
}

impl Choice for PetSex {
    const ALL: &'static [Self] = &[PetSex::Male, PetSex::Female];

    fn value(self) -> &'static str {
        match self {
            PetSex::Male => "male",
            PetSex::Female => "female",
        }
    }

    fn label(self) -> &'static str {
        match self {
            PetSex::Male => "Male",
            PetSex::Female => "Female",
        }
    }
}

impl Choice for Schedule {
    const ALL: &'static [Self] = &[Schedule::OneTime, Schedule::Recurring];

    fn value(self) -> &'static str {
        match self {
            Schedule::OneTime => "onetime",
            Schedule::Recurring => "recurring",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Schedule::OneTime => "One Time",
            Schedule::Recurring => "Repeat Weekly",
        }
    }
}

impl Choice for TimeSlot {
    const ALL: &'static [Self] = &[
        TimeSlot::EarlyMorning,
        TimeSlot::LateMorning,
        TimeSlot::Midday,
        TimeSlot::Afternoon,
        TimeSlot::LateAfternoon,
        TimeSlot::Evening,
    ];

    fn value(self) -> &'static str {
        self.as_str()
    }

    fn label(self) -> &'static str {
        self.as_str()
    }
}

/// Selection scoped to the session; reset on logout
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionState {
    pub account_type: AccountType,
    pub pet_type: PetType,
    pub pet_sex: PetSex,
    pub schedule: Schedule,
    pub time_slot: TimeSlot,
    pub rating: Rating,
    chosen_pets: Vec<PetId>,
    pub walker: Option<WalkerId>,
}

impl SelectionState {
    pub fn select_account_type(&mut self, account_type: AccountType) {
        self.account_type = account_type;
    }

    pub fn select_pet_type(&mut self, pet_type: PetType) {
        self.pet_type = pet_type;
    }

    pub fn select_pet_sex(&mut self, sex: PetSex) {
        self.pet_sex = sex;
    }

    pub fn select_schedule(&mut self, schedule: Schedule) {
        self.schedule = schedule;
    }

    pub fn select_time_slot(&mut self, slot: TimeSlot) {
        self.time_slot = slot;
    }

    pub fn set_rating(&mut self, stars: u8) {
        self.rating = Rating::new(stars);
    }

    pub fn select_walker(&mut self, walker: WalkerId) {
        self.walker = Some(walker);
    }

    /// Add `id` if absent, drop it if present. Returns whether it is now chosen.
    pub fn toggle_pet(&mut self, id: PetId) -> bool {
        if let Some(pos) = self.chosen_pets.iter().position(|chosen| *chosen == id) {
            self.chosen_pets.remove(pos);
            false
        } else {
            self.chosen_pets.push(id);
            true
        }
    }

    pub fn is_pet_chosen(&self, id: PetId) -> bool {
        self.chosen_pets.contains(&id)
    }

    pub fn chosen_pets(&self) -> &[PetId] {
        &self.chosen_pets
    }

    /// Drop chosen ids no longer in the owner's pet list
    pub fn retain_pets(&mut self, available: &[PetId]) {
        self.chosen_pets.retain(|id| available.contains(id));
    }
}
