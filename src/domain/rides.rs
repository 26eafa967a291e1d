//! Ride booking: the car catalogue, fare estimates and the autofill draft.

use serde::{Deserialize, Serialize};

/// Distance assumed when both ends of the trip are filled in.
const ROUTED_DISTANCE_KM: f64 = 8.0;
/// Distance assumed before the user has entered a full route.
const DEFAULT_DISTANCE_KM: f64 = 5.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Car {
    pub id: &'static str,
    pub category: &'static str,
    pub name: &'static str,
    pub seats: u8,
    pub luggage: u8,
    pub price_base: f64,
    pub price_per_km: f64,
    pub eta_min: u16,
    pub rating: f32,
}

pub static CARS: [Car; 6] = [
    Car {
        id: "c-mid-1",
        category: "Mid-size SUV",
        name: "Hyundai Tucson",
        seats: 5,
        luggage: 3,
        price_base: 250.0,
        price_per_km: 40.0,
        eta_min: 6,
        rating: 4.6,
    },
    Car {
        id: "c-suv-1",
        category: "SUV",
        name: "Toyota Land Cruiser",
        seats: 7,
        luggage: 4,
        price_base: 400.0,
        price_per_km: 65.0,
        eta_min: 10,
        rating: 4.8,
    },
    Car {
        id: "c-sal-1",
        category: "Saloon",
        name: "Toyota Corolla",
        seats: 4,
        luggage: 2,
        price_base: 180.0,
        price_per_km: 30.0,
        eta_min: 5,
        rating: 4.5,
    },
    Car {
        id: "c-hatch-1",
        category: "Hatchback",
        name: "VW Polo",
        seats: 4,
        luggage: 1,
        price_base: 150.0,
        price_per_km: 25.0,
        eta_min: 4,
        rating: 4.2,
    },
    Car {
        id: "c-lux-1",
        category: "Luxury",
        name: "Mercedes E-Class",
        seats: 4,
        luggage: 3,
        price_base: 700.0,
        price_per_km: 120.0,
        eta_min: 8,
        rating: 4.9,
    },
    Car {
        id: "c-van-1",
        category: "Van",
        name: "Toyota Hiace",
        seats: 12,
        luggage: 8,
        price_base: 600.0,
        price_per_km: 80.0,
        eta_min: 12,
        rating: 4.4,
    },
];

/// Distinct categories in catalogue order.
pub fn categories() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for car in CARS.iter() {
        if !seen.contains(&car.category) {
            seen.push(car.category);
        }
    }
    seen
}

pub fn cars_in_category(category: &str) -> impl Iterator<Item = &'static Car> + '_ {
    CARS.iter().filter(move |car| car.category == category)
}

/// Unknown ids fall back to the first car in the catalogue.
pub fn find_car(id: &str) -> &'static Car {
    CARS.iter().find(|car| car.id == id).unwrap_or(&CARS[0])
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FareEstimate {
    pub fare: u64,
    pub distance_km: f64,
}

pub fn estimate_fare(car: &Car, pickup: &str, destination: &str) -> FareEstimate {
    let distance_km = if !pickup.trim().is_empty() && !destination.trim().is_empty() {
        ROUTED_DISTANCE_KM
    } else {
        DEFAULT_DISTANCE_KM
    };
    FareEstimate {
        fare: (car.price_base + car.price_per_km * distance_km).round() as u64,
        distance_km,
    }
}

/// Last-entered ride form values, kept locally so the form refills on return.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RideDraft {
    #[serde(default)]
    pub pickup: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default = "default_asap")]
    pub asap: bool,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default = "default_category")]
    pub selected_category: String,
    #[serde(default = "default_car_id")]
    pub selected_car_id: String,
}

fn default_asap() -> bool {
    true
}

fn default_category() -> String {
    CARS[0].category.to_string()
}

fn default_car_id() -> String {
    CARS[0].id.to_string()
}

impl Default for RideDraft {
    fn default() -> Self {
        Self {
            pickup: String::new(),
            destination: String::new(),
            asap: default_asap(),
            date: String::new(),
            time: String::new(),
            selected_category: default_category(),
            selected_car_id: default_car_id(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RideAction {
    SetPickup(String),
    SetDestination(String),
    /// Switching ASAP on stamps the supplied current date and time.
    SetAsap { asap: bool, date: String, time: String },
    SetDate(String),
    SetTime(String),
    SelectCategory(String),
    SelectCar(String),
}

impl RideDraft {
    pub fn apply(self, action: RideAction) -> Self {
        match action {
            RideAction::SetPickup(pickup) => Self { pickup, ..self },
            RideAction::SetDestination(destination) => Self {
                destination,
                ..self
            },
            RideAction::SetAsap { asap: true, date, time } => Self {
                asap: true,
                date,
                time,
                ..self
            },
            RideAction::SetAsap { asap: false, .. } => Self {
                asap: false,
                ..self
            },
            RideAction::SetDate(date) => Self { date, ..self },
            RideAction::SetTime(time) => Self { time, ..self },
            RideAction::SelectCategory(category) => {
                let selected_car_id = cars_in_category(&category)
                    .next()
                    .map(|car| car.id.to_string())
                    .unwrap_or(self.selected_car_id.clone());
                Self {
                    selected_category: category,
                    selected_car_id,
                    ..self
                }
            }
            RideAction::SelectCar(selected_car_id) => Self {
                selected_car_id,
                ..self
            },
        }
    }

    pub fn car(&self) -> &'static Car {
        find_car(&self.selected_car_id)
    }

    pub fn fare(&self) -> FareEstimate {
        estimate_fare(self.car(), &self.pickup, &self.destination)
    }

    pub fn when_label(&self) -> String {
        if self.asap {
            "Depart now".to_string()
        } else {
            format!("{} {}", self.date, self.time).trim().to_string()
        }
    }

    /// Plain-text booking summary offered as a download.
    pub fn summary(&self) -> String {
        let car = self.car();
        let dash = |value: &str| {
            if value.trim().is_empty() {
                "—".to_string()
            } else {
                value.to_string()
            }
        };
        [
            "Booking Summary".to_string(),
            String::new(),
            format!("Pickup: {}", dash(&self.pickup)),
            format!("Destination: {}", dash(&self.destination)),
            format!("When: {}", self.when_label()),
            format!("Category: {}", self.selected_category),
            format!("Car: {}", car.name),
            format!("Seats: {}", car.seats),
            format!("Rating: {}", car.rating),
            format!("Estimated Fare: KSH {}", self.fare().fare),
        ]
        .join("\n")
            + "\n"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_keep_catalogue_order() {
        assert_eq!(
            categories(),
            vec!["Mid-size SUV", "SUV", "Saloon", "Hatchback", "Luxury", "Van"]
        );
    }

    #[test]
    fn fare_uses_routed_distance_once_both_ends_are_known() {
        let corolla = find_car("c-sal-1");
        assert_eq!(estimate_fare(corolla, "", "").fare, 180 + 30 * 5);
        assert_eq!(estimate_fare(corolla, "CBD", "").distance_km, 5.0);
        assert_eq!(estimate_fare(corolla, "CBD", "JKIA").fare, 180 + 30 * 8);
    }

    #[test]
    fn unknown_car_falls_back_to_first() {
        assert_eq!(find_car("c-spaceship").id, "c-mid-1");
    }

    #[test]
    fn selecting_category_selects_its_first_car() {
        let draft = RideDraft::default().apply(RideAction::SelectCategory("Van".to_string()));
        assert_eq!(draft.selected_car_id, "c-van-1");
        assert_eq!(draft.car().name, "Toyota Hiace");
    }

    #[test]
    fn asap_stamps_current_time() {
        let draft = RideDraft::default()
            .apply(RideAction::SetAsap {
                asap: false,
                date: String::new(),
                time: String::new(),
            })
            .apply(RideAction::SetDate("2025-03-01".into()))
            .apply(RideAction::SetTime("09:30".into()));
        assert_eq!(draft.when_label(), "2025-03-01 09:30");

        let draft = draft.apply(RideAction::SetAsap {
            asap: true,
            date: "2025-03-02".into(),
            time: "10:00".into(),
        });
        assert_eq!(draft.date, "2025-03-02");
        assert_eq!(draft.when_label(), "Depart now");
    }

    #[test]
    fn partial_draft_json_fills_defaults() {
        let draft: RideDraft = serde_json::from_str(r#"{"pickup":"Westlands"}"#).unwrap();
        assert_eq!(draft.pickup, "Westlands");
        assert!(draft.asap);
        assert_eq!(draft.selected_car_id, "c-mid-1");
    }

    #[test]
    fn summary_lists_fare() {
        let summary = RideDraft::default().summary();
        assert!(summary.contains("Pickup: —"));
        assert!(summary.contains("Estimated Fare: KSH 450"));
    }
}
