use serde::{Deserialize, Serialize};

use crate::foods::repo::{Food, NewFood};

/// Every field is optional at the parse stage; missing integers default to
/// zero, matching what existing clients already send.
#[derive(Debug, Deserialize)]
pub struct CreateFoodRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub lifespan: i32,
    #[serde(default)]
    pub quantity: i32,
}

impl From<CreateFoodRequest> for NewFood {
    fn from(req: CreateFoodRequest) -> Self {
        Self {
            name: req.name,
            lifespan: req.lifespan,
            quantity: req.quantity,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: &'static str,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct FoodBody {
    pub message: &'static str,
    pub data: Food,
}

// The list response carries no message field; existing clients depend on the
// bare shape.
#[derive(Debug, Serialize)]
pub struct FoodListBody {
    pub data: Vec<Food>,
}
