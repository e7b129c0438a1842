use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, instrument, warn};

use crate::error::StoreError;
use crate::foods::dto::{CreateFoodRequest, ErrorBody, FoodBody, FoodListBody, MessageBody};
use crate::state::AppState;

/// POST /api/v1/food
///
/// The body is taken as a `Result` so a malformed payload is answered here
/// with the contract's JSON shape instead of axum's default rejection, and
/// never reaches the store.
#[instrument(skip(state, payload))]
pub async fn create_food(
    State(state): State<AppState>,
    payload: Result<Json<CreateFoodRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(p) => p,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "create_food body parse failed");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    message: "Could not parse Body",
                    error: rejection.body_text(),
                }),
            )
                .into_response();
        }
    };

    match state.foods.create(payload.into()).await {
        Ok(food) => (
            StatusCode::CREATED,
            Json(FoodBody {
                message: "Recipe created",
                data: food,
            }),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "create_food failed");
            (
                StatusCode::NOT_IMPLEMENTED,
                Json(ErrorBody {
                    message: "Could not create food",
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// GET /api/v1/food/:id
#[instrument(skip(state))]
pub async fn get_food(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.foods.find_by_id(id).await {
        Ok(food) => (
            StatusCode::OK,
            Json(FoodBody {
                message: "Retrieved Food",
                data: food,
            }),
        )
            .into_response(),
        Err(StoreError::NotFound) => {
            warn!(%id, "food not found");
            (
                StatusCode::NOT_FOUND,
                Json(MessageBody {
                    message: "Food not found",
                }),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, %id, "get_food failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    message: "Could not retrieve Food",
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// GET /api/v1/foods
#[instrument(skip(state))]
pub async fn list_foods(State(state): State<AppState>) -> Response {
    match state.foods.find_all().await {
        Ok(foods) => (StatusCode::OK, Json(FoodListBody { data: foods })).into_response(),
        Err(e) => {
            error!(error = %e, "list_foods failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    message: "Could not retrieve foods",
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
