use std::sync::Arc;

use axum::{Json, extract::State as AppState};
use chrono::{SecondsFormat, Utc};

use cart::orders::{Order, OrderRequest, OrderResponse, Status};

use crate::{
    error::AppError::{self, Validation},
    state::State,
};

pub const MISSING_FIELDS: &str = "Thiếu thông tin: Số bàn và món ăn là bắt buộc";
pub const BLANK_NAME: &str = "Số bàn không được để trống";

/// `POST /orders`: validate, stamp an order, append one sheet row.
pub async fn orders_handler(
    AppState(state): AppState<Arc<State>>,
    Json(payload): Json<OrderRequest>,
) -> Result<Json<OrderResponse>, AppError> {
    let order = build_order(payload)?;

    state.store.append(&order).await?;

    Ok(Json(OrderResponse::ok(order.order_id)))
}

/// Server-side validation. Client-side checks are never trusted.
fn build_order(payload: OrderRequest) -> Result<Order, AppError> {
    let OrderRequest {
        name,
        items,
        total_price,
        notes,
    } = payload;

    let (Some(name), Some(items)) = (name, items) else {
        return Err(Validation(MISSING_FIELDS.to_string()));
    };
    if name.is_empty() || items.is_empty() {
        return Err(Validation(MISSING_FIELDS.to_string()));
    }

    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(Validation(BLANK_NAME.to_string()));
    }

    let now = Utc::now();

    Ok(Order {
        // Millisecond timestamp, unique enough per process. Concurrent
        // submissions in the same millisecond can collide; accepted.
        order_id: now.timestamp_millis().to_string(),
        name,
        items,
        total_price: total_price.unwrap_or(0),
        notes: notes.unwrap_or_default(),
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        status: Status::Pending,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{Json, extract::State as AppState, http::StatusCode, response::IntoResponse};

    use cart::{
        CartItem, Category, MenuItem,
        orders::{OrderRequest, Status},
    };

    use super::{BLANK_NAME, MISSING_FIELDS, orders_handler};
    use crate::{config::Config, sheets::RecordingStore, state::State};

    fn test_config() -> Config {
        Config {
            port: 0,
            sheets_url: "http://localhost:0".to_string(),
            sheet_id: "test".to_string(),
            sheet_range: "Orders!A:G".to_string(),
            sheets_token: "test".to_string(),
        }
    }

    fn state_with(store: Arc<RecordingStore>) -> Arc<State> {
        Arc::new(State {
            config: test_config(),
            store,
        })
    }

    fn pho_bo_x2() -> CartItem {
        CartItem {
            item: MenuItem {
                id: "pho-bo".to_string(),
                name: "Phở Bò".to_string(),
                price: 45_000,
                category: Category::Main,
                image: "🍜".to_string(),
                description: None,
            },
            quantity: 2,
        }
    }

    fn request(name: Option<&str>, items: Option<Vec<CartItem>>) -> OrderRequest {
        OrderRequest {
            name: name.map(str::to_string),
            items,
            total_price: Some(90_000),
            notes: None,
        }
    }

    #[tokio::test]
    async fn missing_name_is_rejected_without_append() {
        let store = Arc::new(RecordingStore::new());

        let err = orders_handler(
            AppState(state_with(store.clone())),
            Json(request(None, Some(vec![pho_bo_x2()]))),
        )
        .await
        .unwrap_err();

        assert_eq!(err.to_string(), MISSING_FIELDS);
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        assert!(store.appended.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_items_are_rejected_without_append() {
        let store = Arc::new(RecordingStore::new());

        let err = orders_handler(
            AppState(state_with(store.clone())),
            Json(request(Some("Bàn 5"), Some(Vec::new()))),
        )
        .await
        .unwrap_err();

        assert_eq!(err.to_string(), MISSING_FIELDS);
        assert!(store.appended.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn whitespace_name_is_rejected_without_append() {
        let store = Arc::new(RecordingStore::new());

        let err = orders_handler(
            AppState(state_with(store.clone())),
            Json(request(Some("   "), Some(vec![pho_bo_x2()]))),
        )
        .await
        .unwrap_err();

        assert_eq!(err.to_string(), BLANK_NAME);
        assert!(store.appended.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn valid_submission_appends_exactly_one_row() {
        let store = Arc::new(RecordingStore::new());

        let Json(response) = orders_handler(
            AppState(state_with(store.clone())),
            Json(request(Some("Bàn 5"), Some(vec![pho_bo_x2()]))),
        )
        .await
        .unwrap();

        assert!(response.success);
        let order_id = response.order_id.unwrap();
        assert!(!order_id.is_empty());

        let appended = store.appended.lock().unwrap();
        assert_eq!(appended.len(), 1);

        let order = &appended[0];
        assert_eq!(order.order_id, order_id);
        assert_eq!(order.name, "Bàn 5");
        assert_eq!(order.item_summary(), "2x Phở Bò");
        assert_eq!(order.total_price, 90_000);
        assert_eq!(order.status, Status::Pending);
    }

    #[tokio::test]
    async fn name_is_trimmed_and_notes_default_empty() {
        let store = Arc::new(RecordingStore::new());

        orders_handler(
            AppState(state_with(store.clone())),
            Json(request(Some("  Bàn 5  "), Some(vec![pho_bo_x2()]))),
        )
        .await
        .unwrap();

        let appended = store.appended.lock().unwrap();
        assert_eq!(appended[0].name, "Bàn 5");
        assert_eq!(appended[0].notes, "");
    }

    #[tokio::test]
    async fn append_failure_maps_to_internal_error() {
        let store = Arc::new(RecordingStore::failing());

        let err = orders_handler(
            AppState(state_with(store)),
            Json(request(Some("Bàn 5"), Some(vec![pho_bo_x2()]))),
        )
        .await
        .unwrap_err();

        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
