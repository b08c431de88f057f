//! # Ordering client
//!
//! Client half of the submission flow, driven from the CLI the way the
//! browser pages drove it:
//!
//! - cart must be non-empty and the trimmed name non-empty before any
//!   network call is made
//! - exactly one request per submit; the process is serial, so there is no
//!   concurrent double submit from one session
//! - the cart is cleared only on a `success` response carrying an order
//!   id; any failure leaves the cart untouched so the user can retry
//! - the confirmation view receives the order id and name as query
//!   parameters and shows a placeholder for a missing value

use cart::{
    CartAction, CartSession, CartState,
    orders::{OrderRequest, OrderResponse},
};
use reqwest::Client;

pub const EMPTY_CART_MESSAGE: &str = "Giỏ hàng trống. Hãy thêm các món ngon từ thực đơn!";
pub const MISSING_NAME_MESSAGE: &str = "Vui lòng nhập tên của bạn";
pub const CONNECTION_MESSAGE: &str =
    "Không thể kết nối với máy chủ. Vui lòng kiểm tra kết nối và thử lại.";
pub const FALLBACK_MESSAGE: &str = "Không thể gửi đơn hàng. Vui lòng thử lại.";

pub enum Submission {
    Accepted { order_id: String, name: String },
    Rejected { message: String },
}

/// Local preconditions. A violation blocks submission with a user-facing
/// message and no request is sent.
pub fn precondition_error(state: &CartState, name: &str) -> Option<&'static str> {
    if state.is_empty() {
        return Some(EMPTY_CART_MESSAGE);
    }

    if name.trim().is_empty() {
        return Some(MISSING_NAME_MESSAGE);
    }

    None
}

/// Send the cart as an order. Clears the cart only when the server
/// confirms with an order id.
pub async fn submit_order(
    http: &Client,
    server: &str,
    session: &mut CartSession,
    name: &str,
    notes: &str,
) -> Submission {
    if let Some(message) = precondition_error(session.state(), name) {
        return Submission::Rejected {
            message: message.to_string(),
        };
    }

    let name = name.trim().to_string();
    let request = OrderRequest {
        name: Some(name.clone()),
        items: Some(session.state().items.clone()),
        total_price: Some(session.state().total_price),
        notes: Some(notes.trim().to_string()),
    };

    let response = match http
        .post(format!("{server}/orders"))
        .json(&request)
        .send()
        .await
    {
        Ok(response) => response,
        Err(_) => {
            return Submission::Rejected {
                message: CONNECTION_MESSAGE.to_string(),
            };
        }
    };

    let body: OrderResponse = match response.json().await {
        Ok(body) => body,
        Err(_) => {
            return Submission::Rejected {
                message: CONNECTION_MESSAGE.to_string(),
            };
        }
    };

    match (body.success, body.order_id) {
        (true, Some(order_id)) => {
            session.dispatch(CartAction::Clear);

            Submission::Accepted { order_id, name }
        }
        _ => Submission::Rejected {
            message: body.error.unwrap_or_else(|| FALLBACK_MESSAGE.to_string()),
        },
    }
}

/// Route the browser flow navigated to after a submission.
pub fn success_route(order_id: &str, name: &str) -> String {
    format!("/success?orderId={order_id}&name={name}")
}

/// Confirmation view. A missing order id or name renders a placeholder
/// rather than failing.
pub fn confirmation_view(order_id: Option<&str>, name: Option<&str>) -> String {
    let order_id = order_id.filter(|value| !value.is_empty()).unwrap_or("N/A");
    let name = name.filter(|value| !value.is_empty()).unwrap_or("N/A");

    format!(
        "Đặt Hàng Thành Công!\n\
         Đơn hàng của bạn đã được gửi thành công đến bếp.\n\
         \n\
         Mã Đơn Hàng: {order_id}\n\
         Tên: {name}\n\
         \n\
         Món ăn của bạn sẽ được chuẩn bị ngay. Vui lòng ngồi tại bàn và chờ chúng tôi mang ra."
    )
}
