use chrono::Utc;
use order_lifecycle::domain::event::{OrderCreated, OrderPaid, ORDER_CREATED, ORDER_PAID, ORDER_SUBJECTS};
use order_lifecycle::domain::order::{CreateOrderResponse, OrderStatus, OrderView};
use order_lifecycle::domain::payment::{PaymentDecision, PaymentRequest, PaymentResponse};

#[test]
fn subject_names_are_stable() {
    assert_eq!(ORDER_CREATED, "order.created");
    assert_eq!(ORDER_PAID, "order.paid");
    assert_eq!(ORDER_SUBJECTS, "order.*");
}

#[test]
fn order_created_payload_matches_wire_format() {
    let event = OrderCreated {
        order_id: "1".to_string(),
        user_id: "u1".to_string(),
        items: serde_json::json!([{"menuId": "m1", "qty": 2}]),
        created_at: Utc::now(),
    };

    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["orderId"], "1");
    assert_eq!(value["userId"], "u1");
    assert_eq!(value["items"][0]["menuId"], "m1");
    assert!(value["createdAt"].is_string());
}

#[test]
fn order_paid_payload_matches_wire_format() {
    let event = OrderPaid {
        order_id: "1".to_string(),
        paid_at: Utc::now(),
        amount: 25.5,
        method: "CARD".to_string(),
    };

    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["orderId"], "1");
    assert_eq!(value["amount"], 25.5);
    assert_eq!(value["method"], "CARD");
    assert!(value["paidAt"].is_string());
}

#[test]
fn create_response_serializes_order_id_as_string() {
    let resp = CreateOrderResponse {
        order_id: "1".to_string(),
        status: OrderStatus::Created,
    };
    let value = serde_json::to_value(&resp).unwrap();
    assert_eq!(value, serde_json::json!({"orderId": "1", "status": "CREATED"}));
}

#[test]
fn lookup_response_serializes_numeric_id() {
    let view = OrderView {
        id: 1,
        status: OrderStatus::Paid,
    };
    let value = serde_json::to_value(&view).unwrap();
    assert_eq!(value, serde_json::json!({"id": 1, "status": "PAID"}));
}

#[test]
fn payment_response_is_approved() {
    let resp = PaymentResponse {
        status: PaymentDecision::Approved,
    };
    let value = serde_json::to_value(&resp).unwrap();
    assert_eq!(value, serde_json::json!({"status": "APPROVED"}));
}

#[test]
fn payment_request_defaults_are_optional() {
    let req: PaymentRequest = serde_json::from_value(serde_json::json!({"orderId": "999"})).unwrap();
    assert_eq!(req.order_id, "999");
    assert!(req.amount.is_none());
    assert!(req.method.is_none());
}
