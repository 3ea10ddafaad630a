pub mod bus;
pub mod config;
pub mod domain {
    pub mod event;
    pub mod order;
    pub mod payment;
}
pub mod error;
pub mod http {
    pub mod handlers {
        pub mod ops;
        pub mod orders;
        pub mod payments;
    }
}
pub mod repo {
    pub mod orders_repo;
    pub mod outbox_repo;
}
pub mod service {
    pub mod notifier;
    pub mod order_service;
    pub mod outbox_relay;
    pub mod payment_service;
}

#[derive(Clone)]
pub struct OrderState {
    pub order_service: service::order_service::OrderService,
}

#[derive(Clone)]
pub struct PaymentState {
    pub payment_service: service::payment_service::PaymentService,
}
