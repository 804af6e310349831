/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod build_order_request;
mod build_order_response;
mod output_format;

pub use build_order_request::BuildOrderRequest;
pub use build_order_response::BuildOrderResponse;
pub use output_format::OutputFormat;
