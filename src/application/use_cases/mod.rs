/// Use cases module containing application business logic orchestration
mod generate_build_order;

pub use generate_build_order::GenerateBuildOrderUseCase;
