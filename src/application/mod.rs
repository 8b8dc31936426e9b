/// Application layer - Use cases, DTOs and the persisted client store
pub mod dto;
pub mod store;
pub mod use_cases;
