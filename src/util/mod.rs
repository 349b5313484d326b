//! Cross-cutting helpers: storage abstraction, CPF handling, view adaptation.

pub mod adapter;
pub mod cpf;
pub mod storage;
