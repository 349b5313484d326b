//! Page components, one module per site area.
//!
//! Public pages render bare; protected pages render inside
//! `ProtectedShell`, which runs the route guard before any content shows.

pub mod admin;
pub mod adotante;
pub mod chats;
pub mod home;
pub mod login;
pub mod perfil;
pub mod sobre;
pub mod voluntario;
