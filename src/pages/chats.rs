//! Chat placeholder, shared by adopters and volunteers.
//!
//! The backend has no messaging endpoints yet; the route exists so the
//! menu and the access tables already cover it.

use leptos::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::components::shell::ProtectedShell;

#[component]
pub fn ChatsPage() -> impl IntoView {
    view! {
        <ProtectedShell title="Conversas">
            <EmptyState
                icon="💬"
                title="Nenhuma conversa ainda"
                message="O chat entre adotantes e ONGs está chegando. Por enquanto, combine a visita pelo telefone da ONG."
            />
        </ProtectedShell>
    }
}
