mod file_session_store;
mod memory_session_store;
mod session_context;
mod session_data;
mod session_event;
mod session_store;

pub use self::{
    file_session_store::FileSessionStore, memory_session_store::MemorySessionStore,
    session_context::SessionContext, session_data::SessionData, session_event::SessionEvent,
    session_store::SessionStore,
};
