pub mod context;
pub mod guard;
pub mod session;

pub use context::{use_auth, AuthContext, AuthContextData, AuthProvider};
pub use guard::{GuestOnly, RequireAuth};
pub use session::{SessionEvent, SessionManager};
