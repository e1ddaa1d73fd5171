mod model;
mod snapshot;

pub use model::{MessageRole, Session, SessionStatus, SessionsResponse};
pub use snapshot::SessionSnapshot;
