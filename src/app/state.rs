mod app_state;
mod tools;

pub use app_state::AppState;
pub use tools::{BeltToolState, DragState};
