// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod app_state;
pub mod resources;
pub mod session_state;
pub mod slice;

pub use app_state::*;
pub use resources::*;
pub use session_state::*;
pub use slice::*;
