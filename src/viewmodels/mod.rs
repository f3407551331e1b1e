// ViewModels - Estado + lógica de pantalla (sin DOM)

pub mod list_viewmodel;
pub mod session_viewmodel;

pub use list_viewmodel::{ListDisplay, ListViewModel};
pub use session_viewmodel::SessionViewModel;
