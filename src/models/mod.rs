// Modelos compartidos con el backend (payloads opacos, solo display)

pub mod auth;
pub mod address;
pub mod route;
pub mod hotel;
pub mod ride;
pub mod booking;
pub mod employee;
pub mod vehicle;
pub mod message;
pub mod activity_log;
pub mod user;
pub mod paging;
pub mod responses;

pub use auth::*;
pub use address::*;
pub use route::*;
pub use hotel::*;
pub use ride::*;
pub use booking::*;
pub use employee::*;
pub use vehicle::*;
pub use message::*;
pub use activity_log::*;
pub use user::*;
pub use paging::*;
pub use responses::*;
