//! Repository implementations for all Parkgate entities.

pub mod campus;
pub mod session;
pub mod spot;
pub mod user;
pub mod wall_code;

pub use campus::CampusRepository;
pub use session::SessionRepository;
pub use spot::SpotRepository;
pub use user::UserRepository;
pub use wall_code::WallCodeRepository;
