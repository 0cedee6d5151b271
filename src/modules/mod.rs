pub mod auth;
pub mod salesloft;

mod router;
pub use router::get_router;
