mod coercion;
mod interface;
mod middleware;
mod printer;

pub(crate) use coercion::*;
pub(crate) use interface::*;
pub use middleware::*;
