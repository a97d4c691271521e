//! Pure data structures owned by the [`Storefront`](crate::storefront_actor::Storefront) state.

pub mod cart;
pub mod money;
pub mod order;
pub mod product;
pub mod user;

pub use cart::*;
pub use money::*;
pub use order::*;
pub use product::*;
pub use user::*;
