//! Route table and fragment normalization.

mod normalize;
mod table;

pub use normalize::{ALIAS_GROUPS, AliasGroup, normalize};
pub use table::{RouteEntry, RouteTable, RouteTableError};
