// Account types owned by the seraph program

pub mod pool;
pub mod v_list;

pub use pool::Pool;
pub use v_list::{VList, VListEntry};
