// Interface adapters: key input mapping and presentation snapshots.

pub mod input;
pub mod presenter;
pub mod protocol;
