//! Payment Use Cases

mod send_iou;
mod send_xrp;

pub use send_iou::{SendIouCommand, SendIouUseCase};
pub use send_xrp::{SendXrpCommand, SendXrpUseCase};
