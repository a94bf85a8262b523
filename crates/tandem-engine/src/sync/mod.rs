//! Cross-thread coordination between the event thread and the render thread.
//!
//! The only shared synchronization primitive is [`SwapGate`]: a one-way shutdown
//! flag plus the lock that keeps buffer presentation and window destruction
//! mutually exclusive.

mod gate;

pub use gate::SwapGate;
