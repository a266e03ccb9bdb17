// SPDX-License-Identifier: MPL-2.0
//! Newsletter subscription popup overlay.
//!
//! The popup is self-contained and self-scheduling: the host mounts it with
//! no configuration beyond timing/sizing parameters, and it arms its own
//! entrance deadline. Its lifetime is a small phase machine:
//!
//! ```text
//! Pending ──entrance deadline──▶ Open(Form)
//!                                  │   ▲
//!                        submit ok │   │ (one-way)
//!                                  ▼   │
//!                               Open(Confirmed)
//!
//! Open(_) ──close requested──▶ Closing ──close deadline──▶ Closed
//! ```
//!
//! Both deadlines are plain `Instant`s stored inside the phase and advanced
//! by tick messages; dropping the state is the cancellation. Validation
//! failures loop on `Open(Form)` and surface only as emitted notification
//! events - nothing here ever blocks or breaks the machine.

mod card_size;
mod state;
mod timing;
mod validate;
mod view;

pub use card_size::CardSize;
pub use state::{Content, Event, Message, Phase, State};
pub use timing::Timing;
pub use validate::{is_plausible_email, EmailValidator};
pub use view::{view, ViewContext};
