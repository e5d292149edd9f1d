//! Codec and edit session for OpenRCT2 `highscores.dat` files.
//!
//! - [`format`] decodes and encodes the binary record file.
//! - [`store::RecordStore`] partitions records into surviving and pending removal.
//! - [`session::EditSession`] drives load, selection and the optional save.
//!
//! # Example
//!
//! ```no_run
//! use highscores_core::{Confirmation, EditSession, Phase};
//!
//! let mut session = EditSession::load("highscores.dat")?;
//! if session.begin()? == Phase::Selecting {
//!     session.remove(b"Forest Frontiers")?;
//!     if session.stop()? == Phase::Committing {
//!         session.confirm(Confirmation::Yes)?;
//!     }
//! }
//! # Ok::<(), highscores_core::SessionError>(())
//! ```

pub mod error;
pub mod format;
pub mod fs;
pub mod record;
pub mod session;
pub mod store;

pub use error::{Field, FormatError, SessionError};
pub use record::{FORMAT_VERSION, Record, RecordFile};
pub use session::{Confirmation, EditSession, Outcome, Phase, Removal, Resolution};
pub use store::RecordStore;
