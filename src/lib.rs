//! # Roster-DB: Embedded Student Roster Store
//!
//! Roster-DB is a small embedded store for student records: an ordered
//! in-memory roster with CRUD, search, and reporting, persisted to a single
//! newline-delimited flat file.
//!
//! ## Design
//!
//! - **`StudentRecord`** owns its own line-oriented serialization
//!   (`id,name,age,gpa,course1;course2;...`).
//! - **`RosterStore`** owns the record collection and the backing file:
//!   loaded at [`RosterStore::open`](roster::RosterStore::open), persisted on
//!   [`save`](roster::RosterStore::save) and on drop.
//! - Single-threaded and synchronous: every operation is one bounded pass
//!   over the in-memory roster plus at most one file read or write.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use roster_db::roster::{RosterStore, StudentRecord};
//!
//! let mut store = RosterStore::open("students.txt")?;
//! store.create(StudentRecord::new(1, "Alice", 20, 3.8))?;
//!
//! if let Some(alice) = store.find_by_id_mut(1) {
//!     alice.add_course("Math");
//! }
//!
//! store.save()?;
//! # Ok::<(), roster_db::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod error;
pub mod roster;

pub use error::{Error, Result};
