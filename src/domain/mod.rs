//! Domain Layer
//!
//! The core of railgen - license composition rules without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Catalog, LicenseRequest)
//! - `value_objects/` - Immutable value types (ids, LicenseType, Specification)
//! - `services/` - Domain services (SelectionTracker, Preview)
//! - `ports/` - Interface definitions for the license service
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Single source of truth** - Views are derived from the tracker, never read back
//! 3. **Ports & Adapters** - All network access goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
