//! Networking layer: backend configuration, wire types, and REST helpers.
//!
//! BACKEND SURFACE
//! ===============
//! The backend is an external identity-and-data service; this client
//! only touches its auth endpoints and the `profiles` table. The wider
//! platform surface is owned entirely by backend policies, triggers,
//! and edge functions, and is listed here for orientation only:
//!
//! - appointments: clients book against doctor availability; status
//!   changes notify both parties.
//! - prescriptions: doctors issue, pharmacies fulfil; row-level
//!   policies scope reads to the patient, prescriber, and pharmacy.
//! - bed availability: hospitals publish counts; clients read.
//! - verification: admins flag practitioner and facility profiles as
//!   verified.
//!
//! None of these have client code yet; adding one means a new module
//! beside [`api`] with the same single-attempt, alert-on-failure shape.

pub mod api;
pub mod config;
pub mod error;
pub mod types;
