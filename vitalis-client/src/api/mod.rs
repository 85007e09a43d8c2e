//! Typed calls to the Vitalis REST API
//!
//! Each submodule adds an `impl VitalisClient` block for one backend
//! resource. Request bodies are validated before anything is sent.

mod admin;
mod appointments;
mod clinics;
mod ratings;
mod requests;
